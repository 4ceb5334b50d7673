//! Encoder adapter and frame extraction
//!
//! Bridges raw PCM input to complete MP3 frames. Each call runs the engine,
//! lands its output in the accumulation buffer, and extracts at most one
//! complete frame from the buffer head; leftover bytes stay buffered for the
//! next call.

use bytes::Bytes;

use crate::buffer::AccumulationBuffer;
use crate::config::EncoderConfig;
use crate::engine::EncoderEngine;
#[cfg(feature = "lame")]
use crate::engine::lame::LameEngine;
use crate::error::{EncodeError, HeaderError};
#[cfg(feature = "lame")]
use crate::error::InitError;
use crate::header;

/// Samples per channel in one MPEG-1 layer III frame.
const SAMPLES_PER_FRAME: usize = 1152;

/// Accumulation buffer sizing: LAME's worst-case output bound of
/// `1.25 * samples + 7200` for one input frame, plus room for a second
/// maximal frame left over from the previous call.
const BUFFER_CAPACITY: usize = 7200 + 2 * SAMPLES_PER_FRAME + SAMPLES_PER_FRAME / 4;

/// Try to slice one complete MP3 frame off the front of the buffer.
///
/// Tri-state result: `Ok(Some(frame))` with the frame evicted from the
/// buffer, `Ok(None)` when more bytes are needed (fewer than a header's worth
/// buffered, or the parsed frame length exceeds what is buffered), `Err` when
/// the bytes at the head are not a usable frame header. On error the buffer
/// is left unmodified: discarding the corrupt prefix would silently lose
/// frame alignment, and retrying without new bytes cannot succeed.
pub(crate) fn try_extract_frame(
    buf: &mut AccumulationBuffer,
) -> Result<Option<Bytes>, HeaderError> {
    let valid = buf.valid();
    if valid.len() < header::HEADER_SIZE {
        return Ok(None);
    }

    let info = header::parse_frame_header(valid)?;
    if info.frame_size > valid.len() {
        return Ok(None);
    }

    let frame = Bytes::copy_from_slice(&valid[..info.frame_size]);
    buf.evict(info.frame_size);
    Ok(Some(frame))
}

/// MP3 encoder adapter: PCM in, one complete frame out per successful call.
///
/// Owns the opaque engine and the accumulation buffer; one value per stream,
/// no shared state. Callers serialize access themselves when sharing across
/// threads. Teardown is `Drop`.
pub struct Mp3Encoder<E: EncoderEngine> {
    engine: E,
    buffer: AccumulationBuffer,
    channels: u16,
    sample_rate: u32,
}

#[cfg(feature = "lame")]
impl Mp3Encoder<LameEngine> {
    /// Validate `config` and open a LAME-backed encoder.
    pub fn open(config: &EncoderConfig) -> Result<Self, InitError> {
        config.validate()?;
        let engine = LameEngine::new(config)?;
        Ok(Self::with_engine(engine, config))
    }
}

impl<E: EncoderEngine> Mp3Encoder<E> {
    /// Wrap an already-constructed engine. `config` must match the settings
    /// the engine was built with.
    pub fn with_engine(engine: E, config: &EncoderConfig) -> Self {
        Self {
            engine,
            buffer: AccumulationBuffer::new(BUFFER_CAPACITY),
            channels: config.channels,
            sample_rate: config.sample_rate,
        }
    }

    /// Encode one block of PCM samples (interleaved when stereo); expects
    /// [`frame_size`](Self::frame_size) samples per channel.
    ///
    /// Returns `Ok(Some(frame))` when a complete frame became available,
    /// `Ok(None)` when more input is needed first.
    pub fn encode(&mut self, pcm: &[i16]) -> Result<Option<Bytes>, EncodeError> {
        self.run(Some(pcm))
    }

    /// Signal end of stream and drain: call repeatedly until `Ok(None)`.
    pub fn flush(&mut self) -> Result<Option<Bytes>, EncodeError> {
        self.run(None)
    }

    fn run(&mut self, pcm: Option<&[i16]>) -> Result<Option<Bytes>, EncodeError> {
        let dst = self.buffer.spare_capacity_mut();
        let status = match pcm {
            Some(samples) => self.engine.encode(samples, dst),
            None => self.engine.flush(dst),
        };

        if status < 0 {
            if status == -1 {
                let filled = self.buffer.len();
                let free = self.buffer.capacity() - filled;
                tracing::error!(filled, free, "engine output buffer too small");
                return Err(EncodeError::OutputBufferTooSmall { filled, free });
            }
            tracing::error!(status, "encoder engine failure");
            return Err(EncodeError::EngineFailure(status));
        }

        self.buffer.commit(status as usize).map_err(|e| {
            tracing::error!(error = %e, "engine overran the accumulation buffer");
            e
        })?;

        let frame = try_extract_frame(&mut self.buffer).map_err(|e| {
            tracing::error!(error = %e, filled = self.buffer.len(), "unusable frame header at buffer head");
            e
        })?;

        tracing::trace!(
            produced = status,
            frame_len = frame.as_ref().map(Bytes::len),
            buffered = self.buffer.len(),
            "encode call complete"
        );
        Ok(frame)
    }

    /// Samples per channel the engine consumes per [`encode`](Self::encode) call.
    pub fn frame_size(&self) -> usize {
        self.engine.frame_size()
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes currently accumulated and not yet emitted as a frame.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }
}
