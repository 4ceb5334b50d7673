//! Encoder engine seam
//!
//! The compression engine is an opaque collaborator: PCM goes in, compressed
//! bytes come out in chunks with no relation to frame boundaries. The trait
//! keeps LAME's status convention at this seam; the adapter converts it to
//! typed errors in one place.

#[cfg(feature = "lame")]
pub mod lame;

/// A streaming MP3 encoder engine.
pub trait EncoderEngine {
    /// Samples per channel the engine consumes per encode call.
    fn frame_size(&self) -> usize;

    /// Encode one block of PCM samples (interleaved when stereo) into `dst`.
    ///
    /// Returns the number of bytes written, or a negative status: `-1` means
    /// `dst` was too small, any other negative value is an engine failure.
    fn encode(&mut self, pcm: &[i16], dst: &mut [u8]) -> i32;

    /// Drain the engine's internal state at end of stream into `dst`.
    ///
    /// Same return convention as [`encode`](Self::encode).
    fn flush(&mut self, dst: &mut [u8]) -> i32;
}
