//! Test support: a scripted engine standing in for LAME, plus shared frame
//! fixtures. Integration scenarios live in [`adapter`].

mod adapter;

use std::collections::VecDeque;

use crate::engine::EncoderEngine;

/// Length of the fixture frame produced by [`frame_bytes`].
pub(crate) const TEST_FRAME_SIZE: usize = 120;

/// One complete 120-byte MP3 frame: MPEG-2 Layer III, 40 kbit/s, 24000 Hz,
/// mono (40 * 144000 / (24000 << 1) = 120), header plus counted payload.
pub(crate) fn frame_bytes() -> Vec<u8> {
    let mut frame = vec![0xff, 0xf3, 0x54, 0xc0];
    frame.extend((0..TEST_FRAME_SIZE - 4).map(|i| i as u8));
    frame
}

/// One scripted engine response.
pub(crate) enum Chunk {
    /// Write these bytes into the destination slice.
    Bytes(Vec<u8>),
    /// Return this raw status without writing anything.
    Status(i32),
}

/// Engine test double that replays a fixed script of outputs.
///
/// Both `encode` and `flush` consume from the same script; an exhausted
/// script produces zero bytes, like a drained engine.
pub(crate) struct ScriptedEngine {
    script: VecDeque<Chunk>,
    frame_size: usize,
}

impl ScriptedEngine {
    pub(crate) fn new(script: Vec<Chunk>) -> Self {
        Self {
            script: script.into(),
            frame_size: 1152,
        }
    }

    fn next(&mut self, dst: &mut [u8]) -> i32 {
        match self.script.pop_front() {
            Some(Chunk::Bytes(bytes)) => {
                if bytes.len() > dst.len() {
                    return -1;
                }
                dst[..bytes.len()].copy_from_slice(&bytes);
                bytes.len() as i32
            }
            Some(Chunk::Status(status)) => status,
            None => 0,
        }
    }
}

impl EncoderEngine for ScriptedEngine {
    fn frame_size(&self) -> usize {
        self.frame_size
    }

    fn encode(&mut self, _pcm: &[i16], dst: &mut [u8]) -> i32 {
        self.next(dst)
    }

    fn flush(&mut self, dst: &mut [u8]) -> i32 {
        self.next(dst)
    }
}

#[test]
fn test_fixture_frame_parses_to_its_own_length() {
    let frame = frame_bytes();
    let info = crate::header::parse_frame_header(&frame).unwrap();
    assert_eq!(info.frame_size, TEST_FRAME_SIZE);
    assert_eq!(info.sample_rate, 24000);
    assert_eq!(info.channel_mode, crate::header::ChannelMode::Mono);
}
