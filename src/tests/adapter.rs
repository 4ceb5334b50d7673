//! End-to-end adapter scenarios against the scripted engine.

use super::{frame_bytes, Chunk, ScriptedEngine, TEST_FRAME_SIZE};
use crate::config::EncoderConfig;
use crate::error::{EncodeError, HeaderError};
use crate::packetizer::Mp3Encoder;

fn adapter(script: Vec<Chunk>) -> Mp3Encoder<ScriptedEngine> {
    Mp3Encoder::with_engine(ScriptedEngine::new(script), &EncoderConfig::default())
}

fn pcm() -> Vec<i16> {
    vec![0i16; 1152 * 2]
}

#[test]
fn test_unaligned_chunks_assemble_one_frame() {
    // Engine emits 50 then 80 bytes; together they hold one 120-byte frame
    // and 10 bytes of the next one.
    let mut stream = frame_bytes();
    stream.extend_from_slice(&frame_bytes()[..10]);
    assert_eq!(stream.len(), 130);

    let mut enc = adapter(vec![
        Chunk::Bytes(stream[..50].to_vec()),
        Chunk::Bytes(stream[50..].to_vec()),
    ]);

    assert!(enc.encode(&pcm()).unwrap().is_none());
    assert_eq!(enc.buffered(), 50);

    let frame = enc.encode(&pcm()).unwrap().expect("frame after 130 bytes");
    assert_eq!(frame.len(), TEST_FRAME_SIZE);
    assert_eq!(frame.as_ref(), frame_bytes().as_slice());
    assert_eq!(enc.buffered(), 10);
}

#[test]
fn test_flush_drains_one_frame_per_call() {
    // One encode call lands two complete frames; the second comes out only
    // on a later call, then the drain loop hits Ok(None).
    let mut stream = frame_bytes();
    stream.extend_from_slice(&frame_bytes());

    let mut enc = adapter(vec![Chunk::Bytes(stream)]);

    let first = enc.encode(&pcm()).unwrap().expect("first frame");
    assert_eq!(first.len(), TEST_FRAME_SIZE);
    assert_eq!(enc.buffered(), TEST_FRAME_SIZE);

    let mut drained = Vec::new();
    while let Some(frame) = enc.flush().unwrap() {
        drained.push(frame);
    }
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].len(), TEST_FRAME_SIZE);
    assert_eq!(enc.buffered(), 0);
}

#[test]
fn test_output_buffer_too_small_is_fatal() {
    let mut enc = adapter(vec![Chunk::Status(-1)]);
    match enc.encode(&pcm()) {
        Err(EncodeError::OutputBufferTooSmall { filled, free }) => {
            assert_eq!(filled, 0);
            assert!(free > 0);
        }
        other => panic!("expected OutputBufferTooSmall, got {:?}", other),
    }
}

#[test]
fn test_engine_failure_carries_status() {
    let mut enc = adapter(vec![Chunk::Status(-5)]);
    match enc.encode(&pcm()) {
        Err(EncodeError::EngineFailure(status)) => assert_eq!(status, -5),
        other => panic!("expected EngineFailure, got {:?}", other),
    }
}

#[test]
fn test_corrupt_engine_output_is_fatal_and_retained() {
    let mut enc = adapter(vec![Chunk::Bytes(vec![0xde, 0xad, 0xbe, 0xef, 0x00])]);
    match enc.encode(&pcm()) {
        Err(EncodeError::Header(HeaderError::Invalid)) => {}
        other => panic!("expected Header(Invalid), got {:?}", other),
    }
    // No partial eviction: the bytes are still there.
    assert_eq!(enc.buffered(), 5);
}

#[test]
fn test_short_engine_output_is_not_parsed() {
    // 3 bytes buffered is below the header minimum; not an error.
    let mut enc = adapter(vec![Chunk::Bytes(vec![0xff, 0xfb, 0x90])]);
    assert!(enc.encode(&pcm()).unwrap().is_none());
    assert_eq!(enc.buffered(), 3);
}

#[test]
fn test_adapter_exposes_engine_frame_size() {
    let enc = adapter(vec![]);
    assert_eq!(enc.frame_size(), 1152);
    assert_eq!(enc.channels(), 2);
    assert_eq!(enc.sample_rate(), 44100);
}

#[test]
fn test_config_loads_from_toml_with_defaults() {
    let config: EncoderConfig = toml::from_str(
        r#"
        channels = 1
        sample_rate = 16000
        quality = 7
        "#,
    )
    .unwrap();
    assert_eq!(config.channels, 1);
    assert_eq!(config.sample_rate, 16000);
    assert_eq!(config.quality, Some(7));
    assert_eq!(config.bit_rate, 128_000);
    assert!(config.vbr_quality.is_none());
    assert!(config.reservoir);
    assert!(config.validate().is_ok());
}
