//! Streaming MP3 encoder adapter.
//!
//! Wraps a LAME-style encoder engine whose output arrives in chunks that do
//! not align with MP3 frame boundaries, buffers the partial output, and emits
//! exactly one complete frame per successful call — the shape a container
//! muxer expects.

pub(crate) mod buffer;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod error;
pub(crate) mod header;
pub(crate) mod packetizer;

#[cfg(test)]
pub(crate) mod tests;

pub use buffer::AccumulationBuffer;
pub use config::{EncoderConfig, SUPPORTED_SAMPLE_RATES};
pub use engine::EncoderEngine;
#[cfg(feature = "lame")]
pub use engine::lame::LameEngine;
pub use error::{BufferError, EncodeError, HeaderError, InitError};
pub use header::{parse_frame_header, ChannelMode, FrameInfo, MpegVersion};
pub use packetizer::Mp3Encoder;
