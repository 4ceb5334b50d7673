use thiserror::Error;

/// Errors raised while opening an encoder adapter
#[derive(Error, Debug)]
pub enum InitError {
    /// More than two channels requested; rejected before any engine allocation
    #[error("unsupported channel layout: {0} channels (only mono and stereo are supported)")]
    UnsupportedChannelLayout(u16),

    /// The sample rate is not one of the rates MP3 can express
    #[error("unsupported sample rate: {0} Hz")]
    UnsupportedSampleRate(u32),

    /// Quality outside the 0-9 range the engine accepts
    #[error("invalid quality setting: {0} (expected 0-9)")]
    InvalidQuality(u8),

    /// Underlying engine construction or parameter application failed
    #[error("engine initialization failed: {0}")]
    EngineInitFailed(String),
}

/// Errors raised by a single encode or flush call
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The engine's destination slice was too small for this call's output
    #[error("engine output buffer too small (filled: {filled}, free: {free})")]
    OutputBufferTooSmall { filled: usize, free: usize },

    /// Unspecified negative status from the engine
    #[error("encoder engine failed with status {0}")]
    EngineFailure(i32),

    /// A malformed or unsupported frame header was found at the buffer head
    #[error("frame header error: {0}")]
    Header(#[from] HeaderError),

    /// The accumulation buffer could not hold the engine's output
    #[error("accumulation buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Errors raised by the MPEG audio frame header parser
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// Bad sync pattern or an invalid/reserved field combination
    #[error("invalid MPEG audio frame header")]
    Invalid,

    /// Bitrate index 0: frame length is not derivable from the header alone
    #[error("free format frames are not supported")]
    FreeFormatUnsupported,
}

/// Errors raised by the accumulation buffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// An append would exceed capacity by `excess` bytes
    #[error("accumulation buffer overflow by {excess} bytes")]
    Overflow { excess: usize },
}
