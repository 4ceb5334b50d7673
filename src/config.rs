//! Encoder configuration
//!
//! Options recognized by [`Mp3Encoder::open`](crate::Mp3Encoder::open),
//! deserializable from configuration files.

use serde::{Deserialize, Serialize};

use crate::error::InitError;

/// Sample rates MP3 can express (MPEG-1, MPEG-2, and MPEG-2.5 rates).
pub const SUPPORTED_SAMPLE_RATES: [u32; 9] = [
    44100, 48000, 32000, 22050, 24000, 16000, 11025, 12000, 8000,
];

/// Quality the engine falls back to when none is requested.
const DEFAULT_QUALITY: u8 = 5;

/// MP3 encoder settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Channel count (1 or 2)
    pub channels: u16,
    /// Input and output sample rate in Hz
    pub sample_rate: u32,
    /// Target bitrate in bits per second (ignored when `vbr_quality` is set)
    #[serde(default = "default_bit_rate")]
    pub bit_rate: u64,
    /// Compression quality, 0 (best) to 9 (fastest); engine default when unset
    #[serde(default)]
    pub quality: Option<u8>,
    /// Variable-bitrate quality; selects quality-based rate over `bit_rate`
    #[serde(default)]
    pub vbr_quality: Option<f32>,
    /// Use the bit reservoir
    #[serde(default = "default_reservoir")]
    pub reservoir: bool,
}

fn default_bit_rate() -> u64 {
    128_000
}

fn default_reservoir() -> bool {
    true
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            channels: 2,
            sample_rate: 44100,
            bit_rate: default_bit_rate(),
            quality: None,
            vbr_quality: None,
            reservoir: default_reservoir(),
        }
    }
}

impl EncoderConfig {
    /// Check the option values before any engine allocation.
    pub fn validate(&self) -> Result<(), InitError> {
        if self.channels == 0 || self.channels > 2 {
            return Err(InitError::UnsupportedChannelLayout(self.channels));
        }
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(InitError::UnsupportedSampleRate(self.sample_rate));
        }
        if let Some(q) = self.quality {
            if q > 9 {
                return Err(InitError::InvalidQuality(q));
            }
        }
        Ok(())
    }

    /// Quality to hand to the engine, explicit or default.
    #[cfg_attr(not(feature = "lame"), allow(dead_code))]
    pub(crate) fn effective_quality(&self) -> u8 {
        self.quality.unwrap_or(DEFAULT_QUALITY)
    }
}
