//! MPEG audio frame header parsing
//!
//! Pure functions over the 4-byte header that prefixes every MP3 frame.
//! The frame length computed here is what lets the packetizer slice one
//! complete frame out of the encoder's unaligned output stream.

use crate::error::HeaderError;

/// Size of the fixed MPEG audio frame header, in bytes.
pub const HEADER_SIZE: usize = 4;

/// Base sample-rate table (MPEG-1); MPEG-2 and MPEG-2.5 halve and quarter it.
const SAMPLE_RATE_TABLE: [u32; 3] = [44100, 48000, 32000];

/// Bitrate table in kbit/s, indexed by `[lsf][layer - 1][bitrate_index]`.
/// Index 0 is free format, index 15 is invalid.
const BITRATE_TABLE: [[[u32; 15]; 3]; 2] = [
    // MPEG-1
    [
        [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448],
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384],
        [0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320],
    ],
    // MPEG-2 / MPEG-2.5 (low sampling frequency)
    [
        [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
        [0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160],
    ],
];

/// MPEG version encoded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MpegVersion {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

impl MpegVersion {
    /// Low-sampling-frequency flag (set for MPEG-2 and MPEG-2.5).
    fn lsf(self) -> bool {
        !matches!(self, MpegVersion::Mpeg1)
    }

    /// Right-shift applied to the base sample-rate table.
    fn sample_rate_shift(self) -> u32 {
        match self {
            MpegVersion::Mpeg1 => 0,
            MpegVersion::Mpeg2 => 1,
            MpegVersion::Mpeg25 => 2,
        }
    }
}

/// Channel mode encoded in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

/// Decoded MPEG audio frame header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub version: MpegVersion,
    /// Layer number, 1 through 3.
    pub layer: u8,
    /// Bit rate in bits per second.
    pub bit_rate: u32,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    pub padding: bool,
    pub channel_mode: ChannelMode,
    /// Total frame length in bytes, header included.
    pub frame_size: usize,
}

/// Parse an MPEG audio frame header from the start of `bytes`.
///
/// Requires at least [`HEADER_SIZE`] bytes; shorter input is reported as
/// [`HeaderError::Invalid`], never a panic. Pure function, no side effects.
pub fn parse_frame_header(bytes: &[u8]) -> Result<FrameInfo, HeaderError> {
    if bytes.len() < HEADER_SIZE {
        return Err(HeaderError::Invalid);
    }
    let header = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);

    // Sync pattern: top 11 bits all set.
    if header & 0xffe0_0000 != 0xffe0_0000 {
        return Err(HeaderError::Invalid);
    }

    let version = match (header >> 19) & 3 {
        0 => MpegVersion::Mpeg25,
        2 => MpegVersion::Mpeg2,
        3 => MpegVersion::Mpeg1,
        _ => return Err(HeaderError::Invalid),
    };

    let layer_bits = (header >> 17) & 3;
    if layer_bits == 0 {
        return Err(HeaderError::Invalid);
    }
    let layer = (4 - layer_bits) as u8;

    let bitrate_index = ((header >> 12) & 0xf) as usize;
    if bitrate_index == 15 {
        return Err(HeaderError::Invalid);
    }
    if bitrate_index == 0 {
        return Err(HeaderError::FreeFormatUnsupported);
    }

    let sample_rate_index = ((header >> 10) & 3) as usize;
    if sample_rate_index == 3 {
        return Err(HeaderError::Invalid);
    }

    let padding = (header >> 9) & 1;
    let channel_mode = match (header >> 6) & 3 {
        0 => ChannelMode::Stereo,
        1 => ChannelMode::JointStereo,
        2 => ChannelMode::DualChannel,
        _ => ChannelMode::Mono,
    };

    let sample_rate = SAMPLE_RATE_TABLE[sample_rate_index] >> version.sample_rate_shift();
    let kbps = BITRATE_TABLE[version.lsf() as usize][(layer - 1) as usize][bitrate_index];

    let kbps_usize = kbps as usize;
    let sample_rate_usize = sample_rate as usize;
    let padding_usize = padding as usize;
    let frame_size = match layer {
        1 => (kbps_usize * 12000 / sample_rate_usize + padding_usize) * 4,
        2 => kbps_usize * 144000 / sample_rate_usize + padding_usize,
        _ => {
            kbps_usize * 144000 / (sample_rate_usize << version.lsf() as usize) + padding_usize
        }
    };

    Ok(FrameInfo {
        version,
        layer,
        bit_rate: kbps * 1000,
        sample_rate,
        padding: padding != 0,
        channel_mode,
        frame_size,
    })
}
