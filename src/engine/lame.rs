//! LAME engine binding
//!
//! Owns a `lame_t` handle from `mp3lame-sys` and implements
//! [`EncoderEngine`] over it. The handle is exclusively owned by one engine
//! value; teardown happens in `Drop`.

use std::os::raw::{c_int, c_uchar};

use mp3lame_sys as ffi;

use crate::config::EncoderConfig;
use crate::engine::EncoderEngine;
use crate::error::InitError;

// MPEG_mode values from lame.h
const JOINT_STEREO: u32 = 1;
const MONO: u32 = 3;
// vbr_mode: vbr_default == vbr_mtrh
const VBR_DEFAULT: u32 = 4;

/// MP3 encoder engine backed by libmp3lame.
pub struct LameEngine {
    handle: ffi::lame_t,
    channels: u16,
    frame_size: usize,
}

// The handle is exclusively owned and only touched through &mut self.
unsafe impl Send for LameEngine {}

impl LameEngine {
    /// Construct and initialize a LAME handle from the given settings.
    ///
    /// Any failure closes the partially-configured handle before returning.
    pub fn new(config: &EncoderConfig) -> Result<Self, InitError> {
        let handle = unsafe { ffi::lame_init() };
        if handle.is_null() {
            return Err(InitError::EngineInitFailed(
                "lame_init returned null".into(),
            ));
        }

        unsafe {
            ffi::lame_set_in_samplerate(handle, config.sample_rate as c_int);
            ffi::lame_set_out_samplerate(handle, config.sample_rate as c_int);
            ffi::lame_set_num_channels(handle, config.channels as c_int);
            ffi::lame_set_quality(handle, config.effective_quality() as c_int);
            ffi::lame_set_mode(
                handle,
                if config.channels > 1 { JOINT_STEREO as _ } else { MONO as _ },
            );
            ffi::lame_set_brate(handle, (config.bit_rate / 1000) as c_int);
            if let Some(vbr_quality) = config.vbr_quality {
                ffi::lame_set_brate(handle, 0);
                ffi::lame_set_VBR(handle, VBR_DEFAULT as _);
                ffi::lame_set_VBR_quality(handle, vbr_quality);
            }
            // The Xing/VBR tag would be a pseudo-frame at stream start that the
            // muxer has no way to place; never write it.
            ffi::lame_set_bWriteVbrTag(handle, 0);
            ffi::lame_set_disable_reservoir(handle, !config.reservoir as c_int);

            if ffi::lame_init_params(handle) < 0 {
                ffi::lame_close(handle);
                return Err(InitError::EngineInitFailed(
                    "lame_init_params failed".into(),
                ));
            }
        }

        let frame_size = unsafe { ffi::lame_get_framesize(handle) };
        if frame_size <= 0 {
            unsafe { ffi::lame_close(handle) };
            return Err(InitError::EngineInitFailed(format!(
                "lame_get_framesize returned {}",
                frame_size
            )));
        }

        Ok(Self {
            handle,
            channels: config.channels,
            frame_size: frame_size as usize,
        })
    }
}

impl EncoderEngine for LameEngine {
    fn frame_size(&self) -> usize {
        self.frame_size
    }

    fn encode(&mut self, pcm: &[i16], dst: &mut [u8]) -> i32 {
        let dst_ptr = dst.as_mut_ptr() as *mut c_uchar;
        let dst_len = dst.len() as c_int;
        unsafe {
            if self.channels > 1 {
                ffi::lame_encode_buffer_interleaved(
                    self.handle,
                    pcm.as_ptr() as *mut i16,
                    (pcm.len() / 2) as c_int,
                    dst_ptr,
                    dst_len,
                )
            } else {
                // Mono: LAME takes separate left/right planes; hand it the
                // same samples for both, as the original wrapper does.
                ffi::lame_encode_buffer(
                    self.handle,
                    pcm.as_ptr() as *mut i16,
                    pcm.as_ptr() as *mut i16,
                    pcm.len() as c_int,
                    dst_ptr,
                    dst_len,
                )
            }
        }
    }

    fn flush(&mut self, dst: &mut [u8]) -> i32 {
        unsafe {
            ffi::lame_encode_flush(self.handle, dst.as_mut_ptr() as *mut c_uchar, dst.len() as c_int)
        }
    }
}

impl Drop for LameEngine {
    fn drop(&mut self) {
        unsafe { ffi::lame_close(self.handle) };
    }
}
