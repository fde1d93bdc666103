// In: src/config.rs

//! The single source of truth for visual-codec configuration.
//!
//! This module defines the unified `CodecConfig` struct, created once at the
//! application boundary (CLI arguments or a user's JSON document) and passed
//! down by reference. Validation happens here, at the boundary: the kernels
//! themselves accept any chunk size `>= 1`, while a deployment additionally
//! requires "1 or a multiple of 8" so that chunks tile whole pixel bytes.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// The unified configuration for a serialization run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Bit-replication factor for the redundancy coder. 1 is a no-op.
    #[serde(default = "default_exp_factor")]
    pub exp_factor: usize,

    /// How many bits each grouped run unit ("pixel" boundary) occupies.
    #[serde(default = "default_chunk_bits")]
    pub chunk_bits: usize,

    /// Frame width in pixels for the output frame grid.
    #[serde(default = "default_frame_width")]
    pub frame_width: u16,

    /// Frame height in pixels for the output frame grid.
    #[serde(default = "default_frame_height")]
    pub frame_height: u16,

    /// Playback rate of the generated frame grid.
    #[serde(default = "default_fps")]
    pub fps: u16,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            exp_factor: default_exp_factor(),
            chunk_bits: default_chunk_bits(),
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
            fps: default_fps(),
        }
    }
}

impl CodecConfig {
    /// Checks the deployment-level argument rules.
    ///
    /// Called by the bridge before any work starts, so a bad combination
    /// fails before artifacts are written.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.exp_factor == 0 {
            return Err(CodecError::InvalidArgument(
                "expansion factor must be at least 1".to_string(),
            ));
        }
        if self.chunk_bits == 0 {
            return Err(CodecError::InvalidArgument(
                "chunk size must be at least 1 bit".to_string(),
            ));
        }
        if self.chunk_bits != 1 && self.chunk_bits % 8 != 0 {
            return Err(CodecError::InvalidArgument(format!(
                "chunk size must be 1 or a multiple of 8, got {}",
                self.chunk_bits
            )));
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(CodecError::InvalidArgument(format!(
                "frame dimensions must be nonzero, got {}x{}",
                self.frame_width, self.frame_height
            )));
        }
        if self.fps == 0 {
            return Err(CodecError::InvalidArgument(
                "fps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of pixel bytes in one frame.
    pub fn frame_size(&self) -> usize {
        usize::from(self.frame_width) * usize::from(self.frame_height)
    }
}

fn default_exp_factor() -> usize {
    1
}

fn default_chunk_bits() -> usize {
    8
}

fn default_frame_width() -> u16 {
    352
}

fn default_frame_height() -> u16 {
    240
}

fn default_fps() -> u16 {
    1
}

//==================================================================================
// Unit Tests
//==================================================================================
