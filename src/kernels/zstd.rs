//! This module contains the pure, stateless kernels for Zstandard
//! compression and decompression.
//!
//! It is the final stage of the key artifact format: the packed key stream is
//! highly regular, so even a modest level shrinks it substantially. This
//! module is a safe, panic-free wrapper around the `zstd` crate.

use std::io::Write;
use zstd::stream::{Decoder, Encoder};

use crate::error::CodecError;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

/// Compresses a byte slice using the Zstandard algorithm, writing to an
/// output buffer.
fn compress_slice(
    input_bytes: &[u8],
    output_buf: &mut Vec<u8>,
    level: i32,
) -> Result<(), CodecError> {
    // The streaming Encoder writes directly to the output buffer.
    let mut encoder =
        Encoder::new(output_buf, level).map_err(|e| CodecError::ZstdError(e.to_string()))?;
    encoder
        .write_all(input_bytes)
        .map_err(|e| CodecError::ZstdError(e.to_string()))?;

    // `finish` is essential to finalize the Zstd frame.
    encoder
        .finish()
        .map_err(|e| CodecError::ZstdError(e.to_string()))?;
    Ok(())
}

/// Decompresses a Zstandard-compressed byte slice, writing to an output
/// buffer.
fn decompress_slice(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), CodecError> {
    let mut decoder =
        Decoder::new(input_bytes).map_err(|e| CodecError::ZstdError(e.to_string()))?;

    // `std::io::copy` reads all bytes from the decoder and grows the output
    // buffer as needed, without relying on any pre-allocation.
    std::io::copy(&mut decoder, output_buf).map_err(|e| CodecError::ZstdError(e.to_string()))?;
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// The public-facing encode function for this module.
pub fn encode(input_bytes: &[u8], output_buf: &mut Vec<u8>, level: i32) -> Result<(), CodecError> {
    output_buf.clear();
    compress_slice(input_bytes, output_buf, level)
}

/// The public-facing decode function for this module.
pub fn decode(input_bytes: &[u8], output_buf: &mut Vec<u8>) -> Result<(), CodecError> {
    output_buf.clear();
    decompress_slice(input_bytes, output_buf)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
