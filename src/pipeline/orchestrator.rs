//! The pure, frame-agnostic core pipeline.
//!
//! Encode: bytes → bits → expand → group (pads internally) → pixel bytes.
//! Decode: pixel bytes → bits (truncated to the recorded length) → ungroup →
//! shrink → bytes.
//!
//! The decoder verifies the restored lengths against the recorded ones but
//! never fails on a mismatch: a payload decoded with a mismatched key is
//! semantically wrong, not structurally invalid, and the caller decides what
//! to tell the user. Structural problems (bad chunk size, malformed key)
//! still fail fast inside the kernels.

use std::fmt;

use crate::artifact::metadata::Metadata;
use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::kernels::{expand, grouping};
use crate::types::{PadCounts, SwapKey};
use crate::utils;

//==================================================================================
// 1. Pipeline Data Types
//==================================================================================

/// Everything `encode_payload` produces: the pixel byte stream plus the
/// values the caller must persist to invert it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    /// The grouped, padded bit sequence packed into pixel bytes.
    pub pixels: Vec<u8>,
    pub key: SwapKey,
    pub pads: PadCounts,
    /// Exact bit length of the grouped sequence, before byte packing.
    pub grouped_bits: u64,
    /// Original payload length in bytes.
    pub payload_len: u64,
}

/// The decoded payload plus any non-fatal integrity findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPayload {
    pub data: Vec<u8>,
    pub warnings: Vec<IntegrityWarning>,
}

/// A caller-observed mismatch between the decoded data and the recorded
/// dimensions. Non-fatal: decoding proceeds and the finding rides along in
/// [`DecodedPayload::warnings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityWarning {
    /// The ungrouped bit sequence does not have the expected expanded length.
    ExpandedLengthMismatch { expected_bits: u64, actual_bits: u64 },
    /// The restored byte payload does not have the recorded length.
    PayloadLengthMismatch {
        expected_bytes: u64,
        actual_bytes: u64,
    },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityWarning::ExpandedLengthMismatch {
                expected_bits,
                actual_bits,
            } => write!(
                f,
                "data integrity mismatch: expected {expected_bits} expanded bits, got {actual_bits}"
            ),
            IntegrityWarning::PayloadLengthMismatch {
                expected_bytes,
                actual_bytes,
            } => write!(
                f,
                "data integrity mismatch: expected a {expected_bytes} byte payload, got {actual_bytes}"
            ),
        }
    }
}

//==================================================================================
// 2. Public Orchestration API
//==================================================================================

/// Runs the encode pipeline over a byte payload.
pub fn encode_payload(data: &[u8], config: &CodecConfig) -> Result<EncodedPayload, CodecError> {
    let bits = utils::bytes_to_bits(data);
    let expanded = expand::expand(&bits, config.exp_factor)?;
    let grouped = grouping::group(&expanded, config.chunk_bits)?;

    let grouped_bits = grouped.bits.len() as u64;
    let pixels = utils::bits_to_bytes(&grouped.bits);
    Ok(EncodedPayload {
        pixels,
        key: grouped.key,
        pads: grouped.pads,
        grouped_bits,
        payload_len: data.len() as u64,
    })
}

/// Runs the decode pipeline over a recovered pixel byte stream.
pub fn decode_payload(
    pixels: &[u8],
    key: &SwapKey,
    metadata: &Metadata,
) -> Result<DecodedPayload, CodecError> {
    let available_bits = pixels.len() as u64 * 8;
    if available_bits < metadata.grouped_bits {
        return Err(CodecError::InvalidArgument(format!(
            "recovered pixel stream holds {available_bits} bits, but {} were recorded",
            metadata.grouped_bits
        )));
    }

    let mut grouped = utils::bytes_to_bits(pixels);
    grouped.truncate(metadata.grouped_bits as usize);

    let pads = PadCounts {
        zeros: metadata.zero_pad,
        ones: metadata.one_pad,
    };
    let ungrouped = grouping::ungroup(&grouped, metadata.chunk_bits, pads, key)?;

    let mut warnings = Vec::new();
    let expected_bits = metadata.payload_len * 8 * metadata.exp_factor as u64;
    if ungrouped.len() as u64 != expected_bits {
        warnings.push(IntegrityWarning::ExpandedLengthMismatch {
            expected_bits,
            actual_bits: ungrouped.len() as u64,
        });
    }

    let shrunk = expand::shrink(&ungrouped, metadata.exp_factor)?;
    let data = utils::bits_to_bytes(&shrunk);
    if data.len() as u64 != metadata.payload_len {
        warnings.push(IntegrityWarning::PayloadLengthMismatch {
            expected_bytes: metadata.payload_len,
            actual_bytes: data.len() as u64,
        });
    }

    Ok(DecodedPayload { data, warnings })
}
