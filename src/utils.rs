//! Shared low-level conversion between byte buffers and bit sequences.
//!
//! The whole crate works MSB-first: bit 0 of a sequence is the most
//! significant bit of byte 0. `bits_to_bytes` fills a final partial byte with
//! trailing zero bits; the encoder records the exact bit length in metadata
//! so the decoder can truncate that fill away again.

use bitvec::prelude::*;

use crate::types::BitSequence;

/// Expands a byte buffer into its bit sequence, 8 bits per byte, MSB first.
pub fn bytes_to_bits(bytes: &[u8]) -> BitSequence {
    BitVec::from_slice(bytes)
}

/// Packs a bit sequence into bytes, MSB first.
///
/// A sequence whose length is not a multiple of 8 gets its final byte filled
/// with zero bits on the low-order side.
pub fn bits_to_bytes(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let mut out = vec![0u8; bits.len().div_ceil(8)];
    for (i, bit) in bits.iter().by_vals().enumerate() {
        if bit {
            out[i / 8] |= 0x80 >> (i % 8);
        }
    }
    out
}

//==================================================================================
// Unit Tests
//==================================================================================
