//! This module contains the pure, stateless kernels for tail-run padding.
//!
//! After grouping, the trailing run of each polarity may not be a multiple of
//! the chunk size. `pad` inserts the minimum number of redundant bits to fix
//! that (the non-trailing polarity's run is extended at the boundary where
//! the trailing run begins, the trailing polarity's run at the very end) and
//! records how many bits of each polarity were added. `depad` removes exactly
//! those bits again.
//!
//! Construction is two-pass (compute the final length, then fill a pre-sized
//! buffer), never positional insertion, so both directions are linear.

use bitvec::prelude::*;

use crate::error::CodecError;
use crate::types::{BitSequence, PadCounts};

//==================================================================================
// 1. Public API
//==================================================================================

/// Pads the trailing zero-run and one-run up to multiples of `chunk_bits`.
///
/// A uniform sequence is a single run: only that run is padded, and the
/// absent polarity records a count of zero. The empty sequence pads to itself
/// with counts `(0, 0)`. Every recorded count is strictly below `chunk_bits`.
pub fn pad(
    bits: &BitSlice<u8, Msb0>,
    chunk_bits: usize,
) -> Result<(BitSequence, PadCounts), CodecError> {
    if chunk_bits == 0 {
        return Err(CodecError::InvalidArgument(
            "chunk size must be at least 1 bit".to_string(),
        ));
    }
    let len = bits.len();
    if len == 0 {
        return Ok((BitSequence::new(), PadCounts::default()));
    }

    let tail = bits[len - 1];

    // Walk back over the trailing run; `diff` ends up at the index where the
    // last homogeneous tail run begins.
    let mut diff = len;
    while diff > 0 && bits[diff - 1] == tail {
        diff -= 1;
    }
    let tail_run = len - diff;

    // The run of opposite polarity immediately before it. A uniform sequence
    // has no such run; its length stays 0 and needs no padding.
    let mut start = diff;
    while start > 0 && bits[start - 1] != tail {
        start -= 1;
    }
    let lead_run = diff - start;

    let tail_fill = (chunk_bits - tail_run % chunk_bits) % chunk_bits;
    let lead_fill = if lead_run == 0 {
        0
    } else {
        (chunk_bits - lead_run % chunk_bits) % chunk_bits
    };

    let mut out = BitSequence::with_capacity(len + lead_fill + tail_fill);
    out.extend_from_bitslice(&bits[..diff]);
    for _ in 0..lead_fill {
        out.push(!tail);
    }
    out.extend_from_bitslice(&bits[diff..]);
    for _ in 0..tail_fill {
        out.push(tail);
    }

    let pads = if tail {
        PadCounts {
            zeros: lead_fill,
            ones: tail_fill,
        }
    } else {
        PadCounts {
            zeros: tail_fill,
            ones: lead_fill,
        }
    };
    Ok((out, pads))
}

/// Removes exactly `pads.zeros` zero-bits and `pads.ones` one-bits, scanning
/// backward from the tail and skipping bits of the currently non-targeted
/// polarity.
///
/// Counts that exceed what the sequence actually holds are ignored once the
/// scan reaches the front; garbage inputs produce garbage output, never a
/// panic.
pub fn depad(bits: &BitSlice<u8, Msb0>, pads: PadCounts) -> BitSequence {
    let mut zeros = pads.zeros;
    let mut ones = pads.ones;

    // Indices to drop, discovered in decreasing order.
    let mut dropped: Vec<usize> = Vec::with_capacity(pads.total());
    for i in (0..bits.len()).rev() {
        if zeros == 0 && ones == 0 {
            break;
        }
        if bits[i] {
            if ones > 0 {
                ones -= 1;
                dropped.push(i);
            }
        } else if zeros > 0 {
            zeros -= 1;
            dropped.push(i);
        }
    }

    let tail_start = match dropped.last() {
        Some(&i) => i,
        None => return bits.to_bitvec(),
    };

    let mut out = BitSequence::with_capacity(bits.len() - dropped.len());
    out.extend_from_bitslice(&bits[..tail_start]);
    let mut next = dropped.len();
    for i in tail_start..bits.len() {
        if next > 0 && dropped[next - 1] == i {
            next -= 1;
            continue;
        }
        out.push(bits[i]);
    }
    out
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
