//! This module contains the pure, stateless kernels for the keyed
//! run-grouping rearrangement, the heart of the codec.
//!
//! `group` makes a single left-to-right pass over a working copy of the
//! sequence. Every polarity transition appends one step count to the key
//! (the number of positions scanned since the previous transition). The
//! substitution cursor `j` marks the block currently being filled: a
//! transition either re-seats the cursor (when it is unset or the slot after
//! it sits on a chunk boundary) or pulls the transitioning bit into the block
//! with a pairwise swap. The rearranged sequence is then tail-padded so runs
//! fill whole chunks.
//!
//! `ungroup` needs no transition detection of its own: the transition indices
//! are the prefix sums of the key, and the cursor's evolution is a pure
//! function of those indices and the chunk size. Replaying that state
//! machine rebuilds the exact swap schedule, which is then applied in reverse
//! temporal order to the depadded sequence.
//!
//! The kernels do not authenticate that a key belongs to a payload: a
//! well-formed key replayed against the wrong sequence yields a defined,
//! deterministic, but semantically wrong result.

use bitvec::prelude::*;

use crate::error::CodecError;
use crate::kernels::padding;
use crate::types::{BitSequence, GroupedBits, PadCounts, SwapKey};

//==================================================================================
// 1. Public API
//==================================================================================

/// Rearranges `bits` so runs align to `chunk_bits` boundaries, then pads the
/// tail runs to whole chunks.
///
/// Returns the padded sequence together with the pad counts and the swap key
/// required to invert the rearrangement exactly.
pub fn group(bits: &BitSlice<u8, Msb0>, chunk_bits: usize) -> Result<GroupedBits, CodecError> {
    if chunk_bits == 0 {
        return Err(CodecError::InvalidArgument(
            "chunk size must be at least 1 bit".to_string(),
        ));
    }

    let mut work: BitSequence = bits.to_bitvec();
    let mut key = SwapKey::new();
    let mut cursor: Option<usize> = None;
    let mut steps: u64 = 0;

    let len = work.len();
    for i in 0..len.saturating_sub(1) {
        steps += 1;
        if work[i] == work[i + 1] {
            continue;
        }

        key.push(steps);
        steps = 0;

        cursor = match cursor {
            // The slot after the cursor is inside the block being filled:
            // pull the transitioning bit into it.
            Some(j) if (j + 1) % chunk_bits != 0 => {
                work.swap(j + 1, i + 1);
                Some(j + 1)
            }
            // Unset, or the block is complete: this transition starts
            // filling a new block and no destination slot is ready yet.
            _ => Some(i),
        };
    }

    let (padded, pads) = padding::pad(&work, chunk_bits)?;
    Ok(GroupedBits {
        bits: padded,
        pads,
        key,
    })
}

/// Exact inverse of [`group`], given the grouped sequence, the pad counts,
/// and the key it produced.
pub fn ungroup(
    grouped: &BitSlice<u8, Msb0>,
    chunk_bits: usize,
    pads: PadCounts,
    key: &SwapKey,
) -> Result<BitSequence, CodecError> {
    if chunk_bits == 0 {
        return Err(CodecError::InvalidArgument(
            "chunk size must be at least 1 bit".to_string(),
        ));
    }
    if pads.zeros >= chunk_bits || pads.ones >= chunk_bits {
        return Err(CodecError::InvalidArgument(format!(
            "pad counts ({}, {}) must be smaller than the chunk size {}",
            pads.zeros, pads.ones, chunk_bits
        )));
    }

    let mut work = padding::depad(grouped, pads);
    let len = work.len() as u64;

    // Replay the forward pass's cursor state machine over the transition
    // indices recorded in the key, collecting the swap schedule.
    let mut swaps: Vec<(usize, usize)> = Vec::with_capacity(key.len());
    let mut cursor: Option<usize> = None;
    let mut position: u64 = 0;
    for step in key.steps() {
        if step == 0 {
            return Err(CodecError::InvalidArgument(
                "swap key contains a zero step count".to_string(),
            ));
        }
        position += step;
        // A transition at index i swaps into slot i+1, so the running sum
        // must stay below the payload's bit length.
        if position >= len {
            return Err(CodecError::InvalidArgument(format!(
                "swap key step total {position} is inconsistent with payload bit length {len}"
            )));
        }
        let i = (position - 1) as usize;

        cursor = match cursor {
            Some(j) if (j + 1) % chunk_bits != 0 => {
                swaps.push((j + 1, i + 1));
                Some(j + 1)
            }
            _ => Some(i),
        };
    }

    // Undo the swaps in the exact reverse temporal order of the forward pass.
    for &(a, b) in swaps.iter().rev() {
        work.swap(a, b);
    }
    Ok(work)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
