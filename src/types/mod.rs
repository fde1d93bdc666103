//! The core data model shared by every kernel and pipeline stage.
//!
//! All entities here are transient, created per call; the core owns no
//! persisted state. Durable representations of the key and pad counts live in
//! the `artifact` module.

use bitvec::prelude::*;

/// The unit of all core operations: an ordered sequence of binary digits.
///
/// The `Msb0` ordering makes the bit order of a byte match its textual
/// rendering, so `0b1100_0000u8` yields the sequence `1, 1, 0, 0, ...`.
pub type BitSequence = BitVec<u8, Msb0>;

/// Ordered step counts, one per polarity transition recorded while grouping.
///
/// Replaying the key against the grouped sequence (same cursor state
/// machine, swaps undone in reverse temporal order) reproduces the
/// pre-grouped sequence exactly. A key produced by `group` never contains a
/// zero step count, and its running sum never exceeds the payload's bit
/// length; `ungroup` rejects keys violating either property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapKey {
    steps: Vec<u64>,
}

impl SwapKey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<u64>) -> Self {
        Self { steps }
    }

    pub fn push(&mut self, step: u64) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> impl Iterator<Item = u64> + '_ {
        self.steps.iter().copied()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.steps
    }
}

/// Counts of synthetic bits inserted by the padder, per polarity.
///
/// Each count is strictly below the chunk size in use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadCounts {
    pub zeros: usize,
    pub ones: usize,
}

impl PadCounts {
    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }
}

/// The full result of a `group` call: the padded sequence plus everything
/// needed to invert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedBits {
    pub bits: BitSequence,
    pub pads: PadCounts,
    pub key: SwapKey,
}
