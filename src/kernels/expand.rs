//! This module contains the pure, stateless kernels for bit expansion and
//! majority-vote shrinking.
//!
//! Expansion replicates each bit `factor` times so that isolated storage
//! corruptions can be voted away on the return path. It is simple redundancy
//! coding, not error correction: a factor of 1 is the identity, and
//! `shrink(expand(b, f), f) == b` holds for any uncorrupted input.

use bitvec::prelude::*;

use crate::error::CodecError;
use crate::types::BitSequence;

//==================================================================================
// 1. Public API
//==================================================================================

/// Replicates each input bit `factor` times consecutively, preserving order.
///
/// The output length is exactly `bits.len() * factor`.
pub fn expand(bits: &BitSlice<u8, Msb0>, factor: usize) -> Result<BitSequence, CodecError> {
    if factor == 0 {
        return Err(CodecError::InvalidArgument(
            "expansion factor must be at least 1".to_string(),
        ));
    }
    if factor == 1 {
        return Ok(bits.to_bitvec());
    }

    let mut out = BitSequence::with_capacity(bits.len() * factor);
    for bit in bits.iter().by_vals() {
        for _ in 0..factor {
            out.push(bit);
        }
    }
    Ok(out)
}

/// Collapses an expanded sequence back to one bit per `factor`-sized window.
///
/// Each window reduces to its majority bit value; a shorter final window is
/// allowed. Ties (possible only for even factors) resolve to the window's
/// first bit, which keeps the reduction deterministic.
pub fn shrink(bits: &BitSlice<u8, Msb0>, factor: usize) -> Result<BitSequence, CodecError> {
    if factor == 0 {
        return Err(CodecError::InvalidArgument(
            "expansion factor must be at least 1".to_string(),
        ));
    }
    if factor == 1 {
        return Ok(bits.to_bitvec());
    }

    let mut out = BitSequence::with_capacity(bits.len().div_ceil(factor));
    for window in bits.chunks(factor) {
        let ones = window.count_ones();
        let zeros = window.len() - ones;
        let majority = if ones == zeros { window[0] } else { ones > zeros };
        out.push(majority);
    }
    Ok(out)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> BitSequence {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_expand_concrete() {
        assert_eq!(expand(&seq("101"), 3).unwrap(), seq("111000111"));
    }

    #[test]
    fn test_shrink_concrete() {
        assert_eq!(shrink(&seq("111000111"), 3).unwrap(), seq("101"));
    }

    #[test]
    fn test_factor_one_is_identity() {
        let original = seq("100101110");
        assert_eq!(expand(&original, 1).unwrap(), original);
        assert_eq!(shrink(&original, 1).unwrap(), original);
    }

    #[test]
    fn test_roundtrip_factors() {
        for pattern in ["", "0", "1", "10", "110010", "1111", "0000", "010101011"] {
            let original = seq(pattern);
            for factor in [1usize, 2, 3, 5] {
                let expanded = expand(&original, factor).unwrap();
                assert_eq!(expanded.len(), original.len() * factor);
                assert_eq!(
                    shrink(&expanded, factor).unwrap(),
                    original,
                    "pattern {pattern:?}, factor {factor}"
                );
            }
        }
    }

    #[test]
    fn test_majority_vote_absorbs_single_flip() {
        // One corrupted replica out of three still votes correctly.
        assert_eq!(shrink(&seq("110"), 3).unwrap(), seq("1"));
        assert_eq!(shrink(&seq("010"), 3).unwrap(), seq("0"));
    }

    #[test]
    fn test_even_factor_tie_takes_first_bit() {
        assert_eq!(shrink(&seq("10"), 2).unwrap(), seq("1"));
        assert_eq!(shrink(&seq("01"), 2).unwrap(), seq("0"));
    }

    #[test]
    fn test_short_final_window() {
        // 7 bits at factor 3: windows are 111, 000, 1.
        assert_eq!(shrink(&seq("1110001"), 3).unwrap(), seq("101"));
    }

    #[test]
    fn test_zero_factor_rejected() {
        let bits = seq("101");
        assert!(matches!(
            expand(&bits, 0),
            Err(CodecError::InvalidArgument(_))
        ));
        assert!(matches!(
            shrink(&bits, 0),
            Err(CodecError::InvalidArgument(_))
        ));
    }
}
