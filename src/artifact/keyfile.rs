//! Defines the self-describing on-disk format for a swap key artifact.
//!
//! Raw layout, before compression:
//!
//! ```text
//! magic "VCKY" (4) | format version u16 LE (2) | entry count u64 LE (8) |
//! entry count LEB128-encoded step values
//! ```
//!
//! The whole buffer is stored as a single Zstandard frame. The reader
//! validates magic, version, and that the declared entry count is plausible
//! for the decompressed size before allocating anything, so a malformed or
//! hostile artifact fails cleanly instead of exhausting memory.
//!
//! Step values are full 64-bit integers; a key entry is bounded by the
//! payload's bit length, which for any real payload overflows the historical
//! one-byte-per-entry layout.

use std::io::{Read, Write};

use crate::error::CodecError;
use crate::kernels::{leb128, zstd};
use crate::types::SwapKey;

//==================================================================================
// Format Constants
//==================================================================================

/// The magic number identifying a visual-codec key artifact.
pub const KEY_MAGIC: &[u8; 4] = b"VCKY";
/// The current version of the key artifact format.
pub const KEY_FORMAT_VERSION: u16 = 1;
/// Zstd level for key artifacts; keys are small and highly regular.
pub const KEY_ZSTD_LEVEL: i32 = 3;

/// magic(4) + version(2) + count(8)
const KEY_HEADER_SIZE: usize = 14;

//==================================================================================
// Core Implementation
//==================================================================================

/// Serializes and compresses `key`, writing the finished artifact to
/// `writer`.
pub fn write_key<W: Write>(key: &SwapKey, writer: &mut W) -> Result<(), CodecError> {
    let mut raw = Vec::with_capacity(KEY_HEADER_SIZE + key.len());
    raw.extend_from_slice(KEY_MAGIC);
    raw.extend_from_slice(&KEY_FORMAT_VERSION.to_le_bytes());
    raw.extend_from_slice(&(key.len() as u64).to_le_bytes());
    leb128::encode(key.as_slice(), &mut raw);

    let mut compressed = Vec::new();
    zstd::encode(&raw, &mut compressed, KEY_ZSTD_LEVEL)?;
    writer.write_all(&compressed)?;
    Ok(())
}

/// Reads, decompresses, and validates a key artifact from `reader`.
pub fn read_key<R: Read>(reader: &mut R) -> Result<SwapKey, CodecError> {
    let mut compressed = Vec::new();
    reader.read_to_end(&mut compressed)?;

    let mut raw = Vec::new();
    zstd::decode(&compressed, &mut raw)?;

    if raw.len() < KEY_HEADER_SIZE {
        return Err(CodecError::KeyFormatError(format!(
            "key artifact is too small to be valid: minimum size {KEY_HEADER_SIZE}, got {}",
            raw.len()
        )));
    }
    if &raw[..4] != KEY_MAGIC {
        return Err(CodecError::KeyFormatError(
            "invalid key magic number".to_string(),
        ));
    }

    let version = u16::from_le_bytes([raw[4], raw[5]]);
    if version != KEY_FORMAT_VERSION {
        return Err(CodecError::KeyFormatError(format!(
            "unsupported key format version: expected {KEY_FORMAT_VERSION}, got {version}"
        )));
    }

    let mut count_buf = [0u8; 8];
    count_buf.copy_from_slice(&raw[6..KEY_HEADER_SIZE]);
    let count = u64::from_le_bytes(count_buf);

    // Every LEB128 entry occupies at least one byte, so the declared count
    // bounds the allocation before it happens.
    let payload = &raw[KEY_HEADER_SIZE..];
    if count > payload.len() as u64 {
        return Err(CodecError::KeyFormatError(format!(
            "declared entry count {count} exceeds the {} available payload bytes",
            payload.len()
        )));
    }

    let steps = leb128::decode(payload, count as usize)?;
    Ok(SwapKey::from_steps(steps))
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(key: &SwapKey) -> SwapKey {
        let mut buf = Vec::new();
        write_key(key, &mut buf).unwrap();
        read_key(&mut buf.as_slice()).unwrap()
    }

    #[test]
    fn test_key_roundtrip() {
        let key = SwapKey::from_steps(vec![2, 2, 1, 130, 9_000_000_000]);
        assert_eq!(roundtrip(&key), key);
    }

    #[test]
    fn test_empty_key_roundtrip() {
        let key = SwapKey::new();
        assert_eq!(roundtrip(&key), key);
    }

    #[test]
    fn test_long_repetitive_key_compresses() {
        let key = SwapKey::from_steps(vec![1; 100_000]);
        let mut buf = Vec::new();
        write_key(&key, &mut buf).unwrap();
        assert!(buf.len() < 1_000);
        assert_eq!(read_key(&mut buf.as_slice()).unwrap(), key);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut raw = Vec::new();
        raw.extend_from_slice(b"NOPE");
        raw.extend_from_slice(&KEY_FORMAT_VERSION.to_le_bytes());
        raw.extend_from_slice(&0u64.to_le_bytes());
        let mut compressed = Vec::new();
        crate::kernels::zstd::encode(&raw, &mut compressed, KEY_ZSTD_LEVEL).unwrap();

        let result = read_key(&mut compressed.as_slice());
        assert!(matches!(result, Err(CodecError::KeyFormatError(_))));
    }

    #[test]
    fn test_bad_version_rejected() {
        let mut raw = Vec::new();
        raw.extend_from_slice(KEY_MAGIC);
        raw.extend_from_slice(&0xFFFFu16.to_le_bytes());
        raw.extend_from_slice(&0u64.to_le_bytes());
        let mut compressed = Vec::new();
        crate::kernels::zstd::encode(&raw, &mut compressed, KEY_ZSTD_LEVEL).unwrap();

        let result = read_key(&mut compressed.as_slice());
        assert!(matches!(result, Err(CodecError::KeyFormatError(_))));
    }

    #[test]
    fn test_oversized_count_rejected_before_allocation() {
        let mut raw = Vec::new();
        raw.extend_from_slice(KEY_MAGIC);
        raw.extend_from_slice(&KEY_FORMAT_VERSION.to_le_bytes());
        raw.extend_from_slice(&u64::MAX.to_le_bytes());
        raw.push(1);
        let mut compressed = Vec::new();
        crate::kernels::zstd::encode(&raw, &mut compressed, KEY_ZSTD_LEVEL).unwrap();

        let result = read_key(&mut compressed.as_slice());
        assert!(matches!(result, Err(CodecError::KeyFormatError(_))));
    }

    #[test]
    fn test_not_zstd_rejected() {
        let garbage = vec![0xDE, 0xAD, 0xBE, 0xEF];
        let result = read_key(&mut garbage.as_slice());
        assert!(matches!(result, Err(CodecError::ZstdError(_))));
    }

    #[test]
    fn test_truncated_entry_stream_rejected() {
        let mut raw = Vec::new();
        raw.extend_from_slice(KEY_MAGIC);
        raw.extend_from_slice(&KEY_FORMAT_VERSION.to_le_bytes());
        raw.extend_from_slice(&1u64.to_le_bytes());
        raw.push(0x80); // continuation bit set, stream ends
        let mut compressed = Vec::new();
        crate::kernels::zstd::encode(&raw, &mut compressed, KEY_ZSTD_LEVEL).unwrap();

        let result = read_key(&mut compressed.as_slice());
        assert!(matches!(result, Err(CodecError::Leb128DecodeError(_))));
    }
}
