//! The conversion metadata document written next to every frame grid.
//!
//! Stored as JSON so a stranded artifact stays human-inspectable. Everything
//! the decoder needs that is not carried by the frame grid or the key lives
//! here; `grouped_bits` and `payload_len` in particular let the decoder strip
//! byte-alignment fill exactly and verify the restored length.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// The current version of the metadata document.
pub const METADATA_FORMAT_VERSION: u16 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// Version of this document. Missing in documents written by older
    /// builds, which are treated as the current version.
    #[serde(default = "default_format_version")]
    pub format_version: u16,

    /// Bare file name of the serialized payload, restored on
    /// deserialization.
    pub source_name: String,

    /// Bit-replication factor applied before grouping.
    pub exp_factor: usize,

    /// Chunk size the payload was grouped with.
    pub chunk_bits: usize,

    /// Synthetic zero bits inserted by the padder.
    pub zero_pad: usize,

    /// Synthetic one bits inserted by the padder.
    pub one_pad: usize,

    /// Zero bytes appended to fill the final frame.
    pub frame_pad: usize,

    /// Exact bit length of the grouped, padded sequence.
    pub grouped_bits: u64,

    /// Original payload length in bytes, checked (not enforced) on decode.
    pub payload_len: u64,
}

fn default_format_version() -> u16 {
    METADATA_FORMAT_VERSION
}

impl Metadata {
    /// Writes the document as pretty-printed JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), CodecError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Parses a document, rejecting versions this build does not understand.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CodecError> {
        let metadata: Metadata = serde_json::from_reader(reader)?;
        if metadata.format_version != METADATA_FORMAT_VERSION {
            return Err(CodecError::MetadataFormatError(format!(
                "unsupported metadata version: expected {METADATA_FORMAT_VERSION}, got {}",
                metadata.format_version
            )));
        }
        Ok(metadata)
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        Metadata {
            format_version: METADATA_FORMAT_VERSION,
            source_name: "archive.zip".to_string(),
            exp_factor: 3,
            chunk_bits: 8,
            zero_pad: 5,
            one_pad: 2,
            frame_pad: 117,
            grouped_bits: 24_007,
            payload_len: 1_000,
        }
    }

    #[test]
    fn test_metadata_roundtrip() {
        let original = sample();
        let mut buf = Vec::new();
        original.to_writer(&mut buf).unwrap();
        let parsed = Metadata::from_reader(buf.as_slice()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_missing_version_defaults_to_current() {
        let json = r#"{
            "source_name": "a.bin",
            "exp_factor": 1,
            "chunk_bits": 8,
            "zero_pad": 0,
            "one_pad": 0,
            "frame_pad": 0,
            "grouped_bits": 64,
            "payload_len": 8
        }"#;
        let parsed = Metadata::from_reader(json.as_bytes()).unwrap();
        assert_eq!(parsed.format_version, METADATA_FORMAT_VERSION);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "format_version": 1,
            "source_name": "a.bin",
            "exp_factor": 1,
            "chunk_bits": 8,
            "zero_pad": 0,
            "one_pad": 0,
            "frame_pad": 0,
            "grouped_bits": 64,
            "payload_len": 8,
            "some_future_field": true
        }"#;
        assert!(Metadata::from_reader(json.as_bytes()).is_ok());
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut metadata = sample();
        metadata.format_version = 99;
        let mut buf = Vec::new();
        metadata.to_writer(&mut buf).unwrap();
        let result = Metadata::from_reader(buf.as_slice());
        assert!(matches!(result, Err(CodecError::MetadataFormatError(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Metadata::from_reader(&b"not json"[..]);
        assert!(matches!(result, Err(CodecError::SerdeJson(_))));
    }
}
