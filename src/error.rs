// In: src/error.rs

//! This module defines the single, unified error type for the entire
//! visual-codec library. It uses the `thiserror` crate to provide ergonomic,
//! context-aware error handling.
//!
//! Only one class of failure is ever raised by the core kernels:
//! `InvalidArgument`, signaled synchronously at the call that violates a
//! precondition. Every other variant belongs to the collaborator layers
//! (persistence formats, frame store, file I/O). Length mismatches against
//! recorded values are deliberately NOT errors; they are surfaced as
//! `pipeline::IntegrityWarning` values instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Key artifact format error: {0}")]
    KeyFormatError(String),

    #[error("Metadata format error: {0}")]
    MetadataFormatError(String),

    #[error("Frame store error: {0}")]
    FrameError(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("LEB128 decoding error: {0}")]
    Leb128DecodeError(String),

    #[error("Zstd operation failed: {0}")]
    ZstdError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, raised during metadata
    /// serialization or deserialization.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
