//! The pure payload pipeline: kernel composition without any I/O.
//!
//! Everything here operates on in-memory buffers and returns values,
//! integrity warnings included. Files, frame stores, and logging all live
//! above this layer.

pub mod orchestrator;


pub use orchestrator::{
    decode_payload, encode_payload, DecodedPayload, EncodedPayload, IntegrityWarning,
};
