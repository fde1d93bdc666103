//! The pure, stateless transform kernels.
//!
//! `expand`, `padding`, and `grouping` are the codec core: deterministic,
//! single-threaded, CPU-bound functions over in-memory bit sequences, with no
//! I/O, no logging, and no shared mutable state. `leb128` and `zstd` are the
//! small codecs backing the key artifact format.

pub mod expand;
pub mod grouping;
pub mod leb128;
pub mod padding;
pub mod zstd;
