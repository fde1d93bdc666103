//! This file is the root of the `visual_codec` Rust crate.
//!
//! The crate is layered, leaf to root:
//! 1.  `kernels`: the pure bit-level transforms (expansion, padding,
//!     grouping) plus the small codecs used by the persistence formats.
//! 2.  `types` and `utils`: the shared data model and byte/bit conversion.
//! 3.  `pipeline`: the pure payload orchestration over the kernels.
//! 4.  `artifact` and `frame`: sidecar persistence formats and the frame
//!     grid layout/store.
//! 5.  `bridge`: the file-facing boundary used by the `vcc` binary.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod artifact;
pub mod bridge;
pub mod config;
pub mod error;
pub mod frame;
pub mod kernels;
pub mod pipeline;
pub mod types;
pub mod utils;

pub use config::CodecConfig;
pub use error::CodecError;
pub use types::{BitSequence, GroupedBits, PadCounts, SwapKey};
