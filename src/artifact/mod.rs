//! Persistence formats for the codec's sidecar artifacts.
//!
//! Every serialization run produces two small files next to the frame grid:
//! the swap key (a compressed binary stream, `keyfile`) and the conversion
//! metadata (a JSON document, `metadata`). Both modules are pure over
//! readers/writers; the `bridge` decides where the files live.

pub mod keyfile;
pub mod metadata;
