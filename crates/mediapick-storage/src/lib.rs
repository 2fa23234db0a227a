//! Mediapick Storage Library
//!
//! Scratch-directory abstraction for normalized output files.
//!
//! # Output naming
//!
//! Every output gets a fresh UUID v4 name so concurrent or rapidly repeated
//! requests never overwrite each other:
//!
//! - **Images**: `{uuid}.jpg`
//! - **Videos**: `video_{uuid}.{extension}`
//!
//! Name generation is centralized in the `keys` module.

pub(crate) mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalScratchStorage;
pub use traits::{file_uri, ScratchStorage, StorageError, StorageResult};
