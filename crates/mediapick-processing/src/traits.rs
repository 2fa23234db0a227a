//! Content resolution port

use std::io::Read;

use mediapick_core::SourceReference;

/// Reads bytes and metadata behind a source reference.
///
/// Implemented by the host for platform content handles and by
/// [`FileContentResolver`](crate::FileContentResolver) for local paths.
/// Calls are blocking; normalization runs them on blocking threads.
pub trait ContentResolver: Send + Sync {
    /// Open a fresh stream over the referenced bytes.
    fn open(&self, reference: &SourceReference) -> anyhow::Result<Box<dyn Read + Send>>;

    /// Declared MIME type of the referenced item, if the source knows it.
    fn declared_type(&self, reference: &SourceReference) -> anyhow::Result<Option<String>>;
}
