//! Scratch storage abstraction trait

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Scratch storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid output name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Writable scratch directory for normalized outputs.
///
/// Path allocation is synchronous because normalization itself runs on
/// blocking threads.
pub trait ScratchStorage: Send + Sync {
    /// Root of the scratch directory
    fn scratch_dir(&self) -> &Path;

    /// Reserve a fresh, collision-free path for a normalized image
    fn allocate_image_path(&self) -> StorageResult<PathBuf>;

    /// Reserve a fresh, collision-free path for a copied video
    fn allocate_video_path(&self, extension: &str) -> StorageResult<PathBuf>;

    /// Remove a partially written output. Missing files are not an error.
    fn discard(&self, path: &Path);
}

/// Characters escaped in a `file://` URI path. `/` separates segments and
/// stays as is; non-ASCII bytes are always escaped.
const URI_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Render an absolute path as a percent-encoded `file://` URI.
pub fn file_uri(path: &Path) -> String {
    let rendered = path.to_string_lossy().replace('\\', "/");
    let encoded = utf8_percent_encode(&rendered, URI_PATH);
    if rendered.starts_with('/') {
        format!("file://{}", encoded)
    } else {
        format!("file:///{}", encoded)
    }
}
