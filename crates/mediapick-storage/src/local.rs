use crate::keys;
use crate::traits::{ScratchStorage, StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Local filesystem scratch directory
#[derive(Clone, Debug)]
pub struct LocalScratchStorage {
    base_path: PathBuf,
}

impl LocalScratchStorage {
    /// Create a new LocalScratchStorage instance, creating the directory if needed
    ///
    /// # Arguments
    /// * `base_path` - Root directory for normalized files (e.g., the app cache dir)
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create scratch directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        let base_path = base_path.canonicalize().map_err(|e| {
            StorageError::ConfigError(format!("Failed to canonicalize scratch path: {}", e))
        })?;

        tracing::debug!(path = %base_path.display(), "Scratch storage ready");

        Ok(LocalScratchStorage { base_path })
    }

    /// Convert an output filename to a path inside the scratch directory
    ///
    /// Filenames are generated internally, but extensions come from declared
    /// content types, so separators and traversal sequences are still rejected.
    fn name_to_path(&self, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename.contains("..")
            || filename.contains('/')
            || filename.contains('\\')
        {
            return Err(StorageError::InvalidName(filename.to_string()));
        }

        Ok(self.base_path.join(filename))
    }
}

impl ScratchStorage for LocalScratchStorage {
    fn scratch_dir(&self) -> &Path {
        &self.base_path
    }

    fn allocate_image_path(&self) -> StorageResult<PathBuf> {
        self.name_to_path(&keys::image_filename(Uuid::new_v4()))
    }

    fn allocate_video_path(&self, extension: &str) -> StorageResult<PathBuf> {
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(StorageError::InvalidName(extension.to_string()));
        }
        self.name_to_path(&keys::video_filename(Uuid::new_v4(), extension))
    }

    fn discard(&self, path: &Path) {
        if path.strip_prefix(&self.base_path).is_err() {
            tracing::warn!(path = %path.display(), "Refusing to discard file outside scratch directory");
            return;
        }

        match std::fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "Discarded partial output"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to discard partial output"),
        }
    }
}
