//! Video copier - verbatim stream copy into the scratch directory

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mediapick_core::SourceReference;
use mediapick_storage::ScratchStorage;

use crate::traits::ContentResolver;

/// Extension used when the declared type is absent or unrecognized
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Infer a file extension from a declared video MIME type.
///
/// Matches substrings in a fixed order, so `video/mp4` and `application/mp4`
/// both give `mp4`, and `video/quicktime` gives `mov`. The registered
/// Matroska and AVI types (`video/x-matroska`, `video/x-msvideo`) keep their
/// own extensions.
pub fn extension_for_declared_type(declared_type: Option<&str>) -> &'static str {
    let Some(declared) = declared_type else {
        return DEFAULT_VIDEO_EXTENSION;
    };
    let declared = declared.to_ascii_lowercase();

    if declared.contains("mp4") {
        "mp4"
    } else if declared.contains("3gp") {
        "3gp"
    } else if declared.contains("webm") {
        "webm"
    } else if declared.contains("mkv") || declared.contains("matroska") {
        "mkv"
    } else if declared.contains("avi") || declared.contains("msvideo") {
        "avi"
    } else if declared.contains("mov") || declared.contains("quicktime") {
        "mov"
    } else {
        DEFAULT_VIDEO_EXTENSION
    }
}

/// Copies video bytes unchanged. No transcoding, no quality parameter.
#[derive(Clone)]
pub struct VideoCopier {
    resolver: Arc<dyn ContentResolver>,
    storage: Arc<dyn ScratchStorage>,
    buffer_bytes: usize,
}

impl VideoCopier {
    pub fn new(
        resolver: Arc<dyn ContentResolver>,
        storage: Arc<dyn ScratchStorage>,
        buffer_bytes: usize,
    ) -> Self {
        Self {
            resolver,
            storage,
            buffer_bytes: buffer_bytes.max(1),
        }
    }

    pub fn copy(&self, reference: &SourceReference, declared_type: Option<&str>) -> Result<PathBuf> {
        let extension = extension_for_declared_type(declared_type);
        let output = self.storage.allocate_video_path(extension)?;

        match self.copy_to(reference, &output) {
            Ok(bytes) => {
                tracing::info!(
                    reference = %reference,
                    path = %output.display(),
                    declared_type = ?declared_type,
                    size_bytes = bytes,
                    "Video copied"
                );
                Ok(output)
            }
            Err(e) => {
                self.storage.discard(&output);
                Err(e)
            }
        }
    }

    fn copy_to(&self, reference: &SourceReference, output: &Path) -> Result<u64> {
        let source = self
            .resolver
            .open(reference)
            .with_context(|| format!("Could not open input stream for video {}", reference))?;
        let mut reader = BufReader::with_capacity(self.buffer_bytes, source);

        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut writer = BufWriter::with_capacity(self.buffer_bytes, file);

        let bytes = io::copy(&mut reader, &mut writer)
            .with_context(|| format!("Failed to copy video {}", reference))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush {}", output.display()))?;

        Ok(bytes)
    }
}
