//! Media normalizer - routes a source to the image or video path
//!
//! This is the failure boundary of the pipeline: decode, metadata and I/O
//! errors are logged here and collapse into `None`. Nothing below it panics
//! or propagates past it.

use std::path::PathBuf;
use std::sync::Arc;

use mediapick_core::{MediaKind, NormalizedItem, SourceReference};
use mediapick_storage::{file_uri, ScratchStorage};

use crate::image::ImageNormalizer;
use crate::mime::{classify_declared, query_declared_type};
use crate::traits::ContentResolver;
use crate::video::VideoCopier;

#[derive(Clone)]
pub struct MediaNormalizer {
    resolver: Arc<dyn ContentResolver>,
    images: ImageNormalizer,
    videos: VideoCopier,
}

impl MediaNormalizer {
    pub fn new(
        resolver: Arc<dyn ContentResolver>,
        storage: Arc<dyn ScratchStorage>,
        copy_buffer_bytes: usize,
    ) -> Self {
        Self {
            images: ImageNormalizer::new(resolver.clone(), storage.clone()),
            videos: VideoCopier::new(resolver.clone(), storage, copy_buffer_bytes),
            resolver,
        }
    }

    /// Normalize one source on the current thread.
    ///
    /// `quality` applies to images only; videos are copied verbatim.
    pub fn normalize_blocking(
        &self,
        reference: &SourceReference,
        quality: u8,
    ) -> Option<NormalizedItem> {
        let declared_type = query_declared_type(self.resolver.as_ref(), reference);
        let kind = classify_declared(declared_type.as_deref());

        let outcome: anyhow::Result<PathBuf> = match kind {
            MediaKind::Video => self.videos.copy(reference, declared_type.as_deref()),
            MediaKind::Image => self.images.normalize(reference, quality),
        };

        match outcome {
            Ok(path) => Some(NormalizedItem {
                local_file_reference: file_uri(&path),
                path,
                kind,
            }),
            Err(e) => {
                tracing::warn!(
                    reference = %reference,
                    kind = ?kind,
                    error = %format!("{:#}", e),
                    "Media normalization failed"
                );
                None
            }
        }
    }

    /// Normalize one source on the blocking pool.
    pub async fn normalize(&self, reference: SourceReference, quality: u8) -> Option<NormalizedItem> {
        let normalizer = self.clone();
        match tokio::task::spawn_blocking(move || normalizer.normalize_blocking(&reference, quality))
            .await
        {
            Ok(item) => item,
            Err(e) => {
                tracing::error!(error = %e, "Normalization task aborted");
                None
            }
        }
    }
}
