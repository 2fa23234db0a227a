//! Image normalizer - decode, intermediate compress, rotate, final encode

use anyhow::{Context, Result};
use image::DynamicImage;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mediapick_core::SourceReference;
use mediapick_storage::ScratchStorage;

use super::orientation::apply_exif_rotation;
use crate::compression::{encode_jpeg, MAX_QUALITY};
use crate::traits::ContentResolver;

/// Produces a local JPEG from an image source.
///
/// Two passes write the same output path: first the raster compressed at the
/// requested quality, then the rotation-corrected raster at maximum quality.
/// The requested quality therefore only shapes the intermediate artifact.
#[derive(Clone)]
pub struct ImageNormalizer {
    resolver: Arc<dyn ContentResolver>,
    storage: Arc<dyn ScratchStorage>,
}

impl ImageNormalizer {
    pub fn new(resolver: Arc<dyn ContentResolver>, storage: Arc<dyn ScratchStorage>) -> Self {
        Self { resolver, storage }
    }

    pub fn normalize(&self, reference: &SourceReference, quality: u8) -> Result<PathBuf> {
        let source = self.read_source(reference)?;
        let raster = image::load_from_memory(&source)
            .with_context(|| format!("Failed to decode image {}", reference))?;
        drop(source);

        let output = self.storage.allocate_image_path()?;
        match self.write_passes(reference, raster, quality, &output) {
            Ok(()) => Ok(output),
            Err(e) => {
                self.storage.discard(&output);
                Err(e)
            }
        }
    }

    fn write_passes(
        &self,
        reference: &SourceReference,
        raster: DynamicImage,
        quality: u8,
        output: &Path,
    ) -> Result<()> {
        let intermediate = encode_jpeg(&raster, quality)?;
        std::fs::write(output, &intermediate)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        // Orientation comes from a second read of the source; any failure means no rotation
        let raster = match self.read_source(reference) {
            Ok(data) => apply_exif_rotation(raster, &data),
            Err(e) => {
                tracing::debug!(reference = %reference, error = %e, "Orientation metadata unavailable");
                raster
            }
        };

        let final_bytes = encode_jpeg(&raster, MAX_QUALITY)?;
        std::fs::write(output, &final_bytes)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        tracing::info!(
            reference = %reference,
            path = %output.display(),
            quality = quality,
            intermediate_bytes = intermediate.len(),
            final_bytes = final_bytes.len(),
            "Image normalized"
        );

        Ok(())
    }

    fn read_source(&self, reference: &SourceReference) -> Result<Vec<u8>> {
        let mut stream = self
            .resolver
            .open(reference)
            .with_context(|| format!("Failed to open {}", reference))?;
        let mut data = Vec::new();
        stream
            .read_to_end(&mut data)
            .with_context(|| format!("Failed to read {}", reference))?;
        Ok(data)
    }
}
