use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

/// Maximum encoder fidelity, used for the final write of every image.
pub const MAX_QUALITY: u8 = 100;

/// Lowest quality the JPEG encoder accepts; requested 0 is raised to this.
pub const MIN_ENCODER_QUALITY: u8 = 1;

/// Encode a raster as JPEG at the given quality (0-100).
///
/// JPEG has no alpha channel, so the raster is flattened to RGB first.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let quality = quality.clamp(MIN_ENCODER_QUALITY, MAX_QUALITY);
    let rgb = img.to_rgb8();

    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    rgb.write_with_encoder(encoder)
        .with_context(|| format!("Failed to encode JPEG at quality {}", quality))?;

    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        quality = quality,
        size_bytes = buffer.len(),
        "Encoded JPEG"
    );

    Ok(buffer)
}
