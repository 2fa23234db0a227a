//! Output file naming.

use uuid::Uuid;

/// Filename for a normalized image.
pub fn image_filename(id: Uuid) -> String {
    format!("{}.jpg", id)
}

/// Filename for a copied video with the given extension.
pub fn video_filename(id: Uuid, extension: &str) -> String {
    format!("video_{}.{}", id, extension)
}
