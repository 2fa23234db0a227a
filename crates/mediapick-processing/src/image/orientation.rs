use image::DynamicImage;
use std::io::Cursor;

/// EXIF orientation value when the tag is absent or unreadable
pub const ORIENTATION_UNDEFINED: u32 = 0;

/// Clockwise rotation needed to display an image upright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Rotation {
    /// Rotation for an EXIF orientation value.
    ///
    /// Only the pure rotations (3, 6, 8) are corrected. Normal, undefined and
    /// mirrored orientations leave the raster as decoded.
    pub fn from_exif(orientation: u32) -> Option<Self> {
        match orientation {
            3 => Some(Rotation::Rotate180),
            6 => Some(Rotation::Rotate90),
            8 => Some(Rotation::Rotate270),
            _ => None,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::Rotate90 => 90,
            Rotation::Rotate180 => 180,
            Rotation::Rotate270 => 270,
        }
    }

    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Rotation::Rotate90 => img.rotate90(),
            Rotation::Rotate180 => img.rotate180(),
            Rotation::Rotate270 => img.rotate270(),
        }
    }
}

/// Read the EXIF orientation tag from encoded image bytes.
///
/// Returns [`ORIENTATION_UNDEFINED`] when the container has no EXIF block,
/// the block cannot be parsed, or the tag is missing.
pub fn read_exif_orientation(data: &[u8]) -> u32 {
    let mut cursor = Cursor::new(data);
    let exif = match exif::Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!(error = %e, "No readable EXIF block");
            return ORIENTATION_UNDEFINED;
        }
    };

    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .unwrap_or(ORIENTATION_UNDEFINED)
}

/// Rotate a raster according to the EXIF orientation found in `data`.
pub fn apply_exif_rotation(img: DynamicImage, data: &[u8]) -> DynamicImage {
    let orientation = read_exif_orientation(data);
    match Rotation::from_exif(orientation) {
        Some(rotation) => {
            tracing::debug!(
                orientation = orientation,
                degrees = rotation.degrees(),
                "Applying EXIF rotation"
            );
            rotation.apply(img)
        }
        None => img,
    }
}
