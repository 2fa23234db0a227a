//! Mediapick Processing Library
//!
//! Turns one opaque source reference into a plain local file:
//! - MIME filter resolution and image/video classification (mime)
//! - Content resolution port and a filesystem implementation (traits, content)
//! - Image path: decode, intermediate compress, EXIF orientation, final encode (image)
//! - Video path: extension inference and verbatim stream copy (video)
//! - Dispatch between the two (normalizer)

pub mod compression;
pub mod content;
pub mod image;
pub mod mime;
pub mod normalizer;
pub mod traits;
pub mod video;

// Re-export commonly used types
pub use content::FileContentResolver;
pub use self::image::ImageNormalizer;
pub use mime::{classify, resolve_filter};
pub use normalizer::MediaNormalizer;
pub use traits::ContentResolver;
pub use video::VideoCopier;
