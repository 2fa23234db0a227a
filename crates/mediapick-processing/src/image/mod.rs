//! Image normalization module
//!
//! - EXIF orientation reading and rotation (orientation)
//! - Decode, two-pass encode, write (normalizer)

pub mod normalizer;
pub mod orientation;

pub use normalizer::ImageNormalizer;
