//! MIME filter resolution and media classification

use mediapick_core::{MediaKind, MediaTypeFilter, SourceReference};

use crate::traits::ContentResolver;

/// Map a media-type selector to the picker's MIME filter.
pub fn resolve_filter(media_type: MediaTypeFilter) -> &'static str {
    match media_type {
        MediaTypeFilter::Image => "image/*",
        MediaTypeFilter::Video => "video/*",
        MediaTypeFilter::Any => "*/*",
    }
}

/// Classify a declared MIME type. Only `video/...` is a video.
pub fn classify_declared(declared_type: Option<&str>) -> MediaKind {
    match declared_type {
        Some(t) if t.trim().to_ascii_lowercase().starts_with("video/") => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

/// Classify a source by asking the resolver for its declared type.
///
/// Never fails: a resolver error classifies the item as an image.
pub fn classify(resolver: &dyn ContentResolver, reference: &SourceReference) -> MediaKind {
    classify_declared(query_declared_type(resolver, reference).as_deref())
}

/// Declared type of a source, with resolver errors folded into `None`.
pub fn query_declared_type(
    resolver: &dyn ContentResolver,
    reference: &SourceReference,
) -> Option<String> {
    match resolver.declared_type(reference) {
        Ok(declared) => declared,
        Err(e) => {
            tracing::debug!(reference = %reference, error = %e, "Declared type unavailable");
            None
        }
    }
}

/// Guess a MIME type from a file extension, for sources without a content
/// database behind them.
pub fn declared_type_for_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "mp4" | "m4v" => "video/mp4",
        "3gp" => "video/3gpp",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        _ => return None,
    };
    Some(mime)
}
