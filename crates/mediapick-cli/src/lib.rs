//! Helpers for the `mediapick` harness binary.

use serde_json::{json, Map, Value};
use std::path::PathBuf;

use mediapick_core::RawSelection;

/// What the scripted launcher reports back: the given paths, or a cancel.
pub fn scripted_selection(paths: &[PathBuf], cancel: bool) -> RawSelection {
    if cancel {
        return RawSelection::canceled();
    }
    RawSelection::selected(paths.iter().map(|p| p.to_string_lossy().to_string()))
}

/// Bridge argument array carrying only the options that were given.
pub fn bridge_args(
    quality: Option<i64>,
    media_type: Option<&str>,
    max_images: Option<i64>,
) -> Value {
    let mut options = Map::new();
    if let Some(quality) = quality {
        options.insert("imageQuality".to_string(), json!(quality));
    }
    if let Some(media_type) = media_type {
        options.insert("mediaType".to_string(), json!(media_type));
    }
    if let Some(max) = max_images {
        options.insert("maxImages".to_string(), json!(max));
    }
    json!([Value::Object(options)])
}

/// Initialize tracing for the CLI. Logs go to stderr so stdout stays JSON.
pub fn init_tracing() {
    if let Err(e) = mediapick_infra::init_telemetry(false) {
        eprintln!("Tracing already initialized: {}", e);
    }
}
