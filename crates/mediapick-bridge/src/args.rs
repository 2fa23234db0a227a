//! Lenient parsing of bridge call arguments
//!
//! Options are read one by one; a missing or malformed option falls back to
//! its default instead of failing the call. Only a malformed argument
//! container is an error.

use serde_json::{Map, Value};

use mediapick_core::{MediaTypeFilter, PickMode, PickRequest, PickerError, VideoQuality};

const IMAGE_QUALITY: &str = "imageQuality";
const MAX_IMAGES: &str = "maxImages";
const MEDIA_TYPE: &str = "mediaType";
const VIDEO_QUALITY: &str = "videoQuality";
const VIDEO_PROCESSING_MESSAGE: &str = "videoProcessingMessage";

/// Build a request from bridge arguments.
///
/// `args` is the call's argument array whose first element is the options
/// object. A bare object, `null`, or an empty array are accepted too.
pub fn parse_request(mode: PickMode, args: &Value) -> Result<PickRequest, PickerError> {
    let empty = Map::new();
    let options = options_object(args)?.unwrap_or(&empty);

    let mut request = PickRequest::new(mode);

    if let Some(quality) = options.get(IMAGE_QUALITY).and_then(lenient_int) {
        request = request.with_image_quality(quality);
    }
    if let Some(media_type) = options.get(MEDIA_TYPE).and_then(Value::as_str) {
        request = request.with_media_type(MediaTypeFilter::parse_lenient(media_type));
    }
    if let Some(video_quality) = options.get(VIDEO_QUALITY).and_then(Value::as_str) {
        request = request.with_video_quality(VideoQuality::parse_lenient(video_quality));
    }
    if let Some(message) = options.get(VIDEO_PROCESSING_MESSAGE).and_then(Value::as_str) {
        request = request.with_video_processing_message(message);
    }
    if mode == PickMode::Multiple {
        if let Some(max) = options.get(MAX_IMAGES).and_then(lenient_int) {
            request = request.with_max_items(max);
        }
    }

    Ok(request)
}

fn options_object(args: &Value) -> Result<Option<&Map<String, Value>>, PickerError> {
    match args {
        Value::Null => Ok(None),
        Value::Object(map) => Ok(Some(map)),
        Value::Array(items) => match items.first() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => Err(PickerError::InvalidArguments(format!(
                "expected an options object, got {}",
                other
            ))),
        },
        other => Err(PickerError::InvalidArguments(format!(
            "expected an argument array, got {}",
            other
        ))),
    }
}

/// Integer from a JSON number or numeric string. Fractions are truncated.
fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64))
        }
        _ => None,
    }
}
