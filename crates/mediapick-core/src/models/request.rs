use serde::{Deserialize, Serialize};

/// Default intermediate compression quality for images.
pub const DEFAULT_IMAGE_QUALITY: u8 = 100;

/// Default message shown by hosts that display progress while a video is handled.
pub const DEFAULT_VIDEO_PROCESSING_MESSAGE: &str = "Processing video...";

/// Whether the picker returns one item or several
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PickMode {
    Single,
    Multiple,
}

/// Logical media filter requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaTypeFilter {
    #[default]
    Image,
    Video,
    #[serde(rename = "all")]
    Any,
}

impl MediaTypeFilter {
    /// Parse the bridge option value. Anything other than `video` or `all`
    /// selects images, which is also the default when the option is absent.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "video" => MediaTypeFilter::Video,
            "all" => MediaTypeFilter::Any,
            _ => MediaTypeFilter::Image,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaTypeFilter::Image => "image",
            MediaTypeFilter::Video => "video",
            MediaTypeFilter::Any => "all",
        }
    }
}

/// Video quality preset accepted from callers.
///
/// Carried through the request for hosts that transcode; the normalizer
/// copies video bytes verbatim regardless of the preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    Low,
    #[default]
    Medium,
    High,
    Highest,
    Passthrough,
}

impl VideoQuality {
    /// Unknown presets fall back to `Medium`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => VideoQuality::Low,
            "high" => VideoQuality::High,
            "highest" => VideoQuality::Highest,
            "passthrough" => VideoQuality::Passthrough,
            _ => VideoQuality::Medium,
        }
    }
}

/// Request-scoped picker configuration.
///
/// Built once from caller options and never mutated after the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRequest {
    pub mode: PickMode,
    pub media_type: MediaTypeFilter,
    /// Intermediate JPEG quality, 0-100
    pub image_quality: u8,
    /// Multi-select cap; 0 means unbounded
    pub max_items: usize,
    pub video_quality: VideoQuality,
    pub video_processing_message: String,
}

impl PickRequest {
    pub fn new(mode: PickMode) -> Self {
        Self {
            mode,
            media_type: MediaTypeFilter::default(),
            image_quality: DEFAULT_IMAGE_QUALITY,
            max_items: 0,
            video_quality: VideoQuality::default(),
            video_processing_message: DEFAULT_VIDEO_PROCESSING_MESSAGE.to_string(),
        }
    }

    pub fn single() -> Self {
        Self::new(PickMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(PickMode::Multiple)
    }

    /// Set the image quality, clamped to 0-100.
    pub fn with_image_quality(mut self, quality: i64) -> Self {
        self.image_quality = quality.clamp(0, 100) as u8;
        self
    }

    pub fn with_media_type(mut self, media_type: MediaTypeFilter) -> Self {
        self.media_type = media_type;
        self
    }

    /// Set the multi-select cap. Negative values mean unbounded.
    pub fn with_max_items(mut self, max_items: i64) -> Self {
        self.max_items = usize::try_from(max_items).unwrap_or(0);
        self
    }

    pub fn with_video_quality(mut self, video_quality: VideoQuality) -> Self {
        self.video_quality = video_quality;
        self
    }

    pub fn with_video_processing_message(mut self, message: impl Into<String>) -> Self {
        self.video_processing_message = message.into();
        self
    }

    pub fn is_multiple(&self) -> bool {
        self.mode == PickMode::Multiple
    }

    /// The cap to apply to a selection, if any.
    pub fn item_cap(&self) -> Option<usize> {
        (self.is_multiple() && self.max_items > 0).then_some(self.max_items)
    }
}
