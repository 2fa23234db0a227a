//! Configuration module
//!
//! Process-wide settings for the picker plugin. Request-scoped options
//! (quality, media type, max items) live in [`PickRequest`](crate::PickRequest)
//! instead and are never stored here.

use std::env;
use std::path::PathBuf;

// Common constants
const PLATFORM_API_LEVEL: u32 = 33;
const PICK_IMAGES_MAX_LIMIT: usize = 100;
const NORMALIZE_CONCURRENCY: usize = 4;
const COPY_BUFFER_BYTES: usize = 8192;

/// API level from which the system Photo Picker is used instead of the
/// document picker.
pub const PHOTO_PICKER_MIN_API_LEVEL: u32 = 33;

/// What the host platform can do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformProfile {
    pub api_level: u32,
    /// Largest multi-select count the platform picker accepts
    pub pick_images_max_limit: usize,
}

impl PlatformProfile {
    pub fn supports_photo_picker(&self) -> bool {
        self.api_level >= PHOTO_PICKER_MIN_API_LEVEL
    }
}

impl Default for PlatformProfile {
    fn default() -> Self {
        Self {
            api_level: PLATFORM_API_LEVEL,
            pick_images_max_limit: PICK_IMAGES_MAX_LIMIT,
        }
    }
}

/// Picker plugin configuration
#[derive(Clone, Debug)]
pub struct PickerConfig {
    /// Scratch directory receiving normalized files
    pub cache_dir: PathBuf,
    pub platform: PlatformProfile,
    /// Upper bound on items normalized at the same time in multi-select
    pub normalize_concurrency: usize,
    /// Buffer size used when stream-copying videos
    pub copy_buffer_bytes: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            platform: PlatformProfile::default(),
            normalize_concurrency: NORMALIZE_CONCURRENCY,
            copy_buffer_bytes: COPY_BUFFER_BYTES,
        }
    }
}

fn default_cache_dir() -> PathBuf {
    env::temp_dir().join("mediapick")
}

impl PickerConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from an arbitrary key lookup. Missing or
    /// unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_dir = lookup("MEDIAPICK_CACHE_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_cache_dir);

        let api_level = lookup("MEDIAPICK_PLATFORM_API_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(PLATFORM_API_LEVEL);

        let pick_images_max_limit = lookup("MEDIAPICK_PICK_IMAGES_MAX_LIMIT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(PICK_IMAGES_MAX_LIMIT);

        let normalize_concurrency = lookup("MEDIAPICK_NORMALIZE_CONCURRENCY")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(NORMALIZE_CONCURRENCY);

        let copy_buffer_bytes = lookup("MEDIAPICK_COPY_BUFFER_BYTES")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(COPY_BUFFER_BYTES);

        Self {
            cache_dir,
            platform: PlatformProfile {
                api_level,
                pick_images_max_limit,
            },
            normalize_concurrency,
            copy_buffer_bytes,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.normalize_concurrency == 0 {
            return Err(anyhow::anyhow!(
                "MEDIAPICK_NORMALIZE_CONCURRENCY must be at least 1"
            ));
        }

        if self.platform.pick_images_max_limit == 0 {
            return Err(anyhow::anyhow!(
                "MEDIAPICK_PICK_IMAGES_MAX_LIMIT must be at least 1"
            ));
        }

        if self.copy_buffer_bytes == 0 {
            return Err(anyhow::anyhow!("MEDIAPICK_COPY_BUFFER_BYTES must be at least 1"));
        }

        Ok(())
    }

    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }
}
