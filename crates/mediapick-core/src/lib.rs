//! Mediapick Core Library
//!
//! This crate provides the domain models, error taxonomy and configuration
//! shared by every mediapick component: the request a caller makes, the raw
//! selection the platform picker hands back, and the result delivered once
//! per request.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{PickerConfig, PlatformProfile};
pub use error::{PickerError, PickerResult};
pub use models::{
    MediaKind, MediaTypeFilter, NormalizedItem, PickMode, PickRequest, PickResult, PickStatus,
    RawSelection, SourceReference, VideoQuality,
};
