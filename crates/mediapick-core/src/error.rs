//! Error types module
//!
//! User cancellation is not an error and never appears here; it is a
//! [`PickResult`](crate::PickResult) with status `CANCELED`. Per-item
//! normalization failures in multi-select are recovered by the reconciler and
//! never surface either. Everything that does reach a caller goes through
//! `PickerError`.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a busy picker
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error("A pick request is already in progress")]
    Busy,

    #[error("Image picker not initialized. Please ensure the plugin is properly configured.")]
    LauncherUnavailable,

    #[error("Picker result was never delivered")]
    LauncherClosed,

    #[error("Failed to process media file")]
    NormalizationFailed,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl PickerError {
    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            PickerError::Busy => "PICKER_BUSY",
            PickerError::LauncherUnavailable => "LAUNCHER_UNAVAILABLE",
            PickerError::LauncherClosed => "LAUNCHER_CLOSED",
            PickerError::NormalizationFailed => "NORMALIZATION_FAILED",
            PickerError::InvalidArguments(_) => "INVALID_ARGUMENTS",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            PickerError::Busy | PickerError::InvalidArguments(_) => LogLevel::Debug,
            PickerError::NormalizationFailed | PickerError::LauncherClosed => LogLevel::Warn,
            PickerError::LauncherUnavailable => LogLevel::Error,
        }
    }
}

pub type PickerResult<T> = Result<T, PickerError>;
