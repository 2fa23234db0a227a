use mediapick_core::error::LogLevel;
use mediapick_core::PickerError;

/// Errors returned to the web-view caller.
///
/// `Display` is the message delivered through the error callback.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The action is not one this plugin handles
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    pub fn error_code(&self) -> &'static str {
        match self {
            BridgeError::UnknownAction(_) => "UNKNOWN_ACTION",
            BridgeError::Picker(e) => e.error_code(),
            BridgeError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            BridgeError::UnknownAction(_) => LogLevel::Debug,
            BridgeError::Picker(e) => e.log_level(),
            BridgeError::Serialization(_) => LogLevel::Error,
        }
    }

    /// Whether the host should report the action as not handled at all
    pub fn is_unhandled(&self) -> bool {
        matches!(self, BridgeError::UnknownAction(_))
    }
}
