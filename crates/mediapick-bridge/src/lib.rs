//! Mediapick Bridge
//!
//! The web-view command surface: `pickImage` and `pickImages` take a JSON
//! argument array and answer with a JSON payload or an error message.

pub mod args;
pub mod error;
pub mod plugin;
pub mod response;

pub use args::parse_request;
pub use error::BridgeError;
pub use plugin::{Command, ImagePickerPlugin};
pub use response::PickResponse;
