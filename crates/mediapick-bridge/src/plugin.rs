//! Image picker plugin
//!
//! Entry point for the web-view bridge. Each call resolves exactly once:
//! a success payload or an error message.

use serde_json::Value;
use std::sync::Arc;

use mediapick_core::error::LogLevel;
use mediapick_core::{PickMode, PickerConfig};
use mediapick_processing::{ContentResolver, MediaNormalizer};
use mediapick_services::{PickerLauncher, PickerSession, SelectionReconciler};
use mediapick_storage::LocalScratchStorage;

use crate::args::parse_request;
use crate::error::BridgeError;
use crate::response::PickResponse;

/// Actions the plugin handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PickImage,
    PickImages,
}

impl Command {
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "pickImage" => Some(Command::PickImage),
            "pickImages" => Some(Command::PickImages),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::PickImage => "pickImage",
            Command::PickImages => "pickImages",
        }
    }

    pub fn mode(self) -> PickMode {
        match self {
            Command::PickImage => PickMode::Single,
            Command::PickImages => PickMode::Multiple,
        }
    }
}

pub struct ImagePickerPlugin {
    session: PickerSession,
}

impl ImagePickerPlugin {
    pub fn new(session: PickerSession) -> Self {
        Self { session }
    }

    /// Wire a plugin from configuration.
    ///
    /// `launcher` is `None` when the host never registered one; every pick
    /// then fails with the "not initialized" message.
    pub async fn from_config(
        config: &PickerConfig,
        launcher: Option<Arc<dyn PickerLauncher>>,
        resolver: Arc<dyn ContentResolver>,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        let storage = Arc::new(LocalScratchStorage::new(&config.cache_dir).await?);

        tracing::info!(
            cache_dir = %config.cache_dir.display(),
            api_level = config.platform.api_level,
            launcher = launcher.is_some(),
            "Image picker plugin initialized"
        );

        let normalizer = MediaNormalizer::new(resolver, storage, config.copy_buffer_bytes);
        let reconciler = SelectionReconciler::new(normalizer, config.normalize_concurrency);
        Ok(Self::new(PickerSession::new(launcher, reconciler, config.platform)))
    }

    pub fn session(&self) -> &PickerSession {
        &self.session
    }

    /// Run one bridge action with its JSON argument array.
    pub async fn execute(&self, action: &str, args: &Value) -> Result<Value, BridgeError> {
        let command =
            Command::parse(action).ok_or_else(|| BridgeError::UnknownAction(action.to_string()))?;

        match self.run(command, args).await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                let action = command.as_str();
                let code = e.error_code();
                match e.log_level() {
                    LogLevel::Debug => {
                        tracing::debug!(action, error_code = code, error = %e, "Pick action rejected")
                    }
                    LogLevel::Warn => {
                        tracing::warn!(action, error_code = code, error = %e, "Pick action failed")
                    }
                    LogLevel::Error => {
                        tracing::error!(action, error_code = code, error = %e, "Pick action failed")
                    }
                }
                Err(e)
            }
        }
    }

    async fn run(&self, command: Command, args: &Value) -> Result<Value, BridgeError> {
        let request = parse_request(command.mode(), args)?;
        let result = self.session.start_pick(request).await?;
        let payload = PickResponse::from_result(command.mode(), result).to_value()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediapick_core::RawSelection;
    use mediapick_processing::FileContentResolver;
    use mediapick_services::StaticLauncher;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("pickImage"), Some(Command::PickImage));
        assert_eq!(Command::parse("pickImages"), Some(Command::PickImages));
        assert_eq!(Command::parse("PickImage"), None);
        assert_eq!(Command::PickImages.mode(), PickMode::Multiple);
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let dir = tempdir().unwrap();
        let config = PickerConfig::default().with_cache_dir(dir.path().join("cache"));
        let plugin = ImagePickerPlugin::from_config(&config, None, Arc::new(FileContentResolver::new()))
            .await
            .unwrap();

        let err = plugin.execute("takePhoto", &json!([])).await.unwrap_err();
        assert!(err.is_unhandled());
    }

    #[tokio::test]
    async fn test_missing_launcher_message() {
        let dir = tempdir().unwrap();
        let config = PickerConfig::default().with_cache_dir(dir.path().join("cache"));
        let plugin = ImagePickerPlugin::from_config(&config, None, Arc::new(FileContentResolver::new()))
            .await
            .unwrap();

        let err = plugin.execute("pickImage", &json!([{}])).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Image picker not initialized. Please ensure the plugin is properly configured."
        );
    }

    #[tokio::test]
    async fn test_canceled_payload() {
        let dir = tempdir().unwrap();
        let config = PickerConfig::default().with_cache_dir(dir.path().join("cache"));
        let launcher: Arc<dyn PickerLauncher> = Arc::new(StaticLauncher::new(RawSelection::canceled()));
        let plugin =
            ImagePickerPlugin::from_config(&config, Some(launcher), Arc::new(FileContentResolver::new()))
                .await
                .unwrap();

        let payload = plugin.execute("pickImages", &json!([{ "maxImages": 3 }])).await.unwrap();
        assert_eq!(payload, json!({ "status": "CANCELED" }));
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let dir = tempdir().unwrap();
        let mut config = PickerConfig::default().with_cache_dir(dir.path().join("cache"));
        config.normalize_concurrency = 0;

        let result =
            ImagePickerPlugin::from_config(&config, None, Arc::new(FileContentResolver::new())).await;
        assert!(result.is_err());
    }
}
