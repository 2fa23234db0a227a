use serde::Serialize;

use mediapick_core::{PickMode, PickResult};

/// JSON payload delivered through the success callback.
///
/// Canceled results carry only `status`. Single-select successes carry
/// `imageFileUri`, multi-select successes `imageFilesUris`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_files_uris: Option<Vec<String>>,
}

impl PickResponse {
    pub fn from_result(mode: PickMode, result: PickResult) -> Self {
        let status = result.status().as_str();
        if result.is_canceled() {
            return Self {
                status,
                image_file_uri: None,
                image_files_uris: None,
            };
        }

        let mut uris = result
            .into_files()
            .into_iter()
            .map(|item| item.local_file_reference);

        match mode {
            PickMode::Single => Self {
                status,
                image_file_uri: uris.next(),
                image_files_uris: None,
            },
            PickMode::Multiple => Self {
                status,
                image_file_uri: None,
                image_files_uris: Some(uris.collect()),
            },
        }
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
