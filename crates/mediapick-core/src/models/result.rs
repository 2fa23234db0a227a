use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Classification of a selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A selected item after it has been copied into the scratch directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    /// `file://` URI of the local copy, as handed to the caller
    pub local_file_reference: String,
    pub path: PathBuf,
    pub kind: MediaKind,
}

/// Terminal status of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CANCELED")]
    Canceled,
}

impl PickStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PickStatus::Ok => "OK",
            PickStatus::Canceled => "CANCELED",
        }
    }
}

/// The value delivered to the caller exactly once per request.
///
/// Construct through [`PickResult::canceled`] or [`PickResult::ok`] so a
/// canceled result can never carry files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickResult {
    status: PickStatus,
    files: Vec<NormalizedItem>,
}

impl PickResult {
    pub fn canceled() -> Self {
        Self {
            status: PickStatus::Canceled,
            files: Vec::new(),
        }
    }

    pub fn ok(files: Vec<NormalizedItem>) -> Self {
        Self {
            status: PickStatus::Ok,
            files,
        }
    }

    pub fn status(&self) -> PickStatus {
        self.status
    }

    pub fn files(&self) -> &[NormalizedItem] {
        &self.files
    }

    pub fn into_files(self) -> Vec<NormalizedItem> {
        self.files
    }

    pub fn is_canceled(&self) -> bool {
        self.status == PickStatus::Canceled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canceled_result_has_no_files() {
        let result = PickResult::canceled();
        assert!(result.is_canceled());
        assert!(result.files().is_empty());
    }

    #[test]
    fn status_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&PickStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(
            serde_json::to_string(&PickStatus::Canceled).unwrap(),
            "\"CANCELED\""
        );
    }
}
