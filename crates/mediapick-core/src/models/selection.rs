use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle to a selected item.
///
/// Either a platform content reference (`content://...`), a `file://` URI or a
/// plain filesystem path. Only a content resolver knows how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceReference(String);

impl SourceReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for platform content handles that cannot be read as a path.
    pub fn is_content_uri(&self) -> bool {
        self.0.starts_with("content:/")
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceReference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SourceReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What the platform picker delivered for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawSelection {
    pub canceled: bool,
    pub items: Vec<SourceReference>,
}

impl RawSelection {
    pub fn canceled() -> Self {
        Self {
            canceled: true,
            items: Vec::new(),
        }
    }

    pub fn selected<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceReference>,
    {
        Self {
            canceled: false,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a selection from an activity-style result.
    ///
    /// `clip` is the multi-item shape and wins when present; null entries in it
    /// are skipped. Otherwise `data` is the single-item shape. A non-OK result
    /// is a cancellation regardless of payload.
    pub fn from_activity_result(
        ok: bool,
        data: Option<String>,
        clip: Option<Vec<Option<String>>>,
    ) -> Self {
        if !ok {
            return Self::canceled();
        }

        // Missing clip entries are dropped here, before any cap applies
        let items = match (clip, data) {
            (Some(clip), _) => clip.into_iter().flatten().map(SourceReference::from).collect(),
            (None, Some(data)) => vec![SourceReference::from(data)],
            (None, None) => Vec::new(),
        };

        Self {
            canceled: false,
            items,
        }
    }

    pub fn first(&self) -> Option<&SourceReference> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
