//! Filesystem content resolver

use anyhow::{anyhow, Context};
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use mediapick_core::SourceReference;

use crate::mime::declared_type_for_extension;
use crate::traits::ContentResolver;

/// Resolves `file://` URIs and plain paths.
///
/// URIs are percent-decoded; plain paths are taken as-is.
///
/// Declared types come from an explicit override when one is registered,
/// otherwise from the file extension. Platform `content://` handles are
/// rejected; hosts provide their own resolver for those.
#[derive(Debug, Clone, Default)]
pub struct FileContentResolver {
    declared_overrides: HashMap<String, String>,
}

impl FileContentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the declared type for one reference.
    pub fn with_declared_type(
        mut self,
        reference: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        self.declared_overrides
            .insert(reference.into(), mime_type.into());
        self
    }

    fn path_for(reference: &SourceReference) -> anyhow::Result<PathBuf> {
        if reference.is_content_uri() {
            return Err(anyhow!(
                "Content reference {} requires the platform resolver",
                reference
            ));
        }

        let raw = reference.as_str();
        let path = match raw.strip_prefix("file://") {
            Some(encoded) => percent_decode_str(encoded)
                .decode_utf8()
                .with_context(|| format!("Malformed file URI {}", raw))?
                .into_owned(),
            None => raw.to_string(),
        };
        if path.is_empty() {
            return Err(anyhow!("Empty source reference"));
        }
        Ok(PathBuf::from(path))
    }
}

impl ContentResolver for FileContentResolver {
    fn open(&self, reference: &SourceReference) -> anyhow::Result<Box<dyn Read + Send>> {
        let path = Self::path_for(reference)?;
        let file = File::open(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;
        Ok(Box::new(file))
    }

    fn declared_type(&self, reference: &SourceReference) -> anyhow::Result<Option<String>> {
        if let Some(declared) = self.declared_overrides.get(reference.as_str()) {
            return Ok(Some(declared.clone()));
        }

        let path = Self::path_for(reference)?;
        Ok(Path::new(&path)
            .extension()
            .and_then(|e| e.to_str())
            .and_then(declared_type_for_extension)
            .map(String::from))
    }
}
