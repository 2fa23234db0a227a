#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use mediapick_core::{PlatformProfile, RawSelection, SourceReference};
use mediapick_processing::{FileContentResolver, MediaNormalizer};
use mediapick_services::{PickerLauncher, PickerSession, SelectionReconciler, StaticLauncher};
use mediapick_storage::{LocalScratchStorage, ScratchStorage};
use percent_encoding::percent_decode_str;
use tempfile::TempDir;

/// A session wired to a scripted launcher and a throwaway scratch directory
pub struct TestPicker {
    pub session: PickerSession,
    pub launcher: Arc<StaticLauncher>,
    pub cache_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestPicker {
    pub fn scratch_entries(&self) -> usize {
        std::fs::read_dir(&self.cache_dir).unwrap().count()
    }
}

pub async fn setup_test_picker(
    selection: RawSelection,
    resolver: FileContentResolver,
) -> TestPicker {
    let temp_dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(
        LocalScratchStorage::new(temp_dir.path().join("mediapick"))
            .await
            .unwrap(),
    );
    let cache_dir = storage.scratch_dir().to_path_buf();

    let normalizer = MediaNormalizer::new(Arc::new(resolver), storage, 8192);
    let reconciler = SelectionReconciler::new(normalizer, 3);
    let launcher = Arc::new(StaticLauncher::new(selection));

    let session = PickerSession::new(
        Some(launcher.clone() as Arc<dyn PickerLauncher>),
        reconciler,
        PlatformProfile::default(),
    );

    TestPicker {
        session,
        launcher,
        cache_dir,
        _temp_dir: temp_dir,
    }
}

/// Write `data` into `dir` and return its reference
pub fn source_file(dir: &Path, name: &str, data: &[u8]) -> SourceReference {
    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    SourceReference::from(path.to_string_lossy().to_string())
}

/// Local path behind a result reference
pub fn uri_path(uri: &str) -> PathBuf {
    let encoded = uri.strip_prefix("file://").unwrap();
    PathBuf::from(percent_decode_str(encoded).decode_utf8().unwrap().into_owned())
}
