//! Selection reconciler
//!
//! Turns what the platform picker delivered into a [`PickResult`].
//!
//! Single-select: cancel or no reference gives `CANCELED`, a failed
//! normalization is an error. Multi-select: cancel gives `CANCELED`, anything
//! else is `OK` with whatever items survived normalization, possibly none.

use futures::stream::{self, StreamExt};

use mediapick_core::{PickRequest, PickResult, PickerError, PickerResult, RawSelection};
use mediapick_processing::MediaNormalizer;

#[derive(Clone)]
pub struct SelectionReconciler {
    normalizer: MediaNormalizer,
    concurrency: usize,
}

impl SelectionReconciler {
    pub fn new(normalizer: MediaNormalizer, concurrency: usize) -> Self {
        Self {
            normalizer,
            concurrency: concurrency.max(1),
        }
    }

    pub async fn reconcile(
        &self,
        request: &PickRequest,
        selection: RawSelection,
    ) -> PickerResult<PickResult> {
        if request.is_multiple() {
            Ok(self.reconcile_multiple(request, selection).await)
        } else {
            self.reconcile_single(request, selection).await
        }
    }

    async fn reconcile_single(
        &self,
        request: &PickRequest,
        selection: RawSelection,
    ) -> PickerResult<PickResult> {
        if selection.canceled {
            return Ok(PickResult::canceled());
        }
        let Some(reference) = selection.items.into_iter().next() else {
            tracing::debug!("Picker returned OK without a reference, treating as canceled");
            return Ok(PickResult::canceled());
        };

        match self
            .normalizer
            .normalize(reference.clone(), request.image_quality)
            .await
        {
            Some(item) => Ok(PickResult::ok(vec![item])),
            None => {
                tracing::warn!(reference = %reference, "Single selection could not be normalized");
                Err(PickerError::NormalizationFailed)
            }
        }
    }

    async fn reconcile_multiple(&self, request: &PickRequest, selection: RawSelection) -> PickResult {
        if selection.canceled {
            return PickResult::canceled();
        }

        let selected = selection.items.len();
        let cap = request.item_cap().unwrap_or(selected);
        if selected > cap {
            tracing::debug!(selected = selected, cap = cap, "Dropping items beyond the cap");
        }

        let quality = request.image_quality;
        let outcomes: Vec<_> = stream::iter(selection.items.into_iter().take(cap))
            .map(|reference| {
                let normalizer = self.normalizer.clone();
                async move {
                    let item = normalizer.normalize(reference.clone(), quality).await;
                    (reference, item)
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut files = Vec::with_capacity(outcomes.len());
        for (reference, item) in outcomes {
            match item {
                Some(item) => files.push(item),
                None => tracing::warn!(reference = %reference, "Dropping item that failed normalization"),
            }
        }

        tracing::info!(
            selected = selected,
            normalized = files.len(),
            "Multi-selection reconciled"
        );

        PickResult::ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediapick_core::{PickStatus, SourceReference};
    use mediapick_processing::FileContentResolver;
    use mediapick_storage::LocalScratchStorage;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([40, 90, 200]));
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
            .unwrap();
        out
    }

    fn write(dir: &Path, name: &str, data: &[u8]) -> SourceReference {
        let path = dir.join(name);
        std::fs::write(&path, data).unwrap();
        SourceReference::from(path.to_string_lossy().to_string())
    }

    async fn reconciler() -> (TempDir, SelectionReconciler) {
        let dir = tempdir().unwrap();
        let storage = Arc::new(LocalScratchStorage::new(dir.path().join("cache")).await.unwrap());
        let normalizer = MediaNormalizer::new(Arc::new(FileContentResolver::new()), storage, 8192);
        (dir, SelectionReconciler::new(normalizer, 2))
    }

    #[tokio::test]
    async fn test_single_canceled() {
        let (_dir, reconciler) = reconciler().await;
        let result = reconciler
            .reconcile(&PickRequest::single(), RawSelection::canceled())
            .await
            .unwrap();
        assert_eq!(result.status(), PickStatus::Canceled);
        assert!(result.files().is_empty());
    }

    #[tokio::test]
    async fn test_single_without_reference_is_canceled() {
        let (_dir, reconciler) = reconciler().await;
        let selection = RawSelection::from_activity_result(true, None, None);
        let result = reconciler
            .reconcile(&PickRequest::single(), selection)
            .await
            .unwrap();
        assert!(result.is_canceled());
    }

    #[tokio::test]
    async fn test_single_failure_is_error() {
        let (dir, reconciler) = reconciler().await;
        let bad = write(dir.path(), "bad.jpg", b"nope");
        let err = reconciler
            .reconcile(&PickRequest::single(), RawSelection::selected([bad]))
            .await
            .unwrap_err();
        assert!(matches!(err, PickerError::NormalizationFailed));
    }

    #[tokio::test]
    async fn test_single_uses_first_reference_only() {
        let (dir, reconciler) = reconciler().await;
        let a = write(dir.path(), "a.png", &png_bytes(3, 3));
        let b = write(dir.path(), "b.png", &png_bytes(3, 3));
        let result = reconciler
            .reconcile(&PickRequest::single(), RawSelection::selected([a, b]))
            .await
            .unwrap();
        assert_eq!(result.files().len(), 1);
    }

    #[tokio::test]
    async fn test_multi_all_failed_is_ok_and_empty() {
        let (dir, reconciler) = reconciler().await;
        let items = [
            write(dir.path(), "x.jpg", b"x"),
            write(dir.path(), "y.jpg", b"y"),
        ];
        let result = reconciler
            .reconcile(&PickRequest::multiple(), RawSelection::selected(items))
            .await
            .unwrap();
        assert_eq!(result.status(), PickStatus::Ok);
        assert!(result.files().is_empty());
    }

    #[tokio::test]
    async fn test_multi_preserves_order_under_cap() {
        let (dir, reconciler) = reconciler().await;
        // Differing sizes make the outputs distinguishable after normalization
        let items: Vec<_> = (1..=5)
            .map(|i| write(dir.path(), &format!("{}.png", i), &png_bytes(i, 1)))
            .collect();

        let request = PickRequest::multiple().with_max_items(3);
        let result = reconciler
            .reconcile(&request, RawSelection::selected(items))
            .await
            .unwrap();

        let widths: Vec<u32> = result
            .files()
            .iter()
            .map(|item| image::image_dimensions(&item.path).unwrap().0)
            .collect();
        assert_eq!(widths, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_multi_cap_counts_only_present_clip_entries() {
        let (dir, reconciler) = reconciler().await;
        let a = write(dir.path(), "a.png", &png_bytes(1, 1)).as_str().to_string();
        let b = write(dir.path(), "b.png", &png_bytes(2, 1)).as_str().to_string();
        let selection =
            RawSelection::from_activity_result(true, None, Some(vec![Some(a), None, Some(b)]));

        let request = PickRequest::multiple().with_max_items(2);
        let result = reconciler.reconcile(&request, selection).await.unwrap();

        let widths: Vec<u32> = result
            .files()
            .iter()
            .map(|item| image::image_dimensions(&item.path).unwrap().0)
            .collect();
        assert_eq!(widths, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_multi_canceled() {
        let (_dir, reconciler) = reconciler().await;
        let result = reconciler
            .reconcile(&PickRequest::multiple(), RawSelection::canceled())
            .await
            .unwrap();
        assert!(result.is_canceled());
    }
}
