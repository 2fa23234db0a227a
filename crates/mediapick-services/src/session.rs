//! Picker session controller
//!
//! One plugin instance runs at most one pick at a time. A second
//! `start_pick` while one is outstanding is rejected with
//! [`PickerError::Busy`]; it never queues and never disturbs the first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mediapick_core::{PickRequest, PickResult, PickerError, PickerResult, PlatformProfile};

use crate::launcher::{PickerLaunch, PickerLauncher};
use crate::reconciler::SelectionReconciler;

pub struct PickerSession {
    launcher: Option<Arc<dyn PickerLauncher>>,
    reconciler: SelectionReconciler,
    platform: PlatformProfile,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the pick finishes, however it finishes.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl PickerSession {
    pub fn new(
        launcher: Option<Arc<dyn PickerLauncher>>,
        reconciler: SelectionReconciler,
        platform: PlatformProfile,
    ) -> Self {
        Self {
            launcher,
            reconciler,
            platform,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Launch the picker and resolve exactly one result for `request`.
    pub async fn start_pick(&self, request: PickRequest) -> PickerResult<PickResult> {
        let _guard = self.acquire()?;

        let Some(launcher) = self.launcher.as_ref() else {
            tracing::error!("Pick requested without a picker launcher");
            return Err(PickerError::LauncherUnavailable);
        };

        let launch = PickerLaunch::for_request(&request, &self.platform);
        tracing::info!(
            mode = ?request.mode,
            media_type = request.media_type.as_str(),
            image_quality = request.image_quality,
            max_items = request.max_items,
            video_quality = ?request.video_quality,
            video_processing_message = %request.video_processing_message,
            "Starting pick"
        );
        tracing::debug!(
            action = ?launch.action,
            mime_filter = launch.mime_filter,
            allow_multiple = launch.allow_multiple,
            max_selection = ?launch.max_selection,
            progress_message = ?launch.progress_message,
            "Launching picker"
        );

        let selection = launcher.launch(launch).await?;
        let result = self.reconciler.reconcile(&request, selection).await?;

        tracing::info!(
            status = result.status().as_str(),
            files = result.files().len(),
            "Pick resolved"
        );
        Ok(result)
    }

    fn acquire(&self) -> Result<InFlightGuard<'_>, PickerError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| InFlightGuard(&self.in_flight))
            .map_err(|_| {
                tracing::debug!("Rejecting pick while another is in progress");
                PickerError::Busy
            })
    }
}
