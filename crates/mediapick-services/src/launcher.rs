//! Picker launch descriptors and the launcher port
//!
//! The host platform owns the actual picker UI. This module builds the
//! descriptor the host needs to open it and defines how the selection comes
//! back: exactly once, asynchronously.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Mutex;
use tokio::sync::{mpsc, oneshot};

use mediapick_core::{MediaTypeFilter, PickRequest, PickerError, PlatformProfile, RawSelection};
use mediapick_processing::resolve_filter;

/// Which platform facility opens the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchAction {
    /// System photo picker (API 33+)
    PhotoPicker,
    /// Document picker fallback for older platforms
    OpenDocument,
}

/// Host-facing picker descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerLaunch {
    pub action: LaunchAction,
    pub mime_filter: &'static str,
    pub allow_multiple: bool,
    /// Maximum selectable items. Only the photo picker enforces a limit.
    pub max_selection: Option<usize>,
    /// Restrict the document picker to openable items
    pub openable_only: bool,
    /// Text for the host's progress overlay while videos are copied.
    /// Absent when the filter cannot yield videos.
    pub progress_message: Option<String>,
}

impl PickerLaunch {
    pub fn for_request(request: &PickRequest, platform: &PlatformProfile) -> Self {
        let mime_filter = resolve_filter(request.media_type);
        let allow_multiple = request.is_multiple();
        let progress_message = match request.media_type {
            MediaTypeFilter::Image => None,
            MediaTypeFilter::Video | MediaTypeFilter::Any => {
                Some(request.video_processing_message.clone())
            }
        };

        if platform.supports_photo_picker() {
            let max_selection = allow_multiple.then(|| {
                let limit = platform.pick_images_max_limit;
                match request.max_items {
                    0 => limit,
                    max => max.min(limit),
                }
            });

            Self {
                action: LaunchAction::PhotoPicker,
                mime_filter,
                allow_multiple,
                max_selection,
                openable_only: false,
                progress_message,
            }
        } else {
            Self {
                action: LaunchAction::OpenDocument,
                mime_filter,
                allow_multiple,
                max_selection: None,
                openable_only: true,
                progress_message,
            }
        }
    }
}

/// Opens the platform picker and waits for its single result
#[async_trait]
pub trait PickerLauncher: Send + Sync {
    async fn launch(&self, launch: PickerLaunch) -> Result<RawSelection, PickerError>;
}

/// A launch waiting for the host to deliver a selection
#[derive(Debug)]
pub struct PendingPick {
    pub launch: PickerLaunch,
    reply: oneshot::Sender<RawSelection>,
}

impl PendingPick {
    /// Deliver the selection. Consumes the pick so it resolves at most once.
    pub fn resolve(self, selection: RawSelection) {
        if self.reply.send(selection).is_err() {
            tracing::debug!("Pick resolved after the requester went away");
        }
    }
}

/// Launcher that hands each launch to the host over a channel.
///
/// The host side receives [`PendingPick`]s and resolves them when its picker
/// returns. Dropping a pending pick without resolving it fails the request
/// with [`PickerError::LauncherClosed`] instead of hanging.
pub struct ChannelLauncher {
    sender: mpsc::Sender<PendingPick>,
}

impl ChannelLauncher {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<PendingPick>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl PickerLauncher for ChannelLauncher {
    async fn launch(&self, launch: PickerLaunch) -> Result<RawSelection, PickerError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(PendingPick { launch, reply })
            .await
            .map_err(|_| PickerError::LauncherClosed)?;

        response.await.map_err(|_| PickerError::LauncherClosed)
    }
}

/// Launcher that answers every launch with a preset selection.
///
/// Used by the CLI harness, where the "picked" files come from arguments.
/// Records the last descriptor it was given.
pub struct StaticLauncher {
    selection: RawSelection,
    last_launch: Mutex<Option<PickerLaunch>>,
}

impl StaticLauncher {
    pub fn new(selection: RawSelection) -> Self {
        Self {
            selection,
            last_launch: Mutex::new(None),
        }
    }

    pub fn last_launch(&self) -> Option<PickerLaunch> {
        self.last_launch
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl PickerLauncher for StaticLauncher {
    async fn launch(&self, launch: PickerLaunch) -> Result<RawSelection, PickerError> {
        match self.last_launch.lock() {
            Ok(mut guard) => *guard = Some(launch),
            Err(poisoned) => *poisoned.into_inner() = Some(launch),
        }
        Ok(self.selection.clone())
    }
}
