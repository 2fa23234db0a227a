//! Mediapick Services Library
//!
//! Orchestration on top of the processing crate:
//! - Launch descriptors and the picker launcher port (launcher)
//! - Selection reconciliation: cancel, cap, per-item failure handling (reconciler)
//! - One-request-at-a-time picker sessions (session)

pub mod launcher;
pub mod reconciler;
pub mod session;

pub use launcher::{
    ChannelLauncher, LaunchAction, PendingPick, PickerLaunch, PickerLauncher, StaticLauncher,
};
pub use reconciler::SelectionReconciler;
pub use session::PickerSession;
