//! Gesture detectors and the manager that routes frames through them.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        GestureManager                         │
//! │                                                               │
//! │  FrameData ──▶ PauseResume ──▶ MuteToggle ──▶ paused? ──┐     │
//! │                  (emits ⇒ return)  (emits ⇒ return)     │     │
//! │                                                         ▼     │
//! │        single-hand: Scroll ▸ Volume ▸ Zoom ▸ Screenshot ▸     │
//! │                     CloseWindow                               │
//! │        two-hand:    TaskView                                  │
//! │                                                         │     │
//! │                       shared CooldownManager ◀──────────┘     │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every detector implements [`Gesture`].  Detectors never read a clock:
//! all timing comes from [`FrameData::timestamp`](crate::domain::FrameData).

pub mod close_window;
pub mod continuous;
pub mod manager;
pub mod mute;
pub mod pause;
pub mod screenshot;
pub mod scroll;
pub mod task_view;
pub mod volume;
pub mod zoom;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::domain::{FrameData, Trigger};
use crate::stabilize::CooldownManager;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use close_window::CloseWindowGesture;
pub use continuous::{ContinuousTracker, Signal};
pub use manager::GestureManager;
pub use mute::MuteToggleGesture;
pub use pause::PauseResumeGesture;
pub use screenshot::ScreenshotGesture;
pub use scroll::ScrollGesture;
pub use task_view::TaskViewGesture;
pub use volume::VolumeGesture;
pub use zoom::ZoomGesture;

// ---------------------------------------------------------------------------
// Gesture trait
// ---------------------------------------------------------------------------

/// A stateful detector fed one stabilized frame at a time.
///
/// The shared [`CooldownManager`] is lent for the duration of each call so
/// all detectors see one cooldown table.
pub trait Gesture {
    /// Short upper-case name used in logs.
    fn name(&self) -> &'static str;

    /// Inspect `frame` and return zero or more triggers.
    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger>;

    /// Drop all per-gesture progress.
    fn reset(&mut self);
}

// Compile-time assertion: Box<dyn Gesture> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Gesture + Send>) {}
};
