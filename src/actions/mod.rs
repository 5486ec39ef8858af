//! Turning triggers into OS input.
//!
//! ```text
//! Trigger ──▶ apply() ──▶ ActionSink ──▶ EnigoSink (mouse wheel / keys)
//!                              ▲
//!                  ActionWorker thread (std mpsc, in order)
//! ```
//!
//! [`ActionSink`] is the seam between gesture logic and the desktop: the
//! production [`EnigoSink`] drives `enigo`; tests use a recording sink.

pub mod enigo_sink;
pub mod worker;

pub use enigo_sink::EnigoSink;
pub use worker::ActionWorker;

use thiserror::Error;

use crate::domain::{GestureEvent, Trigger};

// ---------------------------------------------------------------------------
// ActionError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ActionError {
    /// The input backend could not be initialised.
    #[error("cannot open input backend: {0}")]
    Backend(String),

    /// A key or wheel event could not be delivered.
    #[error("cannot simulate input: {0}")]
    Input(String),
}

// ---------------------------------------------------------------------------
// ActionSink
// ---------------------------------------------------------------------------

/// Desktop side effects, one method per action kind.
pub trait ActionSink {
    /// Scroll by `amount` wheel units; positive scrolls up.
    fn scroll(&mut self, amount: i32) -> Result<(), ActionError>;
    fn volume(&mut self, up: bool, steps: u32) -> Result<(), ActionError>;
    fn zoom(&mut self, zoom_in: bool, steps: u32) -> Result<(), ActionError>;
    fn screenshot(&mut self) -> Result<(), ActionError>;
    fn close_window(&mut self) -> Result<(), ActionError>;
    fn mute_toggle(&mut self) -> Result<(), ActionError>;
    fn task_view(&mut self) -> Result<(), ActionError>;
    fn media_play_pause(&mut self) -> Result<(), ActionError>;
}

/// Dispatch one trigger to the matching sink call.
pub fn apply(trigger: &Trigger, sink: &mut dyn ActionSink) -> Result<(), ActionError> {
    let steps = trigger.magnitude.unsigned_abs();
    match trigger.event {
        GestureEvent::Scroll => sink.scroll(trigger.magnitude),
        GestureEvent::VolumeUp => sink.volume(true, steps),
        GestureEvent::VolumeDown => sink.volume(false, steps),
        GestureEvent::ZoomIn => sink.zoom(true, steps),
        GestureEvent::ZoomOut => sink.zoom(false, steps),
        GestureEvent::Screenshot => sink.screenshot(),
        GestureEvent::CloseWindow => sink.close_window(),
        GestureEvent::MuteToggle => sink.mute_toggle(),
        GestureEvent::TaskView => sink.task_view(),
        GestureEvent::PauseTogglePaused | GestureEvent::PauseToggleResumed => {
            sink.media_play_pause()
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingSink (test only)
// ---------------------------------------------------------------------------

/// Sink that records each call as a short string instead of touching the OS.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub calls: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&mut self, call: String) -> Result<(), ActionError> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

#[cfg(test)]
impl ActionSink for RecordingSink {
    fn scroll(&mut self, amount: i32) -> Result<(), ActionError> {
        self.record(format!("scroll {amount}"))
    }
    fn volume(&mut self, up: bool, steps: u32) -> Result<(), ActionError> {
        self.record(format!("volume {} {steps}", if up { "up" } else { "down" }))
    }
    fn zoom(&mut self, zoom_in: bool, steps: u32) -> Result<(), ActionError> {
        self.record(format!("zoom {} {steps}", if zoom_in { "in" } else { "out" }))
    }
    fn screenshot(&mut self) -> Result<(), ActionError> {
        self.record("screenshot".into())
    }
    fn close_window(&mut self) -> Result<(), ActionError> {
        self.record("close_window".into())
    }
    fn mute_toggle(&mut self) -> Result<(), ActionError> {
        self.record("mute".into())
    }
    fn task_view(&mut self) -> Result<(), ActionError> {
        self.record("task_view".into())
    }
    fn media_play_pause(&mut self) -> Result<(), ActionError> {
        self.record("play_pause".into())
    }
}
