//! Pose labels, gesture events and the triggers the pipeline emits.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HandState
// ---------------------------------------------------------------------------

/// Coarse hand-pose label produced by the external classifier.
///
/// `Unknown` is a first-class value: the stabilizer records low-confidence
/// predictions as `Unknown` rather than trusting their literal label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandState {
    Palm,
    Fist,
    Pinch,
    TwoFingers,
    ThreeFingers,
    FourFingers,
    Unknown,
    NoHands,
}

impl HandState {
    /// Canonical upper-case name, as used in logs and recorded streams.
    ///
    /// ```
    /// use hand_gesture_control::domain::HandState;
    ///
    /// assert_eq!(HandState::TwoFingers.as_str(), "TWO_FINGERS");
    /// assert_eq!(HandState::NoHands.as_str(), "NO_HANDS");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Palm => "PALM",
            Self::Fist => "FIST",
            Self::Pinch => "PINCH",
            Self::TwoFingers => "TWO_FINGERS",
            Self::ThreeFingers => "THREE_FINGERS",
            Self::FourFingers => "FOUR_FINGERS",
            Self::Unknown => "UNKNOWN",
            Self::NoHands => "NO_HANDS",
        }
    }

    /// Returns `true` for labels that can drive a gesture (a real pose).
    pub fn is_trackable(&self) -> bool {
        !matches!(self, Self::Unknown | Self::NoHands)
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// GestureEvent
// ---------------------------------------------------------------------------

/// Events emitted outward by the gesture detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GestureEvent {
    Scroll,
    VolumeUp,
    VolumeDown,
    ZoomIn,
    ZoomOut,
    Screenshot,
    CloseWindow,
    MuteToggle,
    TaskView,
    PauseTogglePaused,
    PauseToggleResumed,
}

impl GestureEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scroll => "SCROLL",
            Self::VolumeUp => "VOLUME_UP",
            Self::VolumeDown => "VOLUME_DOWN",
            Self::ZoomIn => "ZOOM_IN",
            Self::ZoomOut => "ZOOM_OUT",
            Self::Screenshot => "SCREENSHOT",
            Self::CloseWindow => "CLOSE_WINDOW",
            Self::MuteToggle => "MUTE_TOGGLE",
            Self::TaskView => "TASK_VIEW",
            Self::PauseTogglePaused => "PAUSE_TOGGLE_PAUSED",
            Self::PauseToggleResumed => "PAUSE_TOGGLE_RESUMED",
        }
    }
}

impl std::fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// One emitted event plus the magnitude the action sink should apply.
///
/// | Event                     | `magnitude`                              |
/// |---------------------------|------------------------------------------|
/// | `Scroll`                  | signed wheel amount, positive = up       |
/// | `VolumeUp` / `VolumeDown` | key steps (≥ 1)                          |
/// | `ZoomIn` / `ZoomOut`      | key steps (≥ 1)                          |
/// | everything else           | `1`                                      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub event: GestureEvent,
    pub magnitude: i32,
}

impl Trigger {
    /// A fire-and-forget event with unit magnitude.
    pub fn once(event: GestureEvent) -> Self {
        Self {
            event,
            magnitude: 1,
        }
    }

    pub fn with_magnitude(event: GestureEvent, magnitude: i32) -> Self {
        Self { event, magnitude }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
