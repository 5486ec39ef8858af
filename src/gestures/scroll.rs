//! Two-finger vertical scroll.

use crate::config::ContinuousConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::continuous::{ContinuousTracker, Signal};
use crate::gestures::Gesture;
use crate::stabilize::CooldownManager;

/// Emits [`GestureEvent::Scroll`] while a `TWO_FINGERS` hand moves vertically.
///
/// The trigger magnitude is the wheel amount, positive when the hand moves up.
pub struct ScrollGesture {
    tracker: ContinuousTracker,
}

impl ScrollGesture {
    pub fn new(config: &ContinuousConfig) -> Self {
        Self {
            tracker: ContinuousTracker::new("SCROLL", Signal::CenterY, config),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.tracker.is_armed()
    }
}

impl Gesture for ScrollGesture {
    fn name(&self) -> &'static str {
        "SCROLL"
    }

    fn detect(&mut self, frame: &FrameData, _cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if frame.state != HandState::TwoFingers {
            self.tracker.reset();
            return Vec::new();
        }
        let Some(hand) = frame.primary_hand() else {
            return Vec::new();
        };

        // Image y grows downward; wheel amounts grow upward.
        self.tracker
            .update(hand, frame.primary_hand_raw(), frame.timestamp)
            .map(|steps| Trigger::with_magnitude(GestureEvent::Scroll, -steps))
            .into_iter()
            .collect()
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
