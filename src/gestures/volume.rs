//! Three-finger vertical volume control.

use crate::config::ContinuousConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::continuous::{ContinuousTracker, Signal};
use crate::gestures::Gesture;
use crate::stabilize::CooldownManager;

/// Raising a `THREE_FINGERS` hand turns the volume up, lowering it turns it
/// down.  The magnitude is the number of key steps.
pub struct VolumeGesture {
    tracker: ContinuousTracker,
}

impl VolumeGesture {
    pub fn new(config: &ContinuousConfig) -> Self {
        Self {
            tracker: ContinuousTracker::new("VOLUME", Signal::CenterY, config),
        }
    }
}

impl Gesture for VolumeGesture {
    fn name(&self) -> &'static str {
        "VOLUME"
    }

    fn detect(&mut self, frame: &FrameData, _cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if frame.state != HandState::ThreeFingers {
            self.tracker.reset();
            return Vec::new();
        }
        let Some(hand) = frame.primary_hand() else {
            return Vec::new();
        };

        let Some(steps) = self
            .tracker
            .update(hand, frame.primary_hand_raw(), frame.timestamp)
        else {
            return Vec::new();
        };
        let event = if steps < 0 {
            GestureEvent::VolumeUp
        } else {
            GestureEvent::VolumeDown
        };
        vec![Trigger::with_magnitude(event, steps.abs())]
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
