//! Pinch zoom: opening the thumb/index pinch zooms in, closing it zooms out.

use crate::config::ContinuousConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::continuous::{ContinuousTracker, Signal};
use crate::gestures::Gesture;
use crate::stabilize::CooldownManager;

pub struct ZoomGesture {
    tracker: ContinuousTracker,
}

impl ZoomGesture {
    pub fn new(config: &ContinuousConfig) -> Self {
        Self {
            tracker: ContinuousTracker::new("ZOOM", Signal::PinchDistance, config),
        }
    }
}

impl Gesture for ZoomGesture {
    fn name(&self) -> &'static str {
        "ZOOM"
    }

    fn detect(&mut self, frame: &FrameData, _cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if frame.state != HandState::Pinch {
            self.tracker.reset();
            return Vec::new();
        }
        let Some(hand) = frame.primary_hand() else {
            return Vec::new();
        };

        match self.tracker.update(hand, frame.primary_hand_raw(), frame.timestamp) {
            Some(steps) if steps > 0 => vec![Trigger::with_magnitude(GestureEvent::ZoomIn, steps)],
            Some(steps) => vec![Trigger::with_magnitude(GestureEvent::ZoomOut, -steps)],
            None => Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.tracker.reset();
    }
}
