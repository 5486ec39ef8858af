//! Palm push toward the screen: the hand's apparent scale shrinks quickly.

use crate::config::ScreenshotConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger, MIDDLE_MCP, WRIST};
use crate::gestures::Gesture;
use crate::landmarks::distance;
use crate::stabilize::CooldownManager;

pub struct ScreenshotGesture {
    config: ScreenshotConfig,
    prev_scale: Option<f64>,
}

impl ScreenshotGesture {
    pub fn new(config: &ScreenshotConfig) -> Self {
        Self {
            config: config.clone(),
            prev_scale: None,
        }
    }
}

impl Gesture for ScreenshotGesture {
    fn name(&self) -> &'static str {
        "SCREENSHOT"
    }

    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if frame.state != HandState::Palm {
            self.reset();
            return Vec::new();
        }
        let Some(hand) = frame.primary_hand() else {
            return Vec::new();
        };

        let scale = distance(hand[WRIST], hand[MIDDLE_MCP]);
        let fired = match self.prev_scale.replace(scale) {
            Some(prev) => {
                prev - scale > self.config.min_scale_drop
                    && cooldowns.ok(self.name(), frame.timestamp)
            }
            None => false,
        };

        if fired {
            vec![Trigger::once(GestureEvent::Screenshot)]
        } else {
            Vec::new()
        }
    }

    fn reset(&mut self) {
        self.prev_scale = None;
    }
}
