//! Fist swiped sharply downward.

use crate::config::CloseWindowConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::Gesture;
use crate::landmarks::hand_center;
use crate::stabilize::CooldownManager;

pub struct CloseWindowGesture {
    config: CloseWindowConfig,
    prev_y: Option<f64>,
}

impl CloseWindowGesture {
    pub fn new(config: &CloseWindowConfig) -> Self {
        Self {
            config: config.clone(),
            prev_y: None,
        }
    }
}

impl Gesture for CloseWindowGesture {
    fn name(&self) -> &'static str {
        "CLOSE_WINDOW"
    }

    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if frame.state != HandState::Fist {
            self.reset();
            return Vec::new();
        }
        let Some(hand) = frame.primary_hand() else {
            return Vec::new();
        };

        let y = hand_center(hand).y;
        let fired = self.prev_y.replace(y).is_some_and(|prev| {
            y - prev > self.config.min_drop && cooldowns.ok(self.name(), frame.timestamp)
        });

        if fired {
            vec![Trigger::once(GestureEvent::CloseWindow)]
        } else {
            Vec::new()
        }
    }

    fn reset(&mut self) {
        self.prev_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::fixtures::{frame, hand_at};

    fn fist(t: f64, y: f64) -> FrameData {
        frame(HandState::Fist, t, hand_at(y), None)
    }

    #[test]
    fn fast_drop_fires_once() {
        let mut g = CloseWindowGesture::new(&CloseWindowConfig::default());
        let mut cd = CooldownManager::default();
        assert!(g.detect(&fist(0.0, 0.3), &mut cd).is_empty());
        assert_eq!(
            g.detect(&fist(0.03, 0.45), &mut cd),
            vec![Trigger::once(GestureEvent::CloseWindow)]
        );
        // Still within the shared cooldown.
        assert!(g.detect(&fist(0.06, 0.6), &mut cd).is_empty());
    }

    #[test]
    fn slow_or_upward_motion_is_ignored() {
        let mut g = CloseWindowGesture::new(&CloseWindowConfig::default());
        let mut cd = CooldownManager::default();
        for (i, y) in [0.3, 0.35, 0.4, 0.1].into_iter().enumerate() {
            assert!(g.detect(&fist(i as f64 * 0.03, y), &mut cd).is_empty());
        }
    }

    #[test]
    fn open_hand_does_not_fire() {
        let mut g = CloseWindowGesture::new(&CloseWindowConfig::default());
        let mut cd = CooldownManager::default();
        g.detect(&frame(HandState::Palm, 0.0, hand_at(0.3), None), &mut cd);
        assert!(g
            .detect(&frame(HandState::Palm, 0.03, hand_at(0.6), None), &mut cd)
            .is_empty());
    }
}
