//! PALM → FIST → PALM within a short window toggles mute.

use std::collections::VecDeque;

use crate::config::MuteConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::Gesture;
use crate::stabilize::CooldownManager;

const PATTERN: [HandState; 3] = [HandState::Palm, HandState::Fist, HandState::Palm];

/// Watches the last three pose transitions.
///
/// Consecutive frames with the same pose collapse into one entry that keeps
/// the time the pose first appeared.
pub struct MuteToggleGesture {
    config: MuteConfig,
    history: VecDeque<(HandState, f64)>,
}

impl MuteToggleGesture {
    pub fn new(config: &MuteConfig) -> Self {
        Self {
            config: config.clone(),
            history: VecDeque::with_capacity(PATTERN.len()),
        }
    }

    fn matches(&self) -> bool {
        self.history.len() == PATTERN.len()
            && self.history.iter().zip(PATTERN).all(|(&(s, _), p)| s == p)
    }
}

impl Gesture for MuteToggleGesture {
    fn name(&self) -> &'static str {
        "MUTE_TOGGLE"
    }

    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        if self.history.back().map(|&(s, _)| s) == Some(frame.state) {
            return Vec::new();
        }
        self.history.push_back((frame.state, frame.timestamp));
        if self.history.len() > PATTERN.len() {
            self.history.pop_front();
        }

        if !self.matches() {
            return Vec::new();
        }
        let (first, last) = match (self.history.front(), self.history.back()) {
            (Some(&(_, a)), Some(&(_, b))) => (a, b),
            _ => return Vec::new(),
        };
        if last - first < self.config.max_time && cooldowns.ok(self.name(), frame.timestamp) {
            self.history.clear();
            return vec![Trigger::once(GestureEvent::MuteToggle)];
        }
        Vec::new()
    }

    fn reset(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::fixtures::pose;
    use crate::domain::HandState::{Fist, Palm};

    fn feed(g: &mut MuteToggleGesture, seq: &[(HandState, f64)]) -> Vec<Trigger> {
        let mut cd = CooldownManager::default();
        seq.iter()
            .flat_map(|&(s, t)| g.detect(&pose(s, t), &mut cd))
            .collect()
    }

    #[test]
    fn quick_sequence_mutes() {
        let mut g = MuteToggleGesture::new(&MuteConfig::default());
        let out = feed(&mut g, &[(Palm, 0.0), (Fist, 0.3), (Palm, 0.5)]);
        assert_eq!(out, vec![Trigger::once(GestureEvent::MuteToggle)]);
    }

    #[test]
    fn slow_sequence_does_not_mute() {
        let mut g = MuteToggleGesture::new(&MuteConfig::default());
        assert!(feed(&mut g, &[(Palm, 0.0), (Fist, 0.3), (Palm, 1.3)]).is_empty());
    }

    #[test]
    fn held_poses_collapse_into_transitions() {
        let mut g = MuteToggleGesture::new(&MuteConfig::default());
        let seq = [
            (Palm, 0.0),
            (Palm, 0.03),
            (Palm, 0.06),
            (Fist, 0.09),
            (Fist, 0.12),
            (Palm, 0.15),
        ];
        assert_eq!(feed(&mut g, &seq).len(), 1);
    }

    #[test]
    fn wrong_order_does_not_mute() {
        let mut g = MuteToggleGesture::new(&MuteConfig::default());
        assert!(feed(&mut g, &[(Fist, 0.0), (Palm, 0.1), (Fist, 0.2)]).is_empty());
    }

    #[test]
    fn history_clears_after_firing() {
        let mut g = MuteToggleGesture::new(&MuteConfig::default());
        let out = feed(
            &mut g,
            &[(Palm, 0.0), (Fist, 0.1), (Palm, 0.2), (Fist, 0.3), (Palm, 0.4)],
        );
        // The trailing FIST, PALM alone is not a full pattern.
        assert_eq!(out.len(), 1);
    }
}
