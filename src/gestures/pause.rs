//! Hold an open palm, then close it into a fist: toggles pause.
//!
//! ```text
//!   Idle ──PALM──▶ PalmHeld(t0) ──PALM ≥ min_time──▶ Armed(t0) ──FIST──▶ toggle
//!    ▲                 │                                │
//!    └──── any other pose (or FIST before arming) ──────┘
//! ```
//!
//! The paused flag and the last toggle time survive [`reset`](Gesture::reset).

use crate::config::PauseConfig;
use crate::domain::{FrameData, GestureEvent, HandState, Trigger};
use crate::gestures::Gesture;
use crate::stabilize::CooldownManager;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Phase {
    #[default]
    Idle,
    PalmHeld { since: f64 },
    Armed { since: f64 },
}

pub struct PauseResumeGesture {
    config: PauseConfig,
    phase: Phase,
    last_pose: Option<HandState>,
    paused: bool,
    last_toggle: Option<f64>,
}

impl PauseResumeGesture {
    pub fn new(config: &PauseConfig) -> Self {
        Self {
            config: config.clone(),
            phase: Phase::Idle,
            last_pose: None,
            paused: false,
            last_toggle: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn on_palm(&mut self, now: f64) {
        if self.last_pose != Some(HandState::Palm) {
            self.phase = Phase::PalmHeld { since: now };
            return;
        }
        if let Phase::PalmHeld { since } = self.phase {
            if now - since >= self.config.min_time {
                self.phase = Phase::Armed { since };
                log::debug!("PAUSE_RESUME: armed after {:.2}s palm", now - since);
            }
        }
    }

    fn on_fist(&mut self, now: f64, cooldowns: &mut CooldownManager) -> Option<Trigger> {
        let Phase::Armed { since } = self.phase else {
            self.reset();
            return None;
        };
        if self.last_pose != Some(HandState::Palm) || now - since > self.config.max_time {
            return None;
        }

        let local_ok = self
            .last_toggle
            .map_or(true, |last| now - last >= self.config.pause_cooldown);
        if !local_ok || !cooldowns.ok(self.name(), now) {
            return None;
        }

        self.paused = !self.paused;
        self.last_toggle = Some(now);
        self.reset();

        Some(Trigger::once(if self.paused {
            GestureEvent::PauseTogglePaused
        } else {
            GestureEvent::PauseToggleResumed
        }))
    }
}

impl Gesture for PauseResumeGesture {
    fn name(&self) -> &'static str {
        "PAUSE_RESUME"
    }

    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        let now = frame.timestamp;
        let out = match frame.state {
            HandState::Palm => {
                self.on_palm(now);
                None
            }
            HandState::Fist => self.on_fist(now, cooldowns),
            _ => {
                self.reset();
                None
            }
        };
        self.last_pose = Some(frame.state);
        out.into_iter().collect()
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.last_pose = None;
    }
}
