//! Two open palms brought toward each other: opens the task switcher.
//!
//! The inter-hand distance is smoothed and the hands must be stable for a
//! few frames before arming.  Once armed, only closing motion is
//! accumulated; separating the hands never counts against it.

use crate::config::TaskViewConfig;
use crate::domain::{FrameData, GestureEvent, HandSide, HandState, Point2, Trigger};
use crate::gestures::Gesture;
use crate::landmarks::{distance, hand_center};
use crate::stabilize::CooldownManager;

#[derive(Debug, Default)]
struct ApproachState {
    smoothed: Option<f64>,
    last_left: Option<Point2>,
    last_right: Option<Point2>,
    stable_frames: u32,
    outliers: u32,

    arm_start: Option<f64>,
    armed: bool,
    initial: f64,
    prev: f64,
    total: f64,
}

pub struct TaskViewGesture {
    config: TaskViewConfig,
    state: ApproachState,
    /// Survives resets.
    last_activation: Option<f64>,
}

impl TaskViewGesture {
    pub fn new(config: &TaskViewConfig) -> Self {
        Self {
            config: config.clone(),
            state: ApproachState::default(),
            last_activation: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed
    }

    /// Closing distance accumulated since arming.
    pub fn accumulated(&self) -> f64 {
        self.state.total
    }

    /// Pre-arm stability check.  Returns `false` when the frame is rejected.
    fn stable(&mut self, left: Point2, right: Point2) -> bool {
        let cfg = &self.config;
        let st = &mut self.state;

        let jumped = match (st.last_left, st.last_right) {
            (Some(l), Some(r)) => {
                distance(l, left) > cfg.max_position_jump || distance(r, right) > cfg.max_position_jump
            }
            _ => false,
        };
        if jumped {
            st.stable_frames = 0;
            st.outliers += 1;
            if st.outliers > cfg.outlier_recovery_frames {
                log::debug!("TASK_VIEW: hands unstable, resetting");
                self.reset();
            }
            return false;
        }

        st.outliers = 0;
        st.stable_frames += 1;
        st.last_left = Some(left);
        st.last_right = Some(right);
        true
    }
}

impl Gesture for TaskViewGesture {
    fn name(&self) -> &'static str {
        "TASK_VIEW"
    }

    fn detect(&mut self, frame: &FrameData, cooldowns: &mut CooldownManager) -> Vec<Trigger> {
        let hands = (frame.hands.get(&HandSide::Left), frame.hands.get(&HandSide::Right));
        let (Some(left), Some(right)) = hands else {
            self.reset();
            return Vec::new();
        };
        if frame.state != HandState::Palm {
            self.reset();
            return Vec::new();
        }

        let now = frame.timestamp;
        let left = hand_center(left);
        let right = hand_center(right);
        let raw = distance(left, right);
        let alpha = self.config.distance_alpha;
        let dist = match self.state.smoothed {
            Some(prev) => alpha * raw + (1.0 - alpha) * prev,
            None => raw,
        };
        self.state.smoothed = Some(dist);

        if !self.state.armed {
            if !self.stable(left, right) || self.state.stable_frames < self.config.stability_frames {
                return Vec::new();
            }
            match self.state.arm_start {
                None => {
                    if dist < self.config.min_initial_distance {
                        log::debug!("TASK_VIEW: hands too close to start ({dist:.3})");
                        self.reset();
                        return Vec::new();
                    }
                    self.state.arm_start = Some(now);
                    self.state.initial = dist;
                    self.state.prev = dist;
                    return Vec::new();
                }
                Some(start) if now - start < self.config.arm_time => {
                    self.state.prev = dist;
                    return Vec::new();
                }
                Some(_) => {
                    self.state.armed = true;
                    log::debug!("TASK_VIEW: armed at distance {:.3}", self.state.initial);
                }
            }
        }

        let closing = self.state.prev - dist;
        self.state.prev = dist;
        if closing > self.config.max_approach_speed {
            return Vec::new();
        }
        if closing > 0.0 {
            self.state.total += closing;
        }
        if self.state.total < self.config.min_approach {
            return Vec::new();
        }

        let local_ok = self
            .last_activation
            .map_or(true, |last| now - last >= self.config.cooldown);
        if local_ok && cooldowns.ok(self.name(), now) {
            self.last_activation = Some(now);
            self.reset();
            return vec![Trigger::once(GestureEvent::TaskView)];
        }
        Vec::new()
    }

    fn reset(&mut self) {
        self.state = ApproachState::default();
    }
}
