//! Arm-then-track engine shared by the scroll, volume and zoom gestures.
//!
//! ```text
//!  pose gate (caller) ──▶ smoothing ──▶ pre-arm outlier check ──▶ depth intent
//!        ──▶ arming delay ──▶ active tracking ──▶ signed step count
//! ```
//!
//! Smoothed values are only used to validate samples before arming; once
//! armed, the control signal is computed from the raw per-frame delta so the
//! gesture stays responsive.

use std::collections::VecDeque;

use crate::config::ContinuousConfig;
use crate::domain::{Hand2D, Hand3D, Point2, INDEX_TIP, THUMB_TIP};
use crate::landmarks::{distance, hand_center, hand_size, relative_depth};

/// Which hand measurement drives the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Vertical position of the hand centroid.
    CenterY,
    /// Thumb-tip to index-tip distance.
    PinchDistance,
}

#[derive(Debug, Default)]
struct TrackerState {
    armed: bool,
    arm_start: Option<f64>,
    anchor: f64,
    prev_value: Option<f64>,
    ref_size: Option<f64>,

    smoothed_center: Option<Point2>,
    smoothed_size: Option<f64>,
    smoothed_pinch: Option<f64>,
    last_valid_center: Option<Point2>,
    last_valid_size: Option<f64>,
    last_valid_pinch: Option<f64>,
    outliers: u32,

    intent: bool,

    deltas: VecDeque<f64>,
    last_motion: f64,
    /// `(value, time)` at the start of the current stillness window.
    window_ref: Option<(f64, f64)>,
}

/// One continuous gesture's tracking state.
pub struct ContinuousTracker {
    name: &'static str,
    signal: Signal,
    config: ContinuousConfig,
    state: TrackerState,
}

impl ContinuousTracker {
    pub fn new(name: &'static str, signal: Signal, config: &ContinuousConfig) -> Self {
        let mut config = config.clone();
        config.temporal_frames = config.temporal_frames.max(1);
        Self {
            name,
            signal,
            config,
            state: TrackerState::default(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.state.armed
    }

    /// Time the current arming attempt started, if one is in progress.
    pub fn arming_since(&self) -> Option<f64> {
        self.state.arm_start
    }

    pub fn intent_engaged(&self) -> bool {
        self.state.intent
    }

    /// Number of deltas waiting in the averaging buffer.
    pub fn buffered(&self) -> usize {
        self.state.deltas.len()
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::default();
    }

    /// Feed one frame for a hand already known to hold the right pose.
    ///
    /// Returns a signed step count when the frame produces output.  The sign
    /// follows the signal: positive when the centroid moves down / the pinch
    /// opens.
    pub fn update(&mut self, hand: &Hand2D, raw: Option<&Hand3D>, now: f64) -> Option<i32> {
        let center = hand_center(hand);
        let pinch = distance(hand[THUMB_TIP], hand[INDEX_TIP]);
        let value = match self.signal {
            Signal::CenterY => center.y,
            Signal::PinchDistance => pinch,
        };

        self.smooth(center, pinch, raw.map(|r| hand_size(r)));

        if !self.state.armed && !self.accept_sample() {
            return None;
        }

        if let Some(raw) = raw {
            if self.config.require_depth_intent && !self.intent_ok(relative_depth(raw)) {
                self.reset();
                return None;
            }
        }

        if !self.state.armed {
            match self.state.arm_start {
                None => {
                    self.state.arm_start = Some(now);
                    self.state.anchor = value;
                    self.state.prev_value = Some(value);
                    self.state.ref_size = self.state.smoothed_size;
                    return None;
                }
                Some(start) if now - start < self.config.arm_time => {
                    self.state.prev_value = Some(value);
                    return None;
                }
                Some(_) => {
                    self.state.armed = true;
                    self.state.last_motion = now;
                    log::debug!("{}: armed at {:.3}", self.name, self.state.anchor);
                }
            }
        }

        let out = self.track(value, now);
        self.state.prev_value = Some(value);
        out
    }

    fn smooth(&mut self, center: Point2, pinch: f64, size: Option<f64>) {
        let cfg = &self.config;
        let st = &mut self.state;

        st.smoothed_size = match (st.smoothed_size, size) {
            (Some(prev), Some(cur)) => Some(ema(cfg.size_alpha, cur, prev)),
            (None, cur) => cur,
            (prev, None) => prev,
        };
        st.smoothed_center = Some(match st.smoothed_center {
            Some(prev) => Point2::new(
                ema(cfg.position_alpha, center.x, prev.x),
                ema(cfg.position_alpha, center.y, prev.y),
            ),
            None => center,
        });
        st.smoothed_pinch = Some(match st.smoothed_pinch {
            Some(prev) => ema(cfg.pinch_alpha, pinch, prev),
            None => pinch,
        });
    }

    /// Pre-arm validation of the smoothed sample against the last valid one.
    fn accept_sample(&mut self) -> bool {
        let cfg = &self.config;
        let st = &self.state;

        let valid = match st.last_valid_center {
            None => true,
            Some(last) => {
                let center_ok = st
                    .smoothed_center
                    .map_or(true, |c| (c.y - last.y).abs() <= cfg.max_position_jump);
                let size_ok = match (st.smoothed_size, st.last_valid_size) {
                    (Some(s), Some(ls)) if ls > 0.0 => (s - ls).abs() / ls <= cfg.max_size_change,
                    _ => true,
                };
                let pinch_ok = self.signal != Signal::PinchDistance
                    || match (st.smoothed_pinch, st.last_valid_pinch) {
                        (Some(p), Some(lp)) => (p - lp).abs() <= cfg.max_pinch_jump,
                        _ => true,
                    };
                center_ok && size_ok && pinch_ok
            }
        };

        if !valid {
            self.state.outliers += 1;
            if self.state.outliers > self.config.outlier_recovery_frames {
                log::debug!("{}: too many outliers, resetting", self.name);
                self.reset();
            }
            return false;
        }

        let st = &mut self.state;
        st.outliers = 0;
        st.last_valid_center = st.smoothed_center;
        st.last_valid_size = st.smoothed_size;
        st.last_valid_pinch = st.smoothed_pinch;
        true
    }

    /// Depth hysteresis: engage below `intent_enter`, release above `intent_exit`.
    fn intent_ok(&mut self, depth: f64) -> bool {
        let st = &mut self.state;
        if !st.intent {
            if depth < self.config.intent_enter {
                st.intent = true;
            }
        } else if depth > self.config.intent_exit {
            st.intent = false;
            log::debug!("{}: depth intent released ({depth:.3})", self.name);
        }
        st.intent
    }

    fn track(&mut self, value: f64, now: f64) -> Option<i32> {
        let prev = self.state.prev_value?;
        let cfg = &self.config;

        let mut delta = value - prev;
        if cfg.size_compensation {
            if let (Some(reference), Some(current)) = (self.state.ref_size, self.state.smoothed_size) {
                delta *= size_ratio(reference, current, cfg);
            }
        }
        if delta.abs() < cfg.velocity_deadzone {
            delta = 0.0;
        }

        // Stillness (a): no real motion for `stillness_timeout`.
        if delta.abs() > cfg.motion_threshold {
            self.state.last_motion = now;
        } else if now - self.state.last_motion > cfg.stillness_timeout {
            self.flush();
            return None;
        }

        // Stillness (b): total displacement over a fixed window.
        match self.state.window_ref {
            None => self.state.window_ref = Some((value, now)),
            Some((ref_value, ref_time)) if now - ref_time >= cfg.stillness_window => {
                if (value - ref_value).abs() < cfg.motion_threshold {
                    self.flush();
                    return None;
                }
                self.state.window_ref = Some((value, now));
            }
            Some(_) => {}
        }

        if delta == 0.0 {
            return None;
        }

        let deltas = &mut self.state.deltas;
        deltas.push_back(delta);
        if deltas.len() > cfg.temporal_frames {
            deltas.pop_front();
        }
        if deltas.len() < cfg.temporal_frames {
            return None;
        }

        let average = deltas.iter().sum::<f64>() / deltas.len() as f64;
        let gain = cfg.base_gain + cfg.accel_factor * (value - self.state.anchor).abs();
        let steps = (average * gain).trunc();
        if steps.abs() < f64::from(cfg.min_step) {
            return None;
        }
        let max = f64::from(cfg.max_step);
        Some(steps.clamp(-max, max) as i32)
    }

    fn flush(&mut self) {
        if !self.state.deltas.is_empty() {
            log::debug!("{}: hand still, flushing {} deltas", self.name, self.state.deltas.len());
            self.state.deltas.clear();
        }
    }
}

fn ema(alpha: f64, current: f64, previous: f64) -> f64 {
    alpha * current + (1.0 - alpha) * previous
}

/// Distance-to-camera compensation factor.
fn size_ratio(reference: f64, current: f64, cfg: &ContinuousConfig) -> f64 {
    if reference <= 0.0 || current <= 0.0 {
        return 1.0;
    }
    (reference / current).clamp(cfg.size_ratio_min, cfg.size_ratio_max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::fixtures::{hand, hand_at, pushed, raw_hand, resting, DT};

    fn scroll_tracker() -> ContinuousTracker {
        ContinuousTracker::new("test", Signal::CenterY, &ContinuousConfig::scroll())
    }

    // ---- Size compensation -------------------------------------------------

    #[test]
    fn ratio_is_clamped() {
        let cfg = ContinuousConfig::scroll();
        assert_eq!(size_ratio(0.3, 0.3, &cfg), 1.0);
        assert_eq!(size_ratio(0.3, 0.1, &cfg), 1.4);
        assert_eq!(size_ratio(0.1, 0.3, &cfg), 0.7);
        assert_eq!(size_ratio(0.0, 0.3, &cfg), 1.0);
    }

    // ---- Pre-arm validation ------------------------------------------------

    #[test]
    fn repeated_outliers_reset_arming() {
        let mut t = scroll_tracker();
        let raw = pushed();

        assert_eq!(t.update(&hand_at(0.3), Some(&raw), 0.0), None);
        assert_eq!(t.arming_since(), Some(0.0));

        // Three large jumps in a row exceed outlier_recovery_frames (2).
        for i in 1..=3 {
            assert_eq!(t.update(&hand_at(0.9), Some(&raw), i as f64 * DT), None);
        }
        assert_eq!(t.arming_since(), None);

        // Next frame starts a fresh attempt.
        let t4 = 4.0 * DT;
        t.update(&hand_at(0.9), Some(&raw), t4);
        assert_eq!(t.arming_since(), Some(t4));
    }

    #[test]
    fn single_outlier_is_tolerated() {
        let mut t = scroll_tracker();
        let raw = pushed();
        t.update(&hand_at(0.3), Some(&raw), 0.0);
        t.update(&hand_at(0.9), Some(&raw), DT);
        t.update(&hand_at(0.3), Some(&raw), 2.0 * DT);
        assert_eq!(t.arming_since(), Some(0.0));
    }

    #[test]
    fn pinch_jump_is_an_outlier_for_pinch_signal_only() {
        let cfg = ContinuousConfig::zoom();
        let raw = pushed();

        let mut zoom = ContinuousTracker::new("zoom", Signal::PinchDistance, &cfg);
        let mut scroll = ContinuousTracker::new("scroll", Signal::CenterY, &cfg);
        for (i, pinch) in [0.5, 1.5, 1.5, 1.5].into_iter().enumerate() {
            let h = hand(0.5, 0.5, pinch, 1.0);
            zoom.update(&h, Some(&raw), i as f64 * DT);
            scroll.update(&h, Some(&raw), i as f64 * DT);
        }
        assert_eq!(zoom.arming_since(), None);
        assert_eq!(scroll.arming_since(), Some(0.0));
    }

    // ---- Depth intent ------------------------------------------------------

    #[test]
    fn resting_hand_never_arms() {
        let mut t = scroll_tracker();
        let raw = resting();
        for i in 0..40 {
            let y = 0.3 + 0.02 * i as f64;
            assert_eq!(t.update(&hand_at(y), Some(&raw), i as f64 * DT), None);
            assert!(!t.is_armed());
        }
    }

    #[test]
    fn intent_has_hysteresis() {
        let mut t = scroll_tracker();
        let h = hand_at(0.5);

        t.update(&h, Some(&raw_hand(0.3, -0.05)), 0.0);
        assert!(t.intent_engaged());

        // Between exit and enter: stays engaged.
        t.update(&h, Some(&raw_hand(0.3, -0.02)), DT);
        assert!(t.intent_engaged());

        // Past exit: released and fully reset.
        t.update(&h, Some(&raw_hand(0.3, 0.0)), 2.0 * DT);
        assert!(!t.intent_engaged());
        assert_eq!(t.arming_since(), None);
    }

    #[test]
    fn missing_raw_skips_depth_gate() {
        let mut t = scroll_tracker();
        t.update(&hand_at(0.5), None, 0.0);
        assert_eq!(t.arming_since(), Some(0.0));
    }

    // ---- Arming ------------------------------------------------------------

    #[test]
    fn no_output_while_arming_even_with_large_motion() {
        let mut cfg = ContinuousConfig::scroll();
        cfg.arm_time = 1.0;
        let mut t = ContinuousTracker::new("test", Signal::CenterY, &cfg);
        let raw = pushed();

        for i in 0..30 {
            let y = 0.1 + 0.05 * i as f64;
            assert_eq!(t.update(&hand_at(y), Some(&raw), i as f64 * DT), None);
        }
        assert!(!t.is_armed());
    }

    // ---- Tracking ----------------------------------------------------------

    #[test]
    fn steady_motion_produces_clamped_steps() {
        let mut cfg = ContinuousConfig::volume();
        cfg.max_step = 3;
        let mut t = ContinuousTracker::new("test", Signal::CenterY, &cfg);
        let raw = pushed();

        let mut outputs = Vec::new();
        for i in 0..25 {
            let y = 0.3 + 0.02 * i as f64;
            if let Some(steps) = t.update(&hand_at(y), Some(&raw), i as f64 * DT) {
                outputs.push(steps);
            }
        }
        assert!(t.is_armed());
        assert!(!outputs.is_empty());
        assert!(outputs.iter().all(|&s| (1..=3).contains(&s)));
        assert_eq!(outputs.last(), Some(&3));
    }

    #[test]
    fn zero_temporal_frames_averages_one_delta() {
        let mut cfg = ContinuousConfig::volume();
        cfg.temporal_frames = 0;
        let mut t = ContinuousTracker::new("test", Signal::CenterY, &cfg);
        let raw = pushed();

        let outputs: Vec<i32> = (0..20)
            .filter_map(|i| t.update(&hand_at(0.3 + 0.02 * i as f64), Some(&raw), i as f64 * DT))
            .collect();
        assert!(!outputs.is_empty());
        assert!(outputs.iter().all(|&s| s > 0 && s <= cfg.max_step));
    }

    #[test]
    fn needs_full_buffer_before_output() {
        let mut t = scroll_tracker();
        let raw = pushed();

        // Hold still through arming.
        let mut i = 0;
        while !t.is_armed() {
            t.update(&hand_at(0.3), Some(&raw), i as f64 * DT);
            i += 1;
        }

        // First two moving frames only fill the buffer.
        let mut y = 0.3;
        for _ in 0..2 {
            y += 0.02;
            assert_eq!(t.update(&hand_at(y), Some(&raw), i as f64 * DT), None);
            i += 1;
        }
        y += 0.02;
        assert!(t.update(&hand_at(y), Some(&raw), i as f64 * DT).is_some());
    }

    #[test]
    fn stillness_flushes_stale_momentum() {
        let mut t = scroll_tracker();
        let raw = pushed();

        let mut y = 0.3;
        let mut fired = false;
        for i in 0..16 {
            y = 0.3 + 0.02 * i as f64;
            fired |= t.update(&hand_at(y), Some(&raw), i as f64 * DT).is_some();
        }
        assert!(fired, "moving hand should have produced output");

        // Hold still for 0.3 s, past the stillness timeout.
        for i in 16..26 {
            assert_eq!(t.update(&hand_at(y), Some(&raw), i as f64 * DT), None);
        }
        assert_eq!(t.buffered(), 0);

        // Resumed motion must rebuild the buffer from scratch.
        y += 0.02;
        assert_eq!(t.update(&hand_at(y), Some(&raw), 26.0 * DT), None);
        y += 0.02;
        assert_eq!(t.update(&hand_at(y), Some(&raw), 27.0 * DT), None);
        y += 0.02;
        assert!(t.update(&hand_at(y), Some(&raw), 28.0 * DT).is_some());
    }

    #[test]
    fn oscillation_in_place_is_flushed_by_the_window() {
        let mut cfg = ContinuousConfig::scroll();
        cfg.stillness_timeout = 10.0;
        let mut t = ContinuousTracker::new("test", Signal::CenterY, &cfg);
        let raw = pushed();

        // Every frame moves 0.02, well above motion_threshold, but the hand
        // ends each window where it started.
        let mut flushed = 0;
        for i in 0..40 {
            let y = if i % 2 == 0 { 0.5 } else { 0.52 };
            t.update(&hand_at(y), Some(&raw), i as f64 * DT);
            if t.is_armed() && t.buffered() == 0 {
                flushed += 1;
            }
        }
        assert!(t.is_armed());
        assert!(flushed >= 2, "window flushed {flushed} times");
    }

    #[test]
    fn micro_jitter_is_ignored() {
        let mut t = scroll_tracker();
        let raw = pushed();
        for i in 0..40 {
            let y = if i % 2 == 0 { 0.5 } else { 0.501 };
            assert_eq!(t.update(&hand_at(y), Some(&raw), i as f64 * DT), None);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut t = scroll_tracker();
        let raw = pushed();
        for i in 0..20 {
            t.update(&hand_at(0.3 + 0.02 * i as f64), Some(&raw), i as f64 * DT);
        }
        assert!(t.is_armed());
        t.reset();
        assert!(!t.is_armed());
        assert!(!t.intent_engaged());
        assert_eq!(t.arming_since(), None);
        assert_eq!(t.buffered(), 0);
    }
}
