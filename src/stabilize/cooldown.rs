//! Per-event-name rate limiter.
//!
//! [`CooldownManager`] is the single mechanism that prevents event flooding:
//! every discrete and transition gesture passes through [`ok`](CooldownManager::ok)
//! before it emits.  Time is supplied by the caller (the frame timestamp) so
//! the limiter is deterministic under replay.

use std::collections::HashMap;

use crate::config::CooldownConfig;

/// Tracks the last accepted time of each named event.
///
/// # Example
///
/// ```rust
/// use hand_gesture_control::stabilize::CooldownManager;
///
/// let mut cm = CooldownManager::new(0.6);
/// assert!(cm.ok("X", 0.0));
/// assert!(!cm.ok("X", 0.3));
/// assert!(cm.ok("X", 0.7));
/// ```
#[derive(Debug, Clone)]
pub struct CooldownManager {
    default_cooldown: f64,
    last: HashMap<String, f64>,
}

impl CooldownManager {
    /// Create a manager whose [`ok`](Self::ok) uses `default_cooldown` seconds.
    pub fn new(default_cooldown: f64) -> Self {
        Self {
            default_cooldown,
            last: HashMap::new(),
        }
    }

    pub fn from_config(config: &CooldownConfig) -> Self {
        Self::new(config.default_cooldown)
    }

    /// Default cooldown in seconds.
    pub fn default_cooldown(&self) -> f64 {
        self.default_cooldown
    }

    /// Accept `name` at `now` if the default cooldown has elapsed.
    pub fn ok(&mut self, name: &str, now: f64) -> bool {
        self.ok_with(name, self.default_cooldown, now)
    }

    /// Accept `name` at `now` if strictly more than `cooldown` seconds have
    /// passed since the last accepted call.  A name that has never fired is
    /// always accepted.
    ///
    /// On acceptance `now` is recorded; on rejection nothing changes.
    pub fn ok_with(&mut self, name: &str, cooldown: f64, now: f64) -> bool {
        let ready = match self.last.get(name) {
            Some(&last) => now - last > cooldown,
            None => true,
        };
        if ready {
            self.last.insert(name.to_owned(), now);
        }
        ready
    }

    /// Forget one entry so the next [`ok`](Self::ok) for it succeeds.
    pub fn reset(&mut self, name: &str) {
        self.last.remove(name);
    }

    pub fn reset_all(&mut self) {
        self.last.clear();
    }

    /// Last accepted time for `name`, if any.
    pub fn last_fired(&self, name: &str) -> Option<f64> {
        self.last.get(name).copied()
    }
}

impl Default for CooldownManager {
    fn default() -> Self {
        Self::from_config(&CooldownConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
