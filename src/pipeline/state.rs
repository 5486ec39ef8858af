//! Shared runtime state.
//!
//! [`AppState`] is a snapshot of what the runner is doing, for status output
//! and tests.  [`SharedState`] is `Arc<Mutex<AppState>>`: cheap to clone,
//! lock only for short critical sections and never across `.await`.

use std::sync::{Arc, Mutex};

use crate::domain::{GestureEvent, HandState};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Whether frames are being turned into actions.
    pub enabled: bool,
    /// Last stabilized pose (`NoHands` until the stabilizer warms up).
    pub stable_state: HandState,
    pub last_event: Option<GestureEvent>,
    pub frames_processed: u64,
    pub events_fired: u64,
}

impl AppState {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            stable_state: HandState::NoHands,
            last_event: None,
            frames_processed: 0,
            events_fired: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

pub type SharedState = Arc<Mutex<AppState>>;

pub fn new_shared_state(enabled: bool) -> SharedState {
    Arc::new(Mutex::new(AppState::new(enabled)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state() {
        let st = AppState::default();
        assert!(st.enabled);
        assert_eq!(st.stable_state, HandState::NoHands);
        assert_eq!(st.last_event, None);
        assert_eq!(st.frames_processed, 0);
    }

    #[test]
    fn shared_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedState>();
    }

    #[test]
    fn shared_state_clones_share_data() {
        let a = new_shared_state(false);
        let b = Arc::clone(&a);
        a.lock().unwrap().events_fired = 5;
        assert_eq!(b.lock().unwrap().events_fired, 5);
        assert!(!b.lock().unwrap().enabled);
    }
}
