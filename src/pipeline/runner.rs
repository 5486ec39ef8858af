//! [`GestureRunner`]: stabilizes raw classifier labels and routes frames
//! through the [`GestureManager`].
//!
//! ```text
//! FrameRecord ─▶ enabled? ─▶ (label, conf) or (NO_HANDS, 1.0)
//!             ─▶ StateStabilizer ─▶ stable pose
//!             ─▶ NO_HANDS / UNKNOWN? skip
//!             ─▶ FrameData ─▶ GestureManager::process ─▶ Vec<Trigger>
//! ```

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::config::GestureConfig;
use crate::domain::{FrameData, HandState, Trigger};
use crate::gestures::GestureManager;
use crate::hotkey::HotkeyEvent;
use crate::source::{FrameRecord, SourceEvent};
use crate::stabilize::StateStabilizer;

use super::state::SharedState;

pub struct GestureRunner {
    state: SharedState,
    stabilizer: StateStabilizer,
    manager: GestureManager,
    enabled: bool,
    hands_present: bool,
    stable: HandState,
}

impl GestureRunner {
    /// Build a runner; the initial enabled flag is read from `state`.
    pub fn new(config: &GestureConfig, state: SharedState) -> Self {
        let enabled = state.lock().map(|st| st.enabled).unwrap_or(true);
        Self {
            state,
            stabilizer: StateStabilizer::from_config(&config.stabilizer),
            manager: GestureManager::new(config),
            enabled,
            hands_present: false,
            stable: HandState::NoHands,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_paused(&self) -> bool {
        self.manager.is_paused()
    }

    /// Enable or disable gesture control.  Disabling drops all stabilizer
    /// and detector progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.stabilizer.reset();
            self.manager.reset_all();
            self.stable = HandState::NoHands;
        }
        self.update_state(|st| {
            st.enabled = enabled;
            st.stable_state = HandState::NoHands;
        });
        log::info!("pipeline: gesture control {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Process one input record synchronously.
    pub fn process_record(&mut self, record: &FrameRecord) -> Vec<Trigger> {
        self.update_state(|st| st.frames_processed += 1);
        if !self.enabled {
            return Vec::new();
        }

        let has_hands = record.has_hands();
        let (label, confidence) = if has_hands {
            (record.label, record.confidence)
        } else {
            (HandState::NoHands, 1.0)
        };
        self.stabilizer.update(label, confidence);
        let stable = self.stabilizer.current().unwrap_or(HandState::NoHands);

        if stable != self.stable {
            log::info!("pipeline: state {} -> {}", self.stable, stable);
            self.stable = stable;
            self.update_state(|st| st.stable_state = stable);
        }

        if !has_hands && self.hands_present {
            log::debug!("pipeline: hands left the frame");
            self.manager.reset_all();
        }
        self.hands_present = has_hands;

        if !stable.is_trackable() {
            return Vec::new();
        }

        let frame = FrameData {
            state: stable,
            hands: record.hands.clone(),
            hands_raw: record.hands_raw.clone(),
            timestamp: record.timestamp,
        };
        let triggers = self.manager.process(&frame);
        if let Some(last) = triggers.last() {
            let fired = triggers.len() as u64;
            let event = last.event;
            self.update_state(|st| {
                st.events_fired += fired;
                st.last_event = Some(event);
            });
        }
        triggers
    }

    /// Drive the runner until the frame source finishes.
    ///
    /// Hotkey events are polled first so a toggle takes effect before any
    /// frame queued behind it.
    pub async fn run(
        mut self,
        mut frames_rx: mpsc::Receiver<SourceEvent>,
        mut hotkey_rx: mpsc::Receiver<HotkeyEvent>,
        action_tx: std_mpsc::Sender<Trigger>,
    ) {
        loop {
            tokio::select! {
                biased;

                Some(event) = hotkey_rx.recv() => match event {
                    HotkeyEvent::ToggleEnabled => self.set_enabled(!self.enabled),
                },

                event = frames_rx.recv() => match event {
                    Some(SourceEvent::Frame(record)) => {
                        for trigger in self.process_record(&record) {
                            if action_tx.send(trigger).is_err() {
                                log::warn!("pipeline: action worker gone, dropping {}", trigger.event);
                            }
                        }
                    }
                    Some(SourceEvent::Finished) | None => break,
                },
            }
        }

        log::info!("pipeline: frame source finished, runner shutting down");
    }

    fn update_state(&self, f: impl FnOnce(&mut super::AppState)) {
        match self.state.lock() {
            Ok(mut st) => f(&mut st),
            Err(e) => log::warn!("pipeline: state lock poisoned: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
