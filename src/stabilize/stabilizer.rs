//! Rolling-window consensus filter over raw classifier output.
//!
//! ## Algorithm
//!
//! 1. A prediction whose confidence is below `min_confidence` is recorded as
//!    [`HandState::Unknown`], whatever its literal label.
//! 2. The label is pushed into a window of `window` entries; the oldest entry
//!    is evicted once the window is full.
//! 3. Until the window has filled once, no opinion is given (cold start).
//! 4. Otherwise the most frequent label wins if it has at least `consensus`
//!    votes.  Ties go to the label seen earliest in the window.  Without a
//!    winner the previous stable state is kept, so the output never flickers.

use std::collections::VecDeque;

use crate::config::StabilizerConfig;
use crate::domain::HandState;

/// Turns noisy per-frame predictions into a confirmed hand state.
///
/// # Example
///
/// ```rust
/// use hand_gesture_control::domain::HandState;
/// use hand_gesture_control::stabilize::StateStabilizer;
///
/// let mut st = StateStabilizer::new(4, 2, 0.6);
/// st.update(HandState::Palm, 0.9);
/// st.update(HandState::Palm, 0.9);
/// st.update(HandState::Fist, 0.9);
/// assert_eq!(st.update(HandState::Palm, 0.9), Some(HandState::Palm));
/// assert_eq!(st.current(), Some(HandState::Palm));
/// ```
#[derive(Debug, Clone)]
pub struct StateStabilizer {
    window: usize,
    consensus: usize,
    min_confidence: f64,
    buffer: VecDeque<HandState>,
    current: Option<HandState>,
}

impl StateStabilizer {
    /// A `window` of 0 is treated as 1.
    pub fn new(window: usize, consensus: usize, min_confidence: f64) -> Self {
        let window = window.max(1);
        Self {
            window,
            consensus,
            min_confidence,
            buffer: VecDeque::with_capacity(window),
            current: None,
        }
    }

    pub fn from_config(config: &StabilizerConfig) -> Self {
        Self::new(config.window, config.consensus, config.min_confidence)
    }

    /// Feed one prediction.
    ///
    /// Returns the stable state when the window reaches consensus, `None`
    /// otherwise.  The confirmed state is also cached in
    /// [`current`](Self::current).
    pub fn update(&mut self, raw: HandState, confidence: f64) -> Option<HandState> {
        let effective = if confidence < self.min_confidence {
            HandState::Unknown
        } else {
            raw
        };

        if self.buffer.len() == self.window {
            self.buffer.pop_front();
        }
        self.buffer.push_back(effective);

        if self.buffer.len() < self.window {
            return None;
        }

        let (label, count) = self.dominant()?;
        if count >= self.consensus {
            self.current = Some(label);
            Some(label)
        } else {
            None
        }
    }

    /// Most frequent label in the window and its vote count.
    fn dominant(&self) -> Option<(HandState, usize)> {
        let mut tally: Vec<(HandState, usize)> = Vec::with_capacity(self.window);
        for &label in &self.buffer {
            match tally.iter_mut().find(|(l, _)| *l == label) {
                Some((_, n)) => *n += 1,
                None => tally.push((label, 1)),
            }
        }
        // `tally` is in first-seen order; keep the earliest on ties.
        tally
            .into_iter()
            .fold(None, |best: Option<(HandState, usize)>, cand| match best {
                Some(b) if b.1 >= cand.1 => Some(b),
                _ => Some(cand),
            })
    }

    /// Last confirmed stable state, or `None` before the first consensus.
    pub fn current(&self) -> Option<HandState> {
        self.current
    }

    /// Labels currently in the window, oldest first.
    pub fn window(&self) -> Vec<HandState> {
        self.buffer.iter().copied().collect()
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.current = None;
    }
}

impl Default for StateStabilizer {
    fn default() -> Self {
        Self::from_config(&StabilizerConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
