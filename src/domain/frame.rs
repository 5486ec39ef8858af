//! Per-frame snapshot passed through the gesture pipeline.
//!
//! Landmark lists always hold 21 points in the standard hand topology:
//!
//! ```text
//!            8   12  16  20      ← fingertips
//!        4   |   |   |   |
//!        |   6   10  14  18      ← PIP joints
//!        2   5   9   13  17      ← MCP joints
//!         \   \  |  /   /
//!              0                 ← wrist
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::labels::HandState;

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Indices of the five fingertips, thumb first.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// A 2D landmark (normalised image plane).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A raw 3D landmark; `z` is depth relative to the camera (smaller = closer).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

pub type Hand2D = [Point2; LANDMARK_COUNT];
pub type Hand3D = [Point3; LANDMARK_COUNT];

/// Which hand a landmark list belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

// ---------------------------------------------------------------------------
// FrameData
// ---------------------------------------------------------------------------

/// Everything a detector may look at for one frame.
///
/// Immutable once built; detectors receive it by reference for the duration
/// of a single [`GestureManager::process`](crate::gestures::GestureManager::process)
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// Stable (consensus) pose label for this frame.
    pub state: HandState,
    /// Normalised 2D landmarks per side.
    pub hands: HashMap<HandSide, Hand2D>,
    /// Raw 3D landmarks per side (depth and hand-size signals).
    pub hands_raw: HashMap<HandSide, Hand3D>,
    /// Capture time in seconds.  All gesture timing derives from this.
    pub timestamp: f64,
}

impl FrameData {
    pub fn new(state: HandState, timestamp: f64) -> Self {
        Self {
            state,
            hands: HashMap::new(),
            hands_raw: HashMap::new(),
            timestamp,
        }
    }

    /// Builder-style helper that attaches a 2D hand.
    pub fn with_hand(mut self, side: HandSide, hand: Hand2D) -> Self {
        self.hands.insert(side, hand);
        self
    }

    /// Builder-style helper that attaches a raw 3D hand.
    pub fn with_raw(mut self, side: HandSide, hand: Hand3D) -> Self {
        self.hands_raw.insert(side, hand);
        self
    }

    /// Side used by single-hand gestures: Right when present, else Left.
    pub fn primary_side(&self) -> Option<HandSide> {
        if self.hands.contains_key(&HandSide::Right) {
            Some(HandSide::Right)
        } else if self.hands.contains_key(&HandSide::Left) {
            Some(HandSide::Left)
        } else {
            None
        }
    }

    pub fn primary_hand(&self) -> Option<&Hand2D> {
        self.primary_side().and_then(|side| self.hands.get(&side))
    }

    /// Raw landmarks for the same side as [`primary_hand`](Self::primary_hand).
    pub fn primary_hand_raw(&self) -> Option<&Hand3D> {
        self.primary_side().and_then(|side| self.hands_raw.get(&side))
    }

    pub fn has_both_hands(&self) -> bool {
        self.hands.contains_key(&HandSide::Left) && self.hands.contains_key(&HandSide::Right)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
