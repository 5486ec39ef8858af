//! Synthetic hands and frames for detector tests.

use crate::domain::{
    FrameData, Hand2D, Hand3D, HandSide, HandState, Point2, Point3, FINGERTIPS, INDEX_TIP,
    LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_TIP, THUMB_TIP, WRIST,
};

/// Frame spacing used by the scenario tests (~33 fps).
pub const DT: f64 = 0.03;

/// A 2D hand whose centroid is exactly `(cx, cy)`.
///
/// Thumb and index tips straddle the centre horizontally `pinch` apart;
/// wrist and middle MCP straddle it vertically `scale` apart.
pub fn hand(cx: f64, cy: f64, pinch: f64, scale: f64) -> Hand2D {
    let mut h = [Point2::new(cx, cy); LANDMARK_COUNT];
    h[THUMB_TIP] = Point2::new(cx - pinch / 2.0, cy);
    h[INDEX_TIP] = Point2::new(cx + pinch / 2.0, cy);
    h[WRIST] = Point2::new(cx, cy + scale / 2.0);
    h[MIDDLE_MCP] = Point2::new(cx, cy - scale / 2.0);
    h
}

pub fn hand_at(cy: f64) -> Hand2D {
    hand(0.5, cy, 0.5, 1.0)
}

/// Raw hand with fingertips `depth` in front of the wrist and a
/// wrist → middle-tip vertical extent of `size`.
pub fn raw_hand(size: f64, depth: f64) -> Hand3D {
    let mut r = [Point3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    for &i in &FINGERTIPS {
        r[i].z = depth;
    }
    r[MIDDLE_TIP].y = 0.5 - size;
    r
}

/// Hand pushed toward the camera well past the intent threshold.
pub fn pushed() -> Hand3D {
    raw_hand(0.3, -0.06)
}

/// Hand resting flat, no forward intent.
pub fn resting() -> Hand3D {
    raw_hand(0.3, -0.01)
}

/// Right-hand frame with optional raw landmarks.
pub fn frame(state: HandState, t: f64, h: Hand2D, raw: Option<Hand3D>) -> FrameData {
    let mut f = FrameData::new(state, t).with_hand(HandSide::Right, h);
    if let Some(r) = raw {
        f = f.with_raw(HandSide::Right, r);
    }
    f
}

/// Frame carrying a pose label only (transition gestures).
pub fn pose(state: HandState, t: f64) -> FrameData {
    frame(state, t, hand_at(0.5), None)
}

/// Two-hand frame with centroids `gap` apart horizontally around x = 0.5.
pub fn two_hands(state: HandState, t: f64, gap: f64) -> FrameData {
    FrameData::new(state, t)
        .with_hand(HandSide::Left, hand(0.5 + gap / 2.0, 0.5, 0.5, 1.0))
        .with_hand(HandSide::Right, hand(0.5 - gap / 2.0, 0.5, 0.5, 1.0))
}
