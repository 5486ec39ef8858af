//! Tracker-side landmark preparation.
//!
//! The pipeline consumes wrist-centred landmarks whose wrist → middle-MCP
//! distance is 1, and needs each hand labelled Left/Right.  The frame source
//! applies these helpers to records that carry unlabelled pixel landmarks.

use serde::{Deserialize, Serialize};

use crate::domain::{Hand2D, Hand3D, HandSide, Point2, LANDMARK_COUNT, MIDDLE_MCP, WRIST};

/// One hand as reported by a landmark tracker, in pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedHand {
    pub pixels: Hand2D,
    pub raw: Hand3D,
}

/// Translate so the wrist is the origin, then scale so that the
/// wrist → middle-MCP distance equals 1.
///
/// A zero-length reference segment leaves the translated points unscaled.
///
/// ```
/// use hand_gesture_control::domain::{Point2, LANDMARK_COUNT, MIDDLE_MCP};
/// use hand_gesture_control::landmarks::normalise;
///
/// let mut px = [Point2::new(100.0, 200.0); LANDMARK_COUNT];
/// px[MIDDLE_MCP] = Point2::new(100.0, 150.0);
/// let n = normalise(&px);
/// assert_eq!(n[0], Point2::new(0.0, 0.0));
/// assert!((n[MIDDLE_MCP].y + 1.0).abs() < 1e-12);
/// ```
pub fn normalise(pixels: &Hand2D) -> Hand2D {
    let origin = pixels[WRIST];
    let reference = pixels[MIDDLE_MCP];
    let mut scale = (reference.x - origin.x).hypot(reference.y - origin.y);
    if scale == 0.0 {
        scale = 1.0;
    }

    let mut out = [Point2::default(); LANDMARK_COUNT];
    for (dst, src) in out.iter_mut().zip(pixels.iter()) {
        *dst = Point2::new((src.x - origin.x) / scale, (src.y - origin.y) / scale);
    }
    out
}

/// Label tracked hands by horizontal wrist position (mirror view).
///
/// * One hand: wrist left of the frame centre is `Right`, otherwise `Left`.
/// * Two hands: the leftmost wrist is `Right`, the other `Left`.
/// * Any hands beyond the first two are ignored.
///
/// Returned landmark lists are already [`normalise`]d.
pub fn assign_sides(hands: &[TrackedHand], frame_width: f64) -> Vec<(HandSide, Hand2D, Hand3D)> {
    match hands {
        [] => Vec::new(),
        [only] => {
            let side = if only.pixels[WRIST].x < frame_width / 2.0 {
                HandSide::Right
            } else {
                HandSide::Left
            };
            vec![(side, normalise(&only.pixels), only.raw)]
        }
        [a, b, ..] => {
            let (first, second) = if a.pixels[WRIST].x <= b.pixels[WRIST].x {
                (a, b)
            } else {
                (b, a)
            };
            vec![
                (HandSide::Right, normalise(&first.pixels), first.raw),
                (HandSide::Left, normalise(&second.pixels), second.raw),
            ]
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Point3;

    fn tracked_at(wrist_x: f64) -> TrackedHand {
        let mut pixels = [Point2::new(wrist_x, 300.0); LANDMARK_COUNT];
        pixels[MIDDLE_MCP] = Point2::new(wrist_x, 260.0);
        TrackedHand {
            pixels,
            raw: [Point3::new(wrist_x / 640.0, 0.5, 0.0); LANDMARK_COUNT],
        }
    }

    #[test]
    fn zero_scale_is_guarded() {
        let px = [Point2::new(5.0, 5.0); LANDMARK_COUNT];
        let n = normalise(&px);
        assert!(n.iter().all(|p| *p == Point2::new(0.0, 0.0)));
    }

    #[test]
    fn single_hand_on_left_half_is_right() {
        let sides = assign_sides(&[tracked_at(100.0)], 640.0);
        assert_eq!(sides.len(), 1);
        assert_eq!(sides[0].0, HandSide::Right);
    }

    #[test]
    fn single_hand_on_right_half_is_left() {
        let sides = assign_sides(&[tracked_at(500.0)], 640.0);
        assert_eq!(sides[0].0, HandSide::Left);
    }

    #[test]
    fn two_hands_sorted_by_wrist_x() {
        let sides = assign_sides(&[tracked_at(500.0), tracked_at(120.0)], 640.0);
        assert_eq!(sides[0].0, HandSide::Right);
        assert!((sides[0].2[0].x - 120.0 / 640.0).abs() < 1e-12);
        assert_eq!(sides[1].0, HandSide::Left);
    }

    #[test]
    fn no_hands_yields_nothing() {
        assert!(assign_sides(&[], 640.0).is_empty());
    }
}
