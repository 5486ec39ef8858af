//! Pure geometric helpers.  No state, no allocation.

use crate::domain::{Point2, Point3, FINGERTIPS, MIDDLE_TIP, WRIST};

/// Euclidean distance between two 2D points.
///
/// ```
/// use hand_gesture_control::domain::Point2;
/// use hand_gesture_control::landmarks::distance;
///
/// let d = distance(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
pub fn distance(a: Point2, b: Point2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    let (dx, dy, dz) = (a.x - b.x, a.y - b.y, a.z - b.z);
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Centroid of a landmark list.  An empty slice yields the origin.
pub fn hand_center(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::default();
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2::new(sx / n, sy / n)
}

/// Angle `abc` in degrees, with the vertex at `b`.
///
/// Returns `0.0` when either segment has zero length.
pub fn angle(a: Point2, b: Point2, c: Point2) -> f64 {
    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);
    let mag = bax.hypot(bay) * bcx.hypot(bcy);
    if mag == 0.0 {
        return 0.0;
    }
    let cos = ((bax * bcx + bay * bcy) / mag).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Wrist → middle-fingertip distance in 3D; the per-frame proxy for how far
/// the hand is from the camera.
pub fn hand_size(raw: &[Point3]) -> f64 {
    distance3(raw[WRIST], raw[MIDDLE_TIP])
}

/// Mean fingertip depth minus wrist depth.
///
/// Negative when the fingers are closer to the camera than the wrist, i.e.
/// the hand is pushed forward.
pub fn relative_depth(raw: &[Point3]) -> f64 {
    let tips: f64 = FINGERTIPS.iter().map(|&i| raw[i].z).sum::<f64>() / FINGERTIPS.len() as f64;
    tips - raw[WRIST].z
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LANDMARK_COUNT;

    #[test]
    fn centroid_of_square() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert_eq!(hand_center(&pts), Point2::new(1.0, 1.0));
    }

    #[test]
    fn centroid_of_empty_is_origin() {
        assert_eq!(hand_center(&[]), Point2::default());
    }

    #[test]
    fn right_angle() {
        let a = angle(
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        assert!((a - 90.0).abs() < 1e-9);
    }

    #[test]
    fn straight_angle() {
        let a = angle(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        assert!((a - 180.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_angle_is_zero() {
        let p = Point2::new(0.3, 0.3);
        assert_eq!(angle(p, p, Point2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn size_and_depth_of_raw_hand() {
        let mut raw = [Point3::default(); LANDMARK_COUNT];
        raw[MIDDLE_TIP] = Point3::new(0.0, 0.3, 0.4);
        assert!((hand_size(&raw) - 0.5).abs() < 1e-12);

        for &i in &FINGERTIPS {
            raw[i].z = -0.06;
        }
        raw[WRIST].z = 0.01;
        assert!((relative_depth(&raw) - (-0.07)).abs() < 1e-12);
    }
}
