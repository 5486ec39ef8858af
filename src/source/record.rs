//! The per-frame record and its JSON Lines parser.

use std::collections::HashMap;
use std::io::BufRead;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Hand2D, Hand3D, HandSide, HandState};
use crate::landmarks::{assign_sides, TrackedHand};

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error reading frames: {0}")]
    Io(#[from] std::io::Error),

    /// The line could not be decoded as a [`FrameRecord`].
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: tracked hands need a frame_width")]
    MissingFrameWidth { line: usize },
}

// ---------------------------------------------------------------------------
// FrameRecord
// ---------------------------------------------------------------------------

/// One classifier output plus the landmarks it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Capture time in seconds.
    pub timestamp: f64,
    /// Raw (unstabilized) pose label.
    pub label: HandState,
    pub confidence: f64,
    /// Normalised 2D landmarks per side.
    #[serde(default)]
    pub hands: HashMap<HandSide, Hand2D>,
    /// Raw 3D landmarks per side.
    #[serde(default)]
    pub hands_raw: HashMap<HandSide, Hand3D>,
    /// Unlabelled tracker output in pixels.  Resolved into `hands` and
    /// `hands_raw` on parse when `hands` is empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked: Vec<TrackedHand>,
    /// Source image width in pixels; required alongside `tracked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<f64>,
}

impl FrameRecord {
    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }
}

/// Parse one line.  Blank lines yield `Ok(None)`.
///
/// `line_no` is 1-based and only used for error reporting.
///
/// ```
/// use hand_gesture_control::source::parse_line;
/// use hand_gesture_control::domain::HandState;
///
/// let rec = parse_line(r#"{"timestamp":1.5,"label":"FIST","confidence":0.8}"#, 1)
///     .unwrap()
///     .unwrap();
/// assert_eq!(rec.label, HandState::Fist);
/// assert!(rec.hands.is_empty());
///
/// assert!(parse_line("   ", 2).unwrap().is_none());
/// assert!(parse_line("{oops", 3).is_err());
/// ```
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<FrameRecord>, SourceError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut record: FrameRecord =
        serde_json::from_str(line).map_err(|source| SourceError::Parse {
            line: line_no,
            source,
        })?;

    if record.hands.is_empty() && !record.tracked.is_empty() {
        let width = record
            .frame_width
            .ok_or(SourceError::MissingFrameWidth { line: line_no })?;
        for (side, hand, raw) in assign_sides(&record.tracked, width) {
            record.hands.insert(side, hand);
            record.hands_raw.insert(side, raw);
        }
        record.tracked.clear();
    }
    Ok(Some(record))
}

/// Parse a whole stream, stopping at the first error.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<FrameRecord>, SourceError> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        if let Some(rec) = parse_line(&line?, i + 1)? {
            out.push(rec);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point2, Point3, LANDMARK_COUNT, MIDDLE_MCP, WRIST};

    fn tracked_at(wrist_x: f64) -> TrackedHand {
        let mut pixels = [Point2::new(wrist_x, 300.0); LANDMARK_COUNT];
        pixels[MIDDLE_MCP] = Point2::new(wrist_x, 260.0);
        TrackedHand {
            pixels,
            raw: [Point3::new(wrist_x / 640.0, 0.5, -0.05); LANDMARK_COUNT],
        }
    }

    fn tracked_record(tracked: Vec<TrackedHand>, frame_width: Option<f64>) -> FrameRecord {
        FrameRecord {
            timestamp: 0.2,
            label: HandState::Palm,
            confidence: 0.9,
            hands: HashMap::new(),
            hands_raw: HashMap::new(),
            tracked,
            frame_width,
        }
    }

    fn hand_json(x: f64) -> String {
        let pts: Vec<String> = (0..LANDMARK_COUNT)
            .map(|_| format!(r#"{{"x":{x},"y":0.5}}"#))
            .collect();
        format!("[{}]", pts.join(","))
    }

    #[test]
    fn parses_hands_by_side() {
        let line = format!(
            r#"{{"timestamp":0.5,"label":"TWO_FINGERS","confidence":0.9,"hands":{{"Right":{}}}}}"#,
            hand_json(0.25)
        );
        let rec = parse_line(&line, 1).unwrap().unwrap();
        assert_eq!(rec.label, HandState::TwoFingers);
        assert!(rec.has_hands());
        assert_eq!(rec.hands[&HandSide::Right][0], Point2::new(0.25, 0.5));
        assert!(rec.hands_raw.is_empty());
    }

    #[test]
    fn tracked_hands_are_normalised_and_sided() {
        let rec = tracked_record(vec![tracked_at(500.0), tracked_at(120.0)], Some(640.0));
        let line = serde_json::to_string(&rec).unwrap();

        let parsed = parse_line(&line, 1).unwrap().unwrap();
        assert!(parsed.tracked.is_empty());
        assert_eq!(parsed.hands.len(), 2);
        let right = &parsed.hands[&HandSide::Right];
        assert_eq!(right[WRIST], Point2::new(0.0, 0.0));
        assert!((right[MIDDLE_MCP].y + 1.0).abs() < 1e-12);
        assert!((parsed.hands_raw[&HandSide::Right][0].x - 120.0 / 640.0).abs() < 1e-12);
        assert!((parsed.hands_raw[&HandSide::Left][0].x - 500.0 / 640.0).abs() < 1e-12);
    }

    #[test]
    fn tracked_hands_without_width_are_an_error() {
        let line = serde_json::to_string(&tracked_record(vec![tracked_at(100.0)], None)).unwrap();
        assert!(matches!(
            parse_line(&line, 4),
            Err(SourceError::MissingFrameWidth { line: 4 })
        ));
    }

    #[test]
    fn wrong_landmark_count_is_an_error() {
        let line = r#"{"timestamp":0,"label":"PALM","confidence":1,"hands":{"Left":[{"x":0,"y":0}]}}"#;
        assert!(matches!(parse_line(line, 7), Err(SourceError::Parse { line: 7, .. })));
    }

    #[test]
    fn unknown_label_is_an_error() {
        let line = r#"{"timestamp":0,"label":"THUMBS_UP","confidence":1}"#;
        assert!(parse_line(line, 1).is_err());
    }

    #[test]
    fn read_records_skips_blank_lines_and_reports_line_numbers() {
        let input = "\n{\"timestamp\":0,\"label\":\"PALM\",\"confidence\":1}\n\n{\"timestamp\":0.1,\"label\":\"FIST\",\"confidence\":1}\n";
        let recs = read_records(input.as_bytes()).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].label, HandState::Fist);

        let bad = "{\"timestamp\":0,\"label\":\"PALM\",\"confidence\":1}\nnot json\n";
        let err = read_records(bad.as_bytes()).unwrap_err();
        assert_eq!(err.to_string().split(':').next(), Some("line 2"));
    }
}
