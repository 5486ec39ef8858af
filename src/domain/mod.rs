//! Domain types shared by every stage of the gesture pipeline.
//!
//! * [`HandState`]: the coarse pose label produced by the classifier.
//! * [`GestureEvent`] / [`Trigger`]: what the pipeline emits outward.
//! * [`FrameData`]: the per-frame snapshot routed through the detectors.

pub mod frame;
pub mod labels;

pub use frame::{
    FrameData, Hand2D, Hand3D, HandSide, Point2, Point3, FINGERTIPS, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_MCP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
pub use labels::{GestureEvent, HandState, Trigger};
