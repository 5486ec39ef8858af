//! Landmark geometry: pure functions over hand landmark lists.
//!
//! * [`geometry`]: distance, centroid, angle-at-vertex, hand size, depth.
//! * [`normalise`]: tracker-side helpers that turn pixel landmarks into the
//!   wrist-centred, scale-normalised form the pipeline consumes.

pub mod geometry;
pub mod normalise;

pub use geometry::{angle, distance, distance3, hand_center, hand_size, relative_depth};
pub use normalise::{assign_sides, normalise, TrackedHand};
