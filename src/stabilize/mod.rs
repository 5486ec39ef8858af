//! Temporal filtering shared by the whole pipeline.
//!
//! ```text
//! classifier (label, confidence)
//!        │
//!        ▼
//! StateStabilizer ── rolling-window consensus ──▶ stable HandState
//!
//! detectors ── CooldownManager::ok(name, now) ──▶ fire / suppress
//! ```

pub mod cooldown;
pub mod stabilizer;

pub use cooldown::CooldownManager;
pub use stabilizer::StateStabilizer;
