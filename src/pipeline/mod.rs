//! Runtime loop: frames in, actions out.
//!
//! # Architecture
//!
//! ```text
//! source::spawn_reader ──SourceEvent──┐
//!                                     ▼
//! HotkeyListener ──HotkeyEvent──▶ GestureRunner::run()   ← single tokio task
//!                                     │  StateStabilizer → GestureManager
//!                                     ▼
//!                          std mpsc<Trigger> ──▶ ActionWorker thread
//!
//! SharedState (Arc<Mutex<AppState>>) ◀── updated per frame
//! ```
//!
//! One task owns the stabilizer and every detector, so the core stays
//! single-threaded and driven purely by frame timestamps.

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::GestureRunner;
pub use state::{new_shared_state, AppState, SharedState};
