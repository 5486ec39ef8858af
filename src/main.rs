//! Application entry point.
//!
//! ```text
//! hand-gesture-control [FILE|-]
//! ```
//!
//! Reads JSON Lines frame records from `FILE` (or stdin when omitted or `-`)
//! and turns recognised gestures into desktop input.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`GestureConfig`] from disk (defaults on first run or error).
//! 3. Create the multi-thread tokio runtime.
//! 4. Spawn the frame reader.
//! 5. Spawn the hotkey listener thread.
//! 6. Start the action worker around [`EnigoSink`].
//! 7. Run the [`GestureRunner`] until the input ends.

use anyhow::Context;
use tokio::sync::mpsc;

use hand_gesture_control::{
    actions::{ActionWorker, EnigoSink},
    config::GestureConfig,
    hotkey::{parse_key, HotkeyEvent, HotkeyListener},
    pipeline::{new_shared_state, GestureRunner},
    source::{spawn_reader, Input, SourceEvent},
};

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("hand-gesture-control starting up");

    // 2. Configuration
    let config = GestureConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        GestureConfig::default()
    });

    let arg = std::env::args().nth(1);
    let input = Input::from_arg(arg.as_deref());

    // 3. Tokio runtime
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    // 4. Frame source
    let (frames_tx, frames_rx) = mpsc::channel::<SourceEvent>(256);
    let reader = {
        let _guard = rt.enter();
        spawn_reader(input, config.runtime.realtime_replay, frames_tx)
    };

    // 5. Hotkey listener
    let (hotkey_tx, hotkey_rx) = mpsc::channel::<HotkeyEvent>(8);
    let _hotkey_listener = match parse_key(&config.runtime.toggle_key) {
        Some(key) => match HotkeyListener::start(key, hotkey_tx) {
            Ok(listener) => Some(listener),
            Err(e) => {
                log::warn!("Hotkey listener unavailable: {e}");
                None
            }
        },
        None => {
            log::warn!(
                "Unknown toggle key {:?}; hotkey disabled",
                config.runtime.toggle_key
            );
            None
        }
    };

    // 6. Action worker
    let worker = ActionWorker::start(EnigoSink::new()).context("failed to spawn action worker")?;

    // 7. Runner
    let state = new_shared_state(config.runtime.start_enabled);
    let runner = GestureRunner::new(&config, state.clone());
    rt.block_on(runner.run(frames_rx, hotkey_rx, worker.sender()));

    if let Err(e) = rt.block_on(reader) {
        log::warn!("Frame reader task failed: {e}");
    }
    let applied = worker.join();

    if let Ok(st) = state.lock() {
        log::info!(
            "Done: {} frames, {} events, {} actions applied",
            st.frames_processed,
            st.events_fired,
            applied
        );
    }
    // rdev keeps its listener thread parked; leave without waiting on it.
    rt.shutdown_background();
    Ok(())
}
