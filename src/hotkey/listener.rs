//! Dedicated OS-thread listener using `rdev::listen`.
//!
//! `rdev::listen` cannot be interrupted.  Dropping [`HotkeyListener`] sets a
//! stop flag so the callback discards further events; the thread itself stays
//! parked in the rdev loop until the process exits.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::mpsc;

use super::HotkeyEvent;

/// Handle to a running hotkey listener thread.
pub struct HotkeyListener {
    stop: Arc<AtomicBool>,
    _thread: std::thread::JoinHandle<()>,
}

impl HotkeyListener {
    /// Spawn the listener thread.  Every fresh press of `key` sends
    /// [`HotkeyEvent::ToggleEnabled`] on `tx` via `blocking_send`.
    pub fn start(key: rdev::Key, tx: mpsc::Sender<HotkeyEvent>) -> std::io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let thread = std::thread::Builder::new()
            .name("hotkey-listener".into())
            .spawn(move || {
                let mut held = false;
                let result = rdev::listen(move |event| {
                    if stop_flag.load(Ordering::Relaxed) {
                        return;
                    }
                    match event.event_type {
                        rdev::EventType::KeyPress(k) if k == key && !held => {
                            held = true;
                            if tx.blocking_send(HotkeyEvent::ToggleEnabled).is_err() {
                                log::debug!("hotkey-listener: receiver dropped");
                            }
                        }
                        rdev::EventType::KeyRelease(k) if k == key => held = false,
                        _ => {}
                    }
                });

                if let Err(e) = result {
                    log::error!("hotkey-listener: rdev::listen exited with error: {:?}", e);
                }
            })?;

        log::info!("hotkey-listener: watching {:?}", key);
        Ok(Self {
            stop,
            _thread: thread,
        })
    }
}

impl Drop for HotkeyListener {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
