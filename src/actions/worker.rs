//! Dedicated OS thread that applies triggers in arrival order.
//!
//! Input simulation blocks and the enigo handle is not `Send`, so it never
//! runs on the async runtime.  The runner hands triggers over a std mpsc
//! channel; the worker exits once every sender is dropped.

use std::sync::mpsc;
use std::thread::JoinHandle;

use crate::domain::Trigger;

use super::{apply, ActionSink};

pub struct ActionWorker {
    tx: mpsc::Sender<Trigger>,
    thread: JoinHandle<usize>,
}

impl ActionWorker {
    /// Spawn the worker around `sink`.
    pub fn start<S>(mut sink: S) -> std::io::Result<Self>
    where
        S: ActionSink + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Trigger>();
        let thread = std::thread::Builder::new()
            .name("action-worker".into())
            .spawn(move || {
                let mut applied = 0usize;
                for trigger in rx {
                    match apply(&trigger, &mut sink) {
                        Ok(()) => applied += 1,
                        Err(e) => log::warn!("actions: {} failed: {e}", trigger.event),
                    }
                }
                log::debug!("actions: worker stopping after {applied} actions");
                applied
            })?;
        Ok(Self { tx, thread })
    }

    /// A new handle for submitting triggers.
    pub fn sender(&self) -> mpsc::Sender<Trigger> {
        self.tx.clone()
    }

    /// Drop this handle's sender and wait for the queue to drain.
    ///
    /// Returns the number of actions applied successfully.  Blocks until every
    /// other sender obtained from [`sender`](Self::sender) is dropped too.
    pub fn join(self) -> usize {
        drop(self.tx);
        self.thread.join().unwrap_or_else(|_| {
            log::error!("actions: worker thread panicked");
            0
        })
    }
}
