//! Background reader that feeds frames into the runtime loop.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::record::{parse_line, FrameRecord};

/// Longest pause honoured between two recorded frames in realtime mode.
const MAX_REPLAY_GAP: Duration = Duration::from_secs(2);

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `None` or `"-"` selects stdin; anything else is a path.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceEvent {
    Frame(FrameRecord),
    /// The input ended (EOF or unrecoverable read error).
    Finished,
}

/// Read `input` on the blocking pool and forward each record on `tx`.
///
/// With `realtime`, the reader sleeps for the recorded gap between
/// consecutive timestamps so replays run at capture speed.  Unparsable lines
/// are logged and skipped.  A final [`SourceEvent::Finished`] is always sent
/// unless the receiver has gone away.
pub fn spawn_reader(input: Input, realtime: bool, tx: mpsc::Sender<SourceEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let reader: Box<dyn BufRead> = match &input {
            Input::Stdin => Box::new(BufReader::new(std::io::stdin())),
            Input::File(path) => match std::fs::File::open(path) {
                Ok(f) => Box::new(BufReader::new(f)),
                Err(e) => {
                    log::error!("source: cannot open {}: {e}", path.display());
                    let _ = tx.blocking_send(SourceEvent::Finished);
                    return;
                }
            },
        };
        log::info!("source: reading frames from {:?}", input);

        let mut last_ts: Option<f64> = None;
        let mut forwarded = 0usize;
        for (i, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    log::error!("source: read failed after {forwarded} frames: {e}");
                    break;
                }
            };
            let record = match parse_line(&line, i + 1) {
                Ok(Some(r)) => r,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("source: skipping bad frame ({e})");
                    continue;
                }
            };

            if realtime {
                if let Some(prev) = last_ts {
                    std::thread::sleep(replay_delay(prev, record.timestamp));
                }
                last_ts = Some(record.timestamp);
            }

            if tx.blocking_send(SourceEvent::Frame(record)).is_err() {
                log::debug!("source: receiver dropped, stopping");
                return;
            }
            forwarded += 1;
        }

        log::info!("source: end of input after {forwarded} frames");
        let _ = tx.blocking_send(SourceEvent::Finished);
    })
}

/// Wall-clock pause between two recorded frames, capped at [`MAX_REPLAY_GAP`].
fn replay_delay(prev: f64, next: f64) -> Duration {
    let gap = (next - prev).max(0.0).min(MAX_REPLAY_GAP.as_secs_f64());
    Duration::from_secs_f64(gap)
}
