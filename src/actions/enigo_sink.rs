//! [`ActionSink`] backed by the `enigo` crate.
//!
//! | Action        | macOS          | Windows / Linux |
//! |---------------|----------------|-----------------|
//! | zoom in / out | ⌘ + `+` / `-`  | Ctrl + `+` / `-`|
//! | screenshot    | ⌘⇧3            | PrintScreen     |
//! | close window  | ⌘W             | Alt+F4          |
//! | task view     | Ctrl+↑         | Meta+Tab        |
//!
//! Volume, mute and play/pause use the media keys on every platform.

use enigo::{Axis, Direction, Enigo, Key, Keyboard, Mouse, Settings};

use super::{ActionError, ActionSink};

/// Wheel units per scroll notch (the Windows `WHEEL_DELTA`).
pub const WHEEL_DELTA: i32 = 120;

/// Drives the real desktop.  A new [`Enigo`] is created for each call
/// because `Enigo` is not `Send` and is cheap to construct.
#[derive(Debug, Clone)]
pub struct EnigoSink {
    /// Wheel units that make up one enigo scroll notch.
    pub wheel_delta: i32,
}

impl Default for EnigoSink {
    fn default() -> Self {
        Self {
            wheel_delta: WHEEL_DELTA,
        }
    }
}

impl EnigoSink {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Wheel amount (positive = up) to enigo notches (positive = down).
///
/// Any non-zero amount moves at least one notch.
fn wheel_notches(amount: i32, wheel_delta: i32) -> i32 {
    if amount == 0 {
        return 0;
    }
    let notches = (amount.saturating_abs() / wheel_delta.max(1)).max(1);
    -amount.signum() * notches
}

fn connect() -> Result<Enigo, ActionError> {
    Enigo::new(&Settings::default()).map_err(|e| ActionError::Backend(e.to_string()))
}

fn key(enigo: &mut Enigo, k: Key, dir: Direction) -> Result<(), ActionError> {
    enigo
        .key(k, dir)
        .map_err(|e| ActionError::Input(e.to_string()))
}

/// Press `modifiers` in order, click `k`, release them in reverse.
fn chord(modifiers: &[Key], k: Key) -> Result<(), ActionError> {
    let mut enigo = connect()?;
    for &m in modifiers {
        key(&mut enigo, m, Direction::Press)?;
    }
    let clicked = key(&mut enigo, k, Direction::Click);
    for &m in modifiers.iter().rev() {
        key(&mut enigo, m, Direction::Release)?;
    }
    clicked
}

fn tap(k: Key, times: u32) -> Result<(), ActionError> {
    let mut enigo = connect()?;
    for _ in 0..times {
        key(&mut enigo, k, Direction::Click)?;
    }
    Ok(())
}

#[cfg(target_os = "macos")]
const ZOOM_MODIFIER: Key = Key::Meta;
#[cfg(not(target_os = "macos"))]
const ZOOM_MODIFIER: Key = Key::Control;

impl ActionSink for EnigoSink {
    fn scroll(&mut self, amount: i32) -> Result<(), ActionError> {
        let notches = wheel_notches(amount, self.wheel_delta);
        if notches == 0 {
            return Ok(());
        }
        connect()?
            .scroll(notches, Axis::Vertical)
            .map_err(|e| ActionError::Input(e.to_string()))
    }

    fn volume(&mut self, up: bool, steps: u32) -> Result<(), ActionError> {
        tap(if up { Key::VolumeUp } else { Key::VolumeDown }, steps)
    }

    fn zoom(&mut self, zoom_in: bool, steps: u32) -> Result<(), ActionError> {
        let k = Key::Unicode(if zoom_in { '+' } else { '-' });
        for _ in 0..steps {
            chord(&[ZOOM_MODIFIER], k)?;
        }
        Ok(())
    }

    fn screenshot(&mut self) -> Result<(), ActionError> {
        #[cfg(target_os = "macos")]
        {
            chord(&[Key::Meta, Key::Shift], Key::Unicode('3'))
        }
        #[cfg(not(target_os = "macos"))]
        {
            tap(Key::PrintScr, 1)
        }
    }

    fn close_window(&mut self) -> Result<(), ActionError> {
        #[cfg(target_os = "macos")]
        {
            chord(&[Key::Meta], Key::Unicode('w'))
        }
        #[cfg(not(target_os = "macos"))]
        {
            chord(&[Key::Alt], Key::F4)
        }
    }

    fn mute_toggle(&mut self) -> Result<(), ActionError> {
        tap(Key::VolumeMute, 1)
    }

    fn task_view(&mut self) -> Result<(), ActionError> {
        #[cfg(target_os = "macos")]
        {
            chord(&[Key::Control], Key::UpArrow)
        }
        #[cfg(not(target_os = "macos"))]
        {
            chord(&[Key::Meta], Key::Tab)
        }
    }

    fn media_play_pause(&mut self) -> Result<(), ActionError> {
        tap(Key::MediaPlayPause, 1)
    }
}
