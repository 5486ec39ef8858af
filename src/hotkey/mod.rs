//! Global on/off hotkey for gesture control, backed by `rdev`.
//!
//! `rdev::listen()` blocks for the life of the process, so it runs on a
//! dedicated OS thread rather than inside a tokio task.  Each press of the
//! configured key sends one [`HotkeyEvent::ToggleEnabled`]; auto-repeat while
//! the key is held is swallowed.
//!
//! ```no_run
//! use tokio::sync::mpsc;
//! use hand_gesture_control::hotkey::{parse_key, HotkeyEvent, HotkeyListener};
//!
//! let (tx, mut rx) = mpsc::channel::<HotkeyEvent>(8);
//! let key = parse_key("F8").expect("unknown key");
//! let _listener = HotkeyListener::start(key, tx).expect("thread spawn");
//! ```

pub mod listener;

pub use listener::HotkeyListener;

use rdev::Key;

/// Events emitted by the hotkey listener thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyEvent {
    /// Flip gesture control between enabled and disabled.
    ToggleEnabled,
}

const FUNCTION_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

const LETTER_KEYS: [Key; 26] = [
    Key::KeyA,
    Key::KeyB,
    Key::KeyC,
    Key::KeyD,
    Key::KeyE,
    Key::KeyF,
    Key::KeyG,
    Key::KeyH,
    Key::KeyI,
    Key::KeyJ,
    Key::KeyK,
    Key::KeyL,
    Key::KeyM,
    Key::KeyN,
    Key::KeyO,
    Key::KeyP,
    Key::KeyQ,
    Key::KeyR,
    Key::KeyS,
    Key::KeyT,
    Key::KeyU,
    Key::KeyV,
    Key::KeyW,
    Key::KeyX,
    Key::KeyY,
    Key::KeyZ,
];

/// Parse a key name from `settings.toml` into an [`rdev::Key`].
///
/// Accepts `F1`–`F12`, a handful of named keys and single ASCII letters in
/// either case.  Surrounding whitespace is ignored.
///
/// ```
/// use hand_gesture_control::hotkey::parse_key;
///
/// assert_eq!(parse_key("F8"), Some(rdev::Key::F8));
/// assert_eq!(parse_key(" pause "), Some(rdev::Key::Pause));
/// assert_eq!(parse_key("g"), Some(rdev::Key::KeyG));
/// assert_eq!(parse_key("Ctrl+G"), None);
/// ```
pub fn parse_key(name: &str) -> Option<Key> {
    let name = name.trim();

    if let Some(n) = name.strip_prefix(|c| c == 'F' || c == 'f').and_then(|n| n.parse::<usize>().ok()) {
        return n.checked_sub(1).and_then(|i| FUNCTION_KEYS.get(i)).copied();
    }

    if let [c] = name.as_bytes() {
        if c.is_ascii_alphabetic() {
            return Some(LETTER_KEYS[(c.to_ascii_uppercase() - b'A') as usize]);
        }
    }

    let key = match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "space" => Key::Space,
        "tab" => Key::Tab,
        "home" => Key::Home,
        "end" => Key::End,
        "insert" | "ins" => Key::Insert,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "capslock" => Key::CapsLock,
        "scrolllock" => Key::ScrollLock,
        "pause" => Key::Pause,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_keys() {
        assert_eq!(parse_key("F1"), Some(Key::F1));
        assert_eq!(parse_key("f12"), Some(Key::F12));
        assert_eq!(parse_key("F0"), None);
        assert_eq!(parse_key("F13"), None);
    }

    #[test]
    fn letters_any_case() {
        assert_eq!(parse_key("a"), Some(Key::KeyA));
        assert_eq!(parse_key("Z"), Some(Key::KeyZ));
        // A bare "F" is the letter, not a function key.
        assert_eq!(parse_key("F"), Some(Key::KeyF));
    }

    #[test]
    fn named_keys() {
        assert_eq!(parse_key("Esc"), Some(Key::Escape));
        assert_eq!(parse_key("ScrollLock"), Some(Key::ScrollLock));
        assert_eq!(parse_key("PAUSE"), Some(Key::Pause));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("1"), None);
        assert_eq!(parse_key("Ctrl+G"), None);
    }
}
