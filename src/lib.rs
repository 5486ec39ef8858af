//! Hand-gesture desktop control.
//!
//! Per-frame hand landmarks and pose labels go in; debounced desktop actions
//! (scroll, volume, zoom, screenshot, close window, mute, task view,
//! play/pause) come out.
//!
//! | Module         | Role                                               |
//! |----------------|----------------------------------------------------|
//! | [`domain`]     | pose labels, events, triggers, `FrameData`         |
//! | [`landmarks`]  | geometry helpers and tracker-side normalisation    |
//! | [`stabilize`]  | label consensus and per-event cooldowns            |
//! | [`gestures`]   | the detectors and the `GestureManager`             |
//! | [`config`]     | `GestureConfig` and `settings.toml` persistence    |
//! | [`source`]     | JSON Lines frame input                             |
//! | [`pipeline`]   | async runtime loop                                 |
//! | [`hotkey`]     | global enable/disable key                          |
//! | [`actions`]    | trigger → OS input                                 |

pub mod actions;
pub mod config;
pub mod domain;
pub mod gestures;
pub mod hotkey;
pub mod landmarks;
pub mod pipeline;
pub mod source;
pub mod stabilize;
