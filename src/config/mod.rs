//! Configuration module for hand-gesture control.
//!
//! Provides `GestureConfig` (top-level settings), one sub-config per pipeline
//! component, `AppPaths` for the cross-platform config directory, and TOML
//! persistence via `GestureConfig::load` / `GestureConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    CloseWindowConfig, ContinuousConfig, CooldownConfig, GestureConfig, MuteConfig, PauseConfig,
    RuntimeConfig, ScreenshotConfig, StabilizerConfig, TaskViewConfig,
};
