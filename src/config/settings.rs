//! Gesture settings structs, defaults and TOML persistence.
//!
//! Every tunable of the pipeline lives here and is passed by reference into
//! each component at construction.  All structs implement `Serialize`,
//! `Deserialize`, `Default` and `Clone`; a partial `settings.toml` is filled
//! in from the defaults.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// StabilizerConfig
// ---------------------------------------------------------------------------

/// Rolling-window consensus settings for the state stabilizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Number of predictions kept in the rolling window.
    pub window: usize,
    /// Minimum votes the dominant label needs to be confirmed.
    pub consensus: usize,
    /// Predictions below this confidence are recorded as `UNKNOWN`.
    pub min_confidence: f64,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            window: 4,
            consensus: 2,
            min_confidence: 0.60,
        }
    }
}

// ---------------------------------------------------------------------------
// CooldownConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownConfig {
    /// Seconds between two accepted events of the same name.
    pub default_cooldown: f64,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            default_cooldown: 0.6,
        }
    }
}

// ---------------------------------------------------------------------------
// ContinuousConfig  (scroll / volume / zoom)
// ---------------------------------------------------------------------------

/// Tuning for an arm-then-track continuous gesture.
///
/// Distances are in landmark units, times in seconds.  Use the
/// [`scroll`](Self::scroll), [`volume`](Self::volume) and [`zoom`](Self::zoom)
/// constructors for the per-gesture defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuousConfig {
    /// Continuous time in the valid state before output is allowed.
    pub arm_time: f64,

    /// Gain at the arming anchor.
    pub base_gain: f64,
    /// Extra gain per unit of distance travelled from the anchor.
    pub accel_factor: f64,
    /// Step counts below this are dropped.
    pub min_step: i32,
    /// Step counts are clamped to this magnitude.
    pub max_step: i32,

    /// Scale deltas by reference / current hand size.
    pub size_compensation: bool,
    pub size_ratio_min: f64,
    pub size_ratio_max: f64,

    /// EMA coefficients (weight of the newest sample).
    pub size_alpha: f64,
    pub position_alpha: f64,
    pub pinch_alpha: f64,

    /// Pre-arm outlier limits against the last valid sample.
    pub max_position_jump: f64,
    /// Relative hand-size change limit.
    pub max_size_change: f64,
    pub max_pinch_jump: f64,
    /// Consecutive rejections tolerated before a full reset.
    pub outlier_recovery_frames: u32,

    /// Per-frame deltas below this are treated as zero.
    pub velocity_deadzone: f64,
    /// Non-zero deltas averaged before output.
    pub temporal_frames: usize,
    /// Minimum per-frame motion that refreshes the stillness clock.
    pub motion_threshold: f64,
    /// Seconds without motion before the delta buffer is flushed.
    pub stillness_timeout: f64,
    /// Window over which total displacement must exceed `motion_threshold`.
    pub stillness_window: f64,

    /// Require the hand to be pushed toward the camera.
    pub require_depth_intent: bool,
    /// Relative depth below which intent engages.
    pub intent_enter: f64,
    /// Relative depth above which engaged intent is released.
    pub intent_exit: f64,
}

impl ContinuousConfig {
    /// Two-finger vertical scroll.  Steps are wheel units.
    pub fn scroll() -> Self {
        Self {
            arm_time: 0.18,
            base_gain: 10_000.0,
            accel_factor: 12_000.0,
            min_step: 10,
            max_step: 80_000,
            size_ratio_min: 0.7,
            size_ratio_max: 1.4,
            velocity_deadzone: 0.003,
            motion_threshold: 0.003,
            stillness_timeout: 0.12,
            ..Self::common()
        }
    }

    /// Three-finger vertical volume.  Steps are key presses.
    pub fn volume() -> Self {
        Self {
            arm_time: 0.20,
            base_gain: 100.0,
            accel_factor: 200.0,
            min_step: 1,
            max_step: 30,
            size_ratio_min: 0.7,
            size_ratio_max: 1.4,
            velocity_deadzone: 0.0025,
            motion_threshold: 0.0035,
            stillness_timeout: 0.1,
            ..Self::common()
        }
    }

    /// Pinch open / close zoom.  Steps are key presses.
    pub fn zoom() -> Self {
        Self {
            arm_time: 0.18,
            base_gain: 10.0,
            accel_factor: 1.5,
            min_step: 1,
            max_step: 5,
            size_ratio_min: 0.3,
            size_ratio_max: 1.8,
            velocity_deadzone: 0.003,
            motion_threshold: 0.004,
            stillness_timeout: 0.1,
            ..Self::common()
        }
    }

    fn common() -> Self {
        Self {
            arm_time: 0.18,
            base_gain: 1.0,
            accel_factor: 0.0,
            min_step: 1,
            max_step: 1,
            size_compensation: true,
            size_ratio_min: 0.7,
            size_ratio_max: 1.4,
            size_alpha: 0.6,
            position_alpha: 0.7,
            pinch_alpha: 0.5,
            max_position_jump: 0.15,
            max_size_change: 0.30,
            max_pinch_jump: 0.10,
            outlier_recovery_frames: 2,
            velocity_deadzone: 0.003,
            temporal_frames: 3,
            motion_threshold: 0.003,
            stillness_timeout: 0.1,
            stillness_window: 0.1,
            require_depth_intent: true,
            intent_enter: -0.045,
            intent_exit: -0.005,
        }
    }
}

impl Default for ContinuousConfig {
    fn default() -> Self {
        Self::scroll()
    }
}

// ---------------------------------------------------------------------------
// Discrete gestures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenshotConfig {
    /// Frame-to-frame shrink of the wrist → middle-MCP scale that fires.
    pub min_scale_drop: f64,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            min_scale_drop: 0.08,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloseWindowConfig {
    /// Frame-to-frame downward centroid motion that fires.
    pub min_drop: f64,
}

impl Default for CloseWindowConfig {
    fn default() -> Self {
        Self { min_drop: 0.12 }
    }
}

// ---------------------------------------------------------------------------
// Transition gestures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseConfig {
    /// Minimum PALM hold before a FIST can toggle.
    pub min_time: f64,
    /// Maximum time from PALM arrival to the FIST.
    pub max_time: f64,
    /// Minimum time between two toggles.
    pub pause_cooldown: f64,
}

impl Default for PauseConfig {
    fn default() -> Self {
        Self {
            min_time: 0.20,
            max_time: 1.50,
            pause_cooldown: 0.50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuteConfig {
    /// PALM → FIST → PALM must complete within this many seconds.
    pub max_time: f64,
}

impl Default for MuteConfig {
    fn default() -> Self {
        Self { max_time: 1.0 }
    }
}

// ---------------------------------------------------------------------------
// TaskViewConfig
// ---------------------------------------------------------------------------

/// Two-palm approach gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskViewConfig {
    /// Delay after stabilising before approach is accumulated.
    pub arm_time: f64,
    /// Total closing distance that fires.
    pub min_approach: f64,
    /// Minimum time between two activations.
    pub cooldown: f64,
    /// Hands must start at least this far apart.
    pub min_initial_distance: f64,
    /// Per-frame closing larger than this is treated as a glitch.
    pub max_approach_speed: f64,
    pub max_position_jump: f64,
    pub outlier_recovery_frames: u32,
    pub distance_alpha: f64,
    /// Consecutive stable frames required before arming starts.
    pub stability_frames: u32,
}

impl Default for TaskViewConfig {
    fn default() -> Self {
        Self {
            arm_time: 0.15,
            min_approach: 0.15,
            cooldown: 1.5,
            min_initial_distance: 0.30,
            max_approach_speed: 0.50,
            max_position_jump: 0.20,
            outlier_recovery_frames: 2,
            distance_alpha: 0.60,
            stability_frames: 3,
        }
    }
}

// ---------------------------------------------------------------------------
// RuntimeConfig
// ---------------------------------------------------------------------------

/// Settings for the binary that feeds frames through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Global key that toggles gesture control on/off (e.g. `"F8"`).
    pub toggle_key: String,
    /// Whether gesture control is active at startup.
    pub start_enabled: bool,
    /// Pace recorded frames by their timestamps instead of as fast as possible.
    pub realtime_replay: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            toggle_key: "F8".into(),
            start_enabled: true,
            realtime_replay: true,
        }
    }
}

// ---------------------------------------------------------------------------
// GestureConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use hand_gesture_control::config::GestureConfig;
///
/// // Load (returns Default when file is missing)
/// let config = GestureConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub stabilizer: StabilizerConfig,
    pub cooldown: CooldownConfig,
    pub scroll: ContinuousConfig,
    pub volume: ContinuousConfig,
    pub zoom: ContinuousConfig,
    pub screenshot: ScreenshotConfig,
    pub close_window: CloseWindowConfig,
    pub pause: PauseConfig,
    pub mute: MuteConfig,
    pub task_view: TaskViewConfig,
    pub runtime: RuntimeConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            stabilizer: StabilizerConfig::default(),
            cooldown: CooldownConfig::default(),
            scroll: ContinuousConfig::scroll(),
            volume: ContinuousConfig::volume(),
            zoom: ContinuousConfig::zoom(),
            screenshot: ScreenshotConfig::default(),
            close_window: CloseWindowConfig::default(),
            pause: PauseConfig::default(),
            mute: MuteConfig::default(),
            task_view: TaskViewConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl GestureConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(GestureConfig::default())` when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject sizes that would leave a rolling window or average empty.
    pub fn validate(&self) -> Result<()> {
        if self.stabilizer.window == 0 {
            bail!("stabilizer.window must be at least 1");
        }
        for (name, c) in [("scroll", &self.scroll), ("volume", &self.volume), ("zoom", &self.zoom)] {
            if c.temporal_frames == 0 {
                bail!("{name}.temporal_frames must be at least 1");
            }
        }
        Ok(())
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = GestureConfig::default();
        original.save_to(&path).expect("save");

        let loaded = GestureConfig::load_from(&path).expect("load");
        assert_eq!(original, loaded);
    }

    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = GestureConfig::load_from(&path).expect("should not error");
        assert_eq!(config, GestureConfig::default());
    }

    #[test]
    fn default_values() {
        let cfg = GestureConfig::default();

        assert_eq!(cfg.stabilizer.window, 4);
        assert_eq!(cfg.stabilizer.consensus, 2);
        assert_eq!(cfg.stabilizer.min_confidence, 0.60);
        assert_eq!(cfg.cooldown.default_cooldown, 0.6);

        assert_eq!(cfg.scroll.arm_time, 0.18);
        assert_eq!(cfg.scroll.max_step, 80_000);
        assert_eq!(cfg.volume.arm_time, 0.20);
        assert_eq!(cfg.volume.max_step, 30);
        assert_eq!(cfg.zoom.size_ratio_min, 0.3);
        assert_eq!(cfg.zoom.max_pinch_jump, 0.10);
        assert_eq!(cfg.zoom.temporal_frames, 3);
        assert_eq!(cfg.volume.intent_enter, -0.045);
        assert_eq!(cfg.volume.intent_exit, -0.005);

        assert_eq!(cfg.pause.min_time, 0.20);
        assert_eq!(cfg.pause.max_time, 1.50);
        assert_eq!(cfg.mute.max_time, 1.0);
        assert_eq!(cfg.task_view.cooldown, 1.5);
        assert_eq!(cfg.runtime.toggle_key, "F8");
    }

    #[test]
    fn partial_file_is_filled_from_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(
            &path,
            "[stabilizer]\nwindow = 6\n\n[volume]\nmax_step = 10\n",
        )
        .expect("write");

        let cfg = GestureConfig::load_from(&path).expect("load");
        assert_eq!(cfg.stabilizer.window, 6);
        assert_eq!(cfg.stabilizer.consensus, 2);
        assert_eq!(cfg.volume.max_step, 10);
        // Missing fields of a present table come from ContinuousConfig::default.
        assert_eq!(cfg.volume.temporal_frames, 3);
        assert_eq!(cfg.zoom, ContinuousConfig::zoom());
    }

    #[test]
    fn zero_sized_windows_are_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("bad.toml");

        std::fs::write(&path, "[stabilizer]\nwindow = 0\n").expect("write");
        let err = GestureConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("stabilizer.window"));

        std::fs::write(&path, "[zoom]\ntemporal_frames = 0\n").expect("write");
        let err = GestureConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("zoom.temporal_frames"));
    }

    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = GestureConfig::default();
        cfg.stabilizer.min_confidence = 0.75;
        cfg.scroll.require_depth_intent = false;
        cfg.task_view.min_approach = 0.25;
        cfg.runtime.toggle_key = "F10".into();
        cfg.runtime.realtime_replay = false;

        cfg.save_to(&path).expect("save");
        let loaded = GestureConfig::load_from(&path).expect("load");

        assert_eq!(loaded.stabilizer.min_confidence, 0.75);
        assert!(!loaded.scroll.require_depth_intent);
        assert_eq!(loaded.task_view.min_approach, 0.25);
        assert_eq!(loaded.runtime.toggle_key, "F10");
        assert!(!loaded.runtime.realtime_replay);
    }
}
