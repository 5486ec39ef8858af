//! Routes each stabilized frame through the detectors in a fixed order.

use crate::config::GestureConfig;
use crate::domain::{FrameData, Trigger};
use crate::gestures::{
    CloseWindowGesture, Gesture, MuteToggleGesture, PauseResumeGesture, ScreenshotGesture,
    ScrollGesture, TaskViewGesture, VolumeGesture, ZoomGesture,
};
use crate::stabilize::CooldownManager;

/// Owns every detector plus the cooldown table they share.
///
/// Order per frame:
///
/// 1. PauseResume, returning immediately if it fires
/// 2. MuteToggle, returning immediately if it fires
/// 3. nothing else while paused
/// 4. single-hand gestures when a primary hand is present
/// 5. two-hand gestures
pub struct GestureManager {
    cooldowns: CooldownManager,
    pause: PauseResumeGesture,
    mute: MuteToggleGesture,
    single_hand: Vec<Box<dyn Gesture + Send>>,
    two_hand: Vec<Box<dyn Gesture + Send>>,
}

impl GestureManager {
    pub fn new(config: &GestureConfig) -> Self {
        let single_hand: Vec<Box<dyn Gesture + Send>> = vec![
            Box::new(ScrollGesture::new(&config.scroll)),
            Box::new(VolumeGesture::new(&config.volume)),
            Box::new(ZoomGesture::new(&config.zoom)),
            Box::new(ScreenshotGesture::new(&config.screenshot)),
            Box::new(CloseWindowGesture::new(&config.close_window)),
        ];
        let two_hand: Vec<Box<dyn Gesture + Send>> =
            vec![Box::new(TaskViewGesture::new(&config.task_view))];

        Self {
            cooldowns: CooldownManager::from_config(&config.cooldown),
            pause: PauseResumeGesture::new(&config.pause),
            mute: MuteToggleGesture::new(&config.mute),
            single_hand,
            two_hand,
        }
    }

    pub fn process(&mut self, frame: &FrameData) -> Vec<Trigger> {
        let out = self.pause.detect(frame, &mut self.cooldowns);
        if !out.is_empty() {
            log_fired(self.pause.name(), &out);
            return out;
        }
        let out = self.mute.detect(frame, &mut self.cooldowns);
        if !out.is_empty() {
            log_fired(self.mute.name(), &out);
            return out;
        }
        if self.pause.is_paused() {
            return Vec::new();
        }

        let mut out = Vec::new();
        if frame.primary_hand().is_some() {
            for gesture in &mut self.single_hand {
                let triggers = gesture.detect(frame, &mut self.cooldowns);
                log_fired(gesture.name(), &triggers);
                out.extend(triggers);
            }
        }
        for gesture in &mut self.two_hand {
            let triggers = gesture.detect(frame, &mut self.cooldowns);
            log_fired(gesture.name(), &triggers);
            out.extend(triggers);
        }
        out
    }

    /// Reset every detector.  The pause flag and cooldown table are kept.
    pub fn reset_all(&mut self) {
        self.pause.reset();
        self.mute.reset();
        for gesture in self.single_hand.iter_mut().chain(self.two_hand.iter_mut()) {
            gesture.reset();
        }
        log::debug!("gestures: all detectors reset");
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn cooldowns(&self) -> &CooldownManager {
        &self.cooldowns
    }
}

fn log_fired(name: &str, triggers: &[Trigger]) {
    for t in triggers {
        log::info!("gestures: {name} -> {} ({})", t.event, t.magnitude);
    }
}
