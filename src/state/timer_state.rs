//! Timer state structure and transition rules

use serde::{Deserialize, Serialize};

use super::{Settings, SettingsListener};

/// The three pomodoro phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerMode {
    #[default]
    #[serde(alias = "pomodoro")]
    Focus,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "short-break",
            TimerMode::LongBreak => "long-break",
        }
    }
}

impl std::fmt::Display for TimerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Countdown state for the current mode.
///
/// Durations are not cached here: every transition that needs one is handed
/// the current [`Settings`], so the record in the store stays the single
/// source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub remaining_seconds: u64,
    pub running: bool,
    /// Identifies the current run. Bumped whenever `running` is entered or
    /// forced off so a tick armed for an earlier run can be told apart.
    #[serde(skip)]
    pub epoch: u64,
}

impl TimerState {
    /// Create a paused timer at the full focus duration
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: TimerMode::Focus,
            remaining_seconds: settings.duration_for(TimerMode::Focus),
            running: false,
            epoch: 0,
        }
    }

    /// Select a mode and reset to its full duration, paused.
    /// Reselecting the current mode is a plain reset.
    pub fn switch_mode(&mut self, mode: TimerMode, settings: &Settings) {
        self.mode = mode;
        self.reset(settings);
    }

    /// Start or pause. An expired countdown restarts at full duration.
    pub fn toggle(&mut self, settings: &Settings) {
        if self.remaining_seconds == 0 {
            self.remaining_seconds = settings.duration_for(self.mode);
        }
        self.running = !self.running;
        self.epoch += 1;
    }

    /// Advance by one second. Returns whether the timer is still running.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.stop();
        }
        self.running
    }

    /// Full length of the current mode in seconds
    pub fn duration_for(&self, settings: &Settings) -> u64 {
        settings.duration_for(self.mode)
    }

    /// Remaining fraction of the current mode, 1.0 when nothing has elapsed
    pub fn progress(&self, settings: &Settings) -> f64 {
        let duration = self.duration_for(settings);
        if duration == 0 {
            return 1.0;
        }
        self.remaining_seconds as f64 / duration as f64
    }

    /// Caption for the start/pause control
    pub fn label(&self) -> &'static str {
        if self.running { "pause" } else { "start" }
    }

    fn reset(&mut self, settings: &Settings) {
        self.remaining_seconds = settings.duration_for(self.mode);
        self.stop();
    }

    fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.epoch += 1;
        }
    }
}

impl SettingsListener for TimerState {
    fn on_settings_changed(&mut self, settings: &Settings) {
        self.reset(settings);
    }
}
