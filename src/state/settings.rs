//! Session settings record and the store that owns it

use serde::{Deserialize, Serialize};

use super::TimerMode;

/// Default focus interval length in minutes
pub const DEFAULT_POMODORO_MINUTES: u32 = 25;
/// Default short break length in minutes
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break length in minutes
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Clock face typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl Font {
    /// Display family rendered for this choice
    pub fn family(&self) -> &'static str {
        match self {
            Font::Sans => "Kumbh Sans",
            Font::Serif => "Roboto Slab",
            Font::Mono => "Space Mono",
        }
    }
}

/// Accent color used for the progress ring and active mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Coral,
    Cyan,
    Violet,
}

impl AccentColor {
    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::Coral => "#f87070",
            AccentColor::Cyan => "#70f3f8",
            AccentColor::Violet => "#d881f8",
        }
    }
}

/// User-configurable session settings, replaced as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub pomodoro_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub font: Font,
    pub accent_color: AccentColor,
}

impl Settings {
    /// Configured length of a mode in minutes
    pub fn minutes_for(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Focus => self.pomodoro_minutes,
            TimerMode::ShortBreak => self.short_break_minutes,
            TimerMode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured length of a mode in seconds
    pub fn duration_for(&self, mode: TimerMode) -> u64 {
        u64::from(self.minutes_for(mode)) * 60
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pomodoro_minutes: DEFAULT_POMODORO_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            font: Font::default(),
            accent_color: AccentColor::default(),
        }
    }
}

/// Anything that must recompute when the settings record is swapped
pub trait SettingsListener {
    fn on_settings_changed(&mut self, settings: &Settings);
}

/// Owner of the current settings record.
///
/// Only whole-record replacement is exposed. Values are trusted: clamping
/// belongs to whoever builds the record (see [`crate::editor::SettingsEditor`]).
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self { current: settings }
    }

    /// Current settings snapshot
    pub fn get(&self) -> Settings {
        self.current
    }

    /// Swap in a complete record and notify the listener before returning
    pub fn replace<L>(&mut self, settings: Settings, listener: &mut L)
    where
        L: SettingsListener + ?Sized,
    {
        self.current = settings;
        listener.on_settings_changed(&self.current);
    }
}
