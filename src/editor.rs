//! Settings editing: a scratch copy of the settings with clamped durations
//!
//! The store accepts whatever record it is handed. This is the layer that
//! keeps every duration within [`MIN_MINUTES`, `MAX_MINUTES`] before
//! [`crate::state::AppState::replace_settings`] is called.

use serde::{Deserialize, Serialize};

use crate::state::{AccentColor, Font, Settings, TimerMode};

pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 60;

/// Clamp a raw minute entry to the accepted range
pub fn clamp_minutes(value: i64) -> u32 {
    value.clamp(i64::from(MIN_MINUTES), i64::from(MAX_MINUTES)) as u32
}

/// Raw settings as submitted by a client, durations not yet clamped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsForm {
    pub pomodoro_minutes: i64,
    pub short_break_minutes: i64,
    pub long_break_minutes: i64,
    pub font: Font,
    pub accent_color: AccentColor,
}

/// Scratch copy of the settings being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsEditor {
    draft: Settings,
}

impl SettingsEditor {
    /// Start editing from the current settings
    pub fn from_settings(settings: Settings) -> Self {
        Self { draft: settings }
    }

    /// Build a draft from a submitted form, clamping every duration
    pub fn from_form(form: &SettingsForm) -> Self {
        let mut editor = Self::from_settings(Settings::default());
        editor.set_minutes(TimerMode::Focus, form.pomodoro_minutes);
        editor.set_minutes(TimerMode::ShortBreak, form.short_break_minutes);
        editor.set_minutes(TimerMode::LongBreak, form.long_break_minutes);
        editor.set_font(form.font);
        editor.set_accent_color(form.accent_color);
        editor
    }

    /// Step a duration up or down, staying within bounds
    pub fn adjust(&mut self, mode: TimerMode, delta: i64) {
        let current = i64::from(self.draft.minutes_for(mode));
        self.set_minutes(mode, current.saturating_add(delta));
    }

    /// Direct numeric entry for a duration
    pub fn set_minutes(&mut self, mode: TimerMode, value: i64) {
        let minutes = clamp_minutes(value);
        match mode {
            TimerMode::Focus => self.draft.pomodoro_minutes = minutes,
            TimerMode::ShortBreak => self.draft.short_break_minutes = minutes,
            TimerMode::LongBreak => self.draft.long_break_minutes = minutes,
        }
    }

    pub fn set_font(&mut self, font: Font) {
        self.draft.font = font;
    }

    pub fn set_accent_color(&mut self, color: AccentColor) {
        self.draft.accent_color = color;
    }

    /// The draft as it currently stands
    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    /// Finish editing and hand back the complete record
    pub fn finish(self) -> Settings {
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(minutes: i64) -> SettingsForm {
        SettingsForm {
            pomodoro_minutes: minutes,
            short_break_minutes: minutes,
            long_break_minutes: minutes,
            font: Font::Mono,
            accent_color: AccentColor::Violet,
        }
    }

    #[test]
    fn test_out_of_range_entries_are_clamped() {
        let low = SettingsEditor::from_form(&form(0)).finish();
        assert_eq!(low.pomodoro_minutes, 1);
        assert_eq!(low.short_break_minutes, 1);
        assert_eq!(low.long_break_minutes, 1);

        let high = SettingsEditor::from_form(&form(61)).finish();
        assert_eq!(high.pomodoro_minutes, 60);
        assert_eq!(high.short_break_minutes, 60);
        assert_eq!(high.long_break_minutes, 60);
        assert_eq!(high.font, Font::Mono);
        assert_eq!(high.accent_color, AccentColor::Violet);
    }

    #[test]
    fn test_adjust_stops_at_bounds() {
        let mut editor = SettingsEditor::from_settings(Settings::default());

        editor.adjust(TimerMode::ShortBreak, -10);
        assert_eq!(editor.draft().short_break_minutes, 1);

        editor.adjust(TimerMode::LongBreak, 100);
        assert_eq!(editor.draft().long_break_minutes, 60);

        editor.adjust(TimerMode::Focus, 1);
        assert_eq!(editor.draft().pomodoro_minutes, 26);
    }

    #[test]
    fn test_clamp_minutes_extremes() {
        assert_eq!(clamp_minutes(i64::MIN), MIN_MINUTES);
        assert_eq!(clamp_minutes(-5), MIN_MINUTES);
        assert_eq!(clamp_minutes(30), 30);
        assert_eq!(clamp_minutes(i64::MAX), MAX_MINUTES);
    }
}
