//! State management module
//!
//! This module contains the settings store, the timer state machine and the
//! shared application state that wires them together.

pub mod settings;
pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use settings::{AccentColor, Font, Settings, SettingsListener, SettingsStore};
pub use app_state::AppState;
pub use timer_state::{TimerMode, TimerState};
