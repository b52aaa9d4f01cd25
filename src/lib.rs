//! Pomodoro Clock - A single-session pomodoro timer
//!
//! This library provides the timer state machine, the settings store it
//! depends on, the settings editor that clamps user input, and a small HTTP
//! surface that lets a presentation client drive one session.

pub mod config;
pub mod state;
pub mod editor;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, Settings, TimerMode, TimerState};
pub use editor::SettingsEditor;
pub use api::create_router;
pub use utils::{format_time, shutdown_signal};
