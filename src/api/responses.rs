//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{Settings, TimerMode, TimerState},
    utils::{format_time, gradient_color},
};

/// Everything a clock face needs to render one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerView {
    pub mode: TimerMode,
    pub remaining_seconds: u64,
    pub duration_seconds: u64,
    pub running: bool,
    /// `MM:SS`
    pub display: String,
    /// Start/pause caption
    pub label: String,
    /// Remaining fraction of the current mode
    pub progress: f64,
    pub gradient: String,
    pub font_family: String,
    pub accent_hex: String,
}

impl TimerView {
    pub fn new(timer: &TimerState, settings: &Settings) -> Self {
        let progress = timer.progress(settings);
        Self {
            mode: timer.mode,
            remaining_seconds: timer.remaining_seconds,
            duration_seconds: timer.duration_for(settings),
            running: timer.running,
            display: format_time(timer.remaining_seconds),
            label: timer.label().to_string(),
            progress,
            gradient: gradient_color(progress),
            font_family: settings.font.family().to_string(),
            accent_hex: settings.accent_color.hex().to_string(),
        }
    }
}

/// API response structure for intent endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    /// Create a new API response, status derived from the timer
    pub fn new(message: String, timer: TimerView) -> Self {
        let status = if timer.running { "running" } else { "paused" };
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }
}

/// Full status read-out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub settings: Settings,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Response to a settings update
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: Settings,
    pub timer: TimerView,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
