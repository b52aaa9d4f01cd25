//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::{
    editor::{SettingsEditor, SettingsForm},
    state::{AppState, Settings, TimerMode},
};
use super::responses::{ApiResponse, HealthResponse, SettingsResponse, StatusResponse, TimerView};

/// Handle POST /toggle - Start or pause the countdown
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let (settings, timer) = state.toggle().map_err(|e| {
        error!("Failed to toggle timer: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let view = TimerView::new(&timer, &settings);
    let message = if view.running { "Timer started" } else { "Timer paused" };
    Ok(Json(ApiResponse::new(message.to_string(), view)))
}

/// Handle POST /mode/:mode - Switch mode and reset the countdown
pub async fn mode_handler(
    State(state): State<Arc<AppState>>,
    Path(mode): Path<TimerMode>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let (settings, timer) = state.switch_mode(mode).map_err(|e| {
        error!("Failed to switch mode to {}: {}", mode, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let view = TimerView::new(&timer, &settings);
    Ok(Json(ApiResponse::new(format!("Switched to {}", mode), view)))
}

/// Handle GET /settings - Return the current settings
pub async fn get_settings_handler(State(state): State<Arc<AppState>>) -> Result<Json<Settings>, StatusCode> {
    match state.get_settings() {
        Ok(settings) => Ok(Json(settings)),
        Err(e) => {
            error!("Failed to get settings: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle PUT /settings - Clamp the submitted form and apply it
pub async fn put_settings_handler(
    State(state): State<Arc<AppState>>,
    Json(form): Json<SettingsForm>,
) -> Result<Json<SettingsResponse>, StatusCode> {
    let settings = SettingsEditor::from_form(&form).finish();
    info!("Settings update requested");

    let (settings, timer) = state.replace_settings(settings).map_err(|e| {
        error!("Failed to apply settings: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(SettingsResponse {
        timer: TimerView::new(&timer, &settings),
        settings,
    }))
}

/// Handle GET /status - Return the timer read-out
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let (settings, timer) = match state.snapshot() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to get state snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer: TimerView::new(&timer, &settings),
        settings,
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}
