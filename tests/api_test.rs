use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use pomodoro_clock::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn app() -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::default());
    let router = create_router(Arc::clone(&state));
    (state, router)
}

#[tokio::test]
async fn test_status_defaults() {
    let (_, app) = app();

    let (status, body) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["mode"], "focus");
    assert_eq!(body["timer"]["remaining_seconds"], 1500);
    assert_eq!(body["timer"]["duration_seconds"], 1500);
    assert_eq!(body["timer"]["display"], "25:00");
    assert_eq!(body["timer"]["label"], "start");
    assert_eq!(body["timer"]["progress"], 1.0);
    assert_eq!(body["timer"]["font_family"], "Kumbh Sans");
    assert_eq!(body["timer"]["accent_hex"], "#f87070");
    assert_eq!(body["settings"]["short_break_minutes"], 5);
    assert!(body["last_action"].is_null());
}

#[tokio::test]
async fn test_toggle_flips_label() {
    let (state, app) = app();

    let (status, body) = send(&app, Method::POST, "/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["timer"]["label"], "pause");
    assert!(state.get_timer_state().unwrap().running);

    let (_, body) = send(&app, Method::POST, "/toggle", None).await;
    assert_eq!(body["status"], "paused");
    assert_eq!(body["timer"]["label"], "start");
}

#[tokio::test]
async fn test_mode_switch_resets() {
    let (_, app) = app();
    send(&app, Method::POST, "/toggle", None).await;

    let (status, body) = send(&app, Method::POST, "/mode/long-break", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["mode"], "long-break");
    assert_eq!(body["timer"]["remaining_seconds"], 900);
    assert_eq!(body["timer"]["running"], false);

    let (status, body) = send(&app, Method::POST, "/mode/pomodoro", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["mode"], "focus");

    let (_, body) = send(&app, Method::GET, "/status", None).await;
    assert_eq!(body["last_action"], "mode:focus");
}

#[tokio::test]
async fn test_unknown_mode_is_rejected() {
    let (state, app) = app();

    let (status, _) = send(&app, Method::POST, "/mode/nap", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(state.get_timer_state().unwrap().remaining_seconds, 1500);
}

#[tokio::test]
async fn test_settings_are_clamped_and_reset_timer() {
    let (state, app) = app();
    send(&app, Method::POST, "/toggle", None).await;

    let form = json!({
        "pomodoro_minutes": 0,
        "short_break_minutes": 61,
        "long_break_minutes": 20,
        "font": "mono",
        "accent_color": "violet"
    });
    let (status, body) = send(&app, Method::PUT, "/settings", Some(form)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings"]["pomodoro_minutes"], 1);
    assert_eq!(body["settings"]["short_break_minutes"], 60);
    assert_eq!(body["settings"]["long_break_minutes"], 20);
    assert_eq!(body["timer"]["remaining_seconds"], 60);
    assert_eq!(body["timer"]["running"], false);
    assert_eq!(body["timer"]["font_family"], "Space Mono");
    assert_eq!(body["timer"]["accent_hex"], "#d881f8");

    let (_, body) = send(&app, Method::GET, "/settings", None).await;
    assert_eq!(body["font"], "mono");
    assert_eq!(state.get_settings().unwrap().pomodoro_minutes, 1);
}

#[tokio::test]
async fn test_health() {
    let (_, app) = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
