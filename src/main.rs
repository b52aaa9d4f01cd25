//! Pomodoro Clock - A single-session pomodoro timer
//!
//! This is the main entry point for the pomodoro-clock application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use pomodoro_clock::{
    config::Config,
    state::{AppState, Settings, TimerMode},
    api::create_router,
    tasks::tick_timer_task,
    utils::{format_time, shutdown_signal},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting pomodoro-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}", config.host, config.port);

    let settings = Settings::default();
    let state = Arc::new(AppState::new(settings));
    info!("Session ready in focus mode at {}", format_time(settings.duration_for(TimerMode::Focus)));

    // Start the tick background task
    let tick_state = Arc::clone(&state);
    let tick_task = tokio::spawn(async move {
        tick_timer_task(tick_state).await;
    });

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /toggle      - Start or pause the countdown");
    info!("  POST /mode/:mode  - Switch to focus, short-break or long-break");
    info!("  GET  /settings    - Current settings");
    info!("  PUT  /settings    - Apply new settings (resets the countdown)");
    info!("  GET  /status      - Timer read-out");
    info!("  GET  /health      - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    tick_task.abort();
    info!("Server shutdown complete");
    Ok(())
}
