//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::{Settings, SettingsStore, TimerMode, TimerState};

/// Shared session state: the settings store upstream of the timer.
///
/// Lock order is always `settings` then `timer`. Every mutation publishes the
/// resulting timer snapshot on `timer_update_tx`, which is what arms and
/// cancels the tick task.
#[derive(Debug)]
pub struct AppState {
    /// Current settings record
    pub settings: Arc<Mutex<SettingsStore>>,
    /// Countdown state
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Server metadata
    pub start_time: Instant,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Channel for timer updates
    pub timer_update_tx: watch::Sender<TimerState>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerState>,
}

impl AppState {
    /// Create a session with the given settings, paused in focus mode
    pub fn new(settings: Settings) -> Self {
        let timer_state = TimerState::new(&settings);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer_state.clone());

        Self {
            settings: Arc::new(Mutex::new(SettingsStore::new(settings))),
            timer_state: Arc::new(Mutex::new(timer_state)),
            start_time: Instant::now(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            timer_update_tx,
            _timer_update_rx: timer_update_rx,
        }
    }

    /// Subscribe to timer snapshots
    pub fn subscribe_timer(&self) -> watch::Receiver<TimerState> {
        self.timer_update_tx.subscribe()
    }

    /// Get current settings
    pub fn get_settings(&self) -> Result<Settings, String> {
        self.settings.lock()
            .map(|store| store.get())
            .map_err(|e| format!("Failed to lock settings: {}", e))
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| state.clone())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Settings and timer read under the same locks, so they agree
    pub fn snapshot(&self) -> Result<(Settings, TimerState), String> {
        let store = self.settings.lock()
            .map_err(|e| format!("Failed to lock settings: {}", e))?;
        let timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;
        Ok((store.get(), timer.clone()))
    }

    /// Apply a transition to the timer with the current settings and publish the result.
    /// Returns the settings the transition saw alongside the state it produced.
    pub fn update_timer<F>(&self, action: &str, updater: F) -> Result<(Settings, TimerState), String>
    where
        F: FnOnce(&mut TimerState, &Settings),
    {
        let store = self.settings.lock()
            .map_err(|e| format!("Failed to lock settings: {}", e))?;
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let settings = store.get();
        updater(&mut *timer, &settings);
        let new_state = timer.clone();
        self.publish(new_state.clone());
        drop(timer);
        drop(store);

        self.record_action(action);
        Ok((settings, new_state))
    }

    /// Select a mode, resetting the countdown
    pub fn switch_mode(&self, mode: TimerMode) -> Result<(Settings, TimerState), String> {
        info!("Switching mode to: {}", mode);
        self.update_timer(&format!("mode:{}", mode), |timer, settings| {
            timer.switch_mode(mode, settings)
        })
    }

    /// Start or pause the countdown
    pub fn toggle(&self) -> Result<(Settings, TimerState), String> {
        let (settings, state) = self.update_timer("toggle", |timer, settings| timer.toggle(settings))?;
        info!("Timer {} in {} mode at {}s",
              if state.running { "started" } else { "paused" }, state.mode, state.remaining_seconds);
        Ok((settings, state))
    }

    /// Replace the whole settings record. The timer is reset synchronously,
    /// before either lock is released.
    pub fn replace_settings(&self, settings: Settings) -> Result<(Settings, TimerState), String> {
        let mut store = self.settings.lock()
            .map_err(|e| format!("Failed to lock settings: {}", e))?;
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        store.replace(settings, &mut *timer);
        let new_state = timer.clone();
        self.publish(new_state.clone());
        drop(timer);
        drop(store);

        info!("Settings applied: focus={}m short={}m long={}m font={:?} color={:?}",
              settings.pomodoro_minutes, settings.short_break_minutes, settings.long_break_minutes,
              settings.font, settings.accent_color);
        self.record_action("settings");
        Ok((settings, new_state))
    }

    /// Advance the countdown by one second on behalf of the run `epoch`.
    ///
    /// Returns `Ok(false)` when the timer is no longer running for that epoch,
    /// including when the tick was armed for a run that has since ended.
    pub fn tick(&self, epoch: u64) -> Result<bool, String> {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        if timer.epoch != epoch || !timer.running {
            debug!("Ignoring stale tick for epoch {} (current {})", epoch, timer.epoch);
            return Ok(false);
        }

        let still_running = timer.tick();
        let new_state = timer.clone();
        self.publish(new_state);
        drop(timer);

        if !still_running {
            info!("Countdown finished");
        }
        Ok(still_running)
    }

    /// Calculate session uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    // Called with the timer lock held so snapshots go out in mutation order
    fn publish(&self, state: TimerState) {
        if let Err(e) = self.timer_update_tx.send(state) {
            warn!("Failed to send timer update: {}", e);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
