//! One-second tick background task

use std::{sync::{Arc, Weak}, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Period between ticks
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that drives the countdown while the timer is running.
///
/// At most one interval exists at a time. It is armed when a running snapshot
/// with a new epoch is published and dropped as soon as a snapshot arrives
/// that is paused or belongs to another run. The task only holds a weak
/// reference to the session, so it returns once the last `Arc<AppState>` is
/// dropped and the update channel closes.
pub async fn tick_timer_task(state: Arc<AppState>) {
    info!("Starting tick timer task");

    let mut timer_rx = state.subscribe_timer();
    let session: Weak<AppState> = Arc::downgrade(&state);
    drop(state);

    loop {
        let current = timer_rx.borrow_and_update().clone();

        if !current.running {
            // Paused or expired, wait for the next transition
            if timer_rx.changed().await.is_err() {
                debug!("Timer channel closed, stopping tick task");
                return;
            }
            continue;
        }

        let epoch = current.epoch;
        debug!("Arming tick interval for epoch {} ({} mode, {}s left)",
               epoch, current.mode, current.remaining_seconds);

        // First tick lands one full period after arming
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let Some(state) = session.upgrade() else {
                        debug!("Session dropped, stopping tick task");
                        return;
                    };
                    match state.tick(epoch) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => {
                            error!("Failed to advance timer: {}", e);
                            break;
                        }
                    }
                }

                changed = timer_rx.changed() => {
                    if changed.is_err() {
                        debug!("Timer channel closed, stopping tick task");
                        return;
                    }
                    let (running, current_epoch) = {
                        let update = timer_rx.borrow();
                        (update.running, update.epoch)
                    };
                    // Our own tick publishes too, only another run cancels
                    if !running || current_epoch != epoch {
                        debug!("Cancelling tick interval for epoch {}", epoch);
                        break;
                    }
                }
            }
        }
    }
}
