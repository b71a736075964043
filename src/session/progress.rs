//! Cosmetic download progress
//!
//! The backend exposes no transfer progress, so the indicator is synthetic:
//! a recurring timer task advances a shared percentage by a random step,
//! capped below completion until the conversion call resolves. The ticker
//! must be finished or cancelled on every exit path of the download.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::core::config;

/// Shared, render-side view of the current progress percentage (0-100).
#[derive(Debug, Clone, Default)]
pub struct ProgressValue(Arc<AtomicU8>);

impl ProgressValue {
    /// Current percentage as last written by the ticker.
    pub fn percent(&self) -> u8 {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn set(&self, value: u8) {
        self.0.store(value, Ordering::Relaxed);
    }
}

/// Recurring timer task driving a [`ProgressValue`] while a conversion
/// request is pending.
///
/// Advances by a random step each tick, never past
/// [`config::progress::MAX_PRE_COMPLETE_PERCENT`] so the indicator cannot
/// imply completion early. `Drop` cancels the task as a backstop against
/// orphaned timers.
#[derive(Debug)]
pub struct ProgressTicker {
    value: ProgressValue,
    cancel: CancellationToken,
}

impl ProgressTicker {
    /// Resets `value` to zero and starts ticking it.
    pub fn start(value: ProgressValue) -> Self {
        value.set(0);
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let shared = value.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(config::progress::tick_interval());
            // The first tick completes immediately; consume it so 0% stays
            // visible for one full period.
            interval.tick().await;
            let mut percent = 0.0_f64;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        let step =
                            rand::thread_rng().gen_range(1.0..config::progress::MAX_STEP_PERCENT);
                        percent = (percent + step)
                            .min(f64::from(config::progress::MAX_PRE_COMPLETE_PERCENT));
                        shared.set(percent.round() as u8);
                    }
                }
            }
        });

        Self { value, cancel }
    }

    /// Stops the task and snaps the indicator to exactly 100%.
    pub fn complete(self) {
        self.cancel.cancel();
        self.value.set(100);
    }

    /// Stops the task, leaving the last rendered value in place.
    pub fn cancel(self) {
        self.cancel.cancel();
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
