//! Periodic delay checks.

use crate::clients::BoardClient;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Background task that asks the board to check for delayed orders on a fixed period.
///
/// The first check happens one full period after the task starts, not immediately.
pub struct DelayTicker {
    board: BoardClient,
    period: Duration,
}

impl DelayTicker {
    pub fn new(board: BoardClient, period: Duration) -> Self {
        Self { board, period }
    }

    /// Runs until `stop` fires (or its sender is dropped) or the board goes away.
    ///
    /// No check is issued after `stop` has been observed.
    pub async fn run(self, mut stop: oneshot::Receiver<()>) {
        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(period_secs = self.period.as_secs(), "Delay ticker started");

        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    match self.board.check_delays().await {
                        Ok(raised) => debug!(raised, "Delay check"),
                        Err(e) => {
                            warn!(error = %e, "Delay check failed, stopping ticker");
                            break;
                        }
                    }
                }
            }
        }

        info!("Delay ticker stopped");
    }
}
