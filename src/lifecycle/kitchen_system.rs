use super::delay_ticker::DelayTicker;
use crate::board_actor::BoardError;
use crate::clients::BoardClient;
use crate::clock::{Clock, SystemClock};
use crate::config::BoardConfig;
use crate::model::Order;
use crate::seed;
use crate::store::OrderStore;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The running kitchen board: the board actor plus its delay ticker.
///
/// `KitchenSystem` is responsible for:
/// - **Lifecycle Management**: starting the actor and the ticker, and stopping both
/// - **Dependency Wiring**: handing the clock to the actor as its context
///
/// # Example
///
/// ```ignore
/// let system = KitchenSystem::demo(&BoardConfig::default());
///
/// system.board.set_status("1".into(), OrderStatus::InProgress).await?;
/// let view = system.board.board_view(None, SortMode::Priority).await?;
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    /// Client for the board actor. Clone it freely, but drop the clones before `shutdown`.
    pub board: BoardClient,

    ticker_stop: oneshot::Sender<()>,
    ticker_handle: JoinHandle<()>,
    actor_handle: JoinHandle<()>,
}

impl KitchenSystem {
    /// Starts a board holding `orders`, timed by `clock`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &BoardConfig, orders: Vec<Order>, clock: Arc<dyn Clock>) -> Self {
        let store = OrderStore::new(orders).with_ready_policy(config.ready_notify_policy);
        let (actor, board) = crate::board_actor::new(config.channel_capacity, store);
        let actor_handle = tokio::spawn(actor.run(clock));

        let (ticker_stop, stop) = oneshot::channel();
        let ticker = DelayTicker::new(board.clone(), config.delay_check_interval());
        let ticker_handle = tokio::spawn(ticker.run(stop));

        info!(
            channel_capacity = config.channel_capacity,
            delay_check_interval_secs = config.delay_check_interval_secs,
            "Kitchen system started"
        );

        Self {
            board,
            ticker_stop,
            ticker_handle,
            actor_handle,
        }
    }

    /// Starts a board with the demo orders on the system clock.
    pub fn demo(config: &BoardConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let orders = seed::demo_orders(clock.now());
        Self::new(config, orders, clock)
    }

    /// Stops the ticker, then closes the board and waits for both tasks.
    ///
    /// Returns [`BoardError::TaskFailed`] if either task panicked.
    pub async fn shutdown(self) -> Result<(), BoardError> {
        info!("Shutting down kitchen system...");

        // The ticker may already have stopped on its own.
        let _ = self.ticker_stop.send(());
        if let Err(e) = self.ticker_handle.await {
            error!(error = %e, "Delay ticker task failed");
            return Err(BoardError::TaskFailed(format!("delay ticker: {e}")));
        }

        // The actor exits once the last client is gone.
        drop(self.board);
        if let Err(e) = self.actor_handle.await {
            error!(error = %e, "Board actor task failed");
            return Err(BoardError::TaskFailed(format!("board actor: {e}")));
        }

        info!("Kitchen system shutdown complete.");
        Ok(())
    }
}
