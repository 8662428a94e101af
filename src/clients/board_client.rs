//! # Board Client
//!
//! Provides a high-level API for interacting with the board actor.
//! It wraps a `StateClient<KitchenBoard>` and exposes one method per store operation.
use crate::board_actor::{BoardAction, BoardActionResult, BoardError, KitchenBoard};
use crate::model::{Notification, Order, OrderId, OrderPriority, OrderStatus};
use crate::store::{BoardSnapshot, SortMode};
use async_trait::async_trait;
use store_actor::{ActorClient, FrameworkError, StateClient};
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Client for interacting with the board actor.
#[derive(Clone)]
pub struct BoardClient {
    inner: StateClient<KitchenBoard>,
}

impl BoardClient {
    pub fn new(inner: StateClient<KitchenBoard>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<KitchenBoard> for BoardClient {
    type Error = BoardError;

    fn inner(&self) -> &StateClient<KitchenBoard> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BoardError::ActorCommunicationError(e.to_string())
    }
}

impl BoardClient {
    async fn send(&self, action: BoardAction) -> Result<BoardActionResult, BoardError> {
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }

    /// Moves an order to `status`. Returns `false` if the order does not exist.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<bool, BoardError> {
        debug!("Sending request");
        match self.send(BoardAction::SetStatus { id, status }).await? {
            BoardActionResult::SetStatus(found) => Ok(found),
            _ => Err(BoardError::UnexpectedReply("SetStatus")),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_priority(&self, id: OrderId, priority: OrderPriority) -> Result<bool, BoardError> {
        debug!("Sending request");
        match self.send(BoardAction::SetPriority { id, priority }).await? {
            BoardActionResult::SetPriority(found) => Ok(found),
            _ => Err(BoardError::UnexpectedReply("SetPriority")),
        }
    }

    /// All orders, or those in `status`, in board order.
    #[instrument(skip(self))]
    pub async fn filtered_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, BoardError> {
        match self.send(BoardAction::FilteredOrders(status)).await? {
            BoardActionResult::FilteredOrders(orders) => Ok(orders),
            _ => Err(BoardError::UnexpectedReply("FilteredOrders")),
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_notified(&self, id: OrderId) -> Result<bool, BoardError> {
        debug!("Sending request");
        match self.send(BoardAction::MarkNotified(id)).await? {
            BoardActionResult::MarkNotified(found) => Ok(found),
            _ => Err(BoardError::UnexpectedReply("MarkNotified")),
        }
    }

    /// Removes the notification at `index`, returning it if the index was in range.
    #[instrument(skip(self))]
    pub async fn dismiss_notification(&self, index: usize) -> Result<Option<Notification>, BoardError> {
        debug!("Sending request");
        match self.send(BoardAction::DismissNotification(index)).await? {
            BoardActionResult::DismissNotification(dismissed) => Ok(dismissed),
            _ => Err(BoardError::UnexpectedReply("DismissNotification")),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_progress(&self, id: OrderId, progress: u8) -> Result<bool, BoardError> {
        debug!("Sending request");
        match self.send(BoardAction::UpdateProgress { id, progress }).await? {
            BoardActionResult::UpdateProgress(found) => Ok(found),
            _ => Err(BoardError::UnexpectedReply("UpdateProgress")),
        }
    }

    /// Runs a delay check at the board's current time.
    ///
    /// Returns how many orders newly became delayed.
    #[instrument(skip(self))]
    pub async fn check_delays(&self) -> Result<usize, BoardError> {
        match self.send(BoardAction::CheckDelays).await? {
            BoardActionResult::CheckDelays(raised) => Ok(raised),
            _ => Err(BoardError::UnexpectedReply("CheckDelays")),
        }
    }

    /// The orders as the dashboard shows them: filtered, then sorted.
    #[instrument(skip(self))]
    pub async fn board_view(&self, status: Option<OrderStatus>, sort: SortMode) -> Result<Vec<Order>, BoardError> {
        match self.send(BoardAction::BoardView { status, sort }).await? {
            BoardActionResult::BoardView(orders) => Ok(orders),
            _ => Err(BoardError::UnexpectedReply("BoardView")),
        }
    }

    pub async fn orders(&self) -> Result<Vec<Order>, BoardError> {
        Ok(self.snapshot().await?.orders)
    }

    /// The notification queue, oldest first.
    pub async fn notifications(&self) -> Result<Vec<Notification>, BoardError> {
        Ok(self.snapshot().await?.notifications)
    }

    /// Receiver that sees a new [`BoardSnapshot`] after every change to the board.
    pub fn subscribe(&self) -> watch::Receiver<BoardSnapshot> {
        self.inner.subscribe()
    }
}
