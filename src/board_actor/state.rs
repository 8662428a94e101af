//! [`ActorState`] implementation for the kitchen board.
//!
//! The board actor owns one [`OrderStore`]. Its context is the [`Clock`] used to stamp
//! status changes and to run delay checks.

use super::actions::{BoardAction, BoardActionResult};
use crate::clock::Clock;
use crate::store::{board_view, BoardSnapshot, OrderStore};
use async_trait::async_trait;
use std::convert::Infallible;
use std::sync::Arc;
use store_actor::ActorState;
use tracing::info;

/// The kitchen board as owned by its actor.
#[derive(Debug)]
pub struct KitchenBoard {
    store: OrderStore,
}

impl KitchenBoard {
    pub fn new(store: OrderStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }
}

#[async_trait]
impl ActorState for KitchenBoard {
    type Action = BoardAction;
    type ActionResult = BoardActionResult;
    type Snapshot = BoardSnapshot;
    type Context = Arc<dyn Clock>;
    type Error = Infallible;

    fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    async fn on_start(&mut self, _clock: &Arc<dyn Clock>) -> Result<(), Infallible> {
        info!(
            orders = self.store.orders().len(),
            policy = ?self.store.ready_policy(),
            "Board open"
        );
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BoardAction,
        clock: &Arc<dyn Clock>,
    ) -> Result<BoardActionResult, Infallible> {
        let result = match action {
            BoardAction::SetStatus { id, status } => {
                BoardActionResult::SetStatus(self.store.set_status(&id, status, clock.now()))
            }
            BoardAction::SetPriority { id, priority } => {
                BoardActionResult::SetPriority(self.store.set_priority(&id, priority))
            }
            BoardAction::MarkNotified(id) => {
                BoardActionResult::MarkNotified(self.store.mark_notified(&id))
            }
            BoardAction::UpdateProgress { id, progress } => {
                BoardActionResult::UpdateProgress(self.store.update_progress(&id, progress))
            }
            BoardAction::DismissNotification(index) => {
                BoardActionResult::DismissNotification(self.store.dismiss_notification(index))
            }
            BoardAction::CheckDelays => {
                BoardActionResult::CheckDelays(self.store.check_delays(clock.now()))
            }
            BoardAction::FilteredOrders(status) => BoardActionResult::FilteredOrders(
                self.store.filtered_orders(status).into_iter().cloned().collect(),
            ),
            BoardAction::BoardView { status, sort } => {
                BoardActionResult::BoardView(board_view(self.store.orders(), status, sort))
            }
        };
        Ok(result)
    }

    async fn on_stop(&self, _clock: &Arc<dyn Clock>) {
        info!(
            orders = self.store.orders().len(),
            notifications = self.store.notifications().len(),
            "Board closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::{Order, OrderId, OrderStatus};
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn test_status_change_is_stamped_with_the_clock() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
        let clock = ManualClock::new(start);
        let context: Arc<dyn Clock> = Arc::new(clock.clone());
        let mut board = KitchenBoard::new(OrderStore::new(vec![Order::new("1", "001", "15", start, 25)]));

        clock.advance(Duration::minutes(3));
        let result = board
            .handle_action(
                BoardAction::SetStatus {
                    id: OrderId::from("1"),
                    status: OrderStatus::InProgress,
                },
                &context,
            )
            .await
            .unwrap();

        assert_eq!(result, BoardActionResult::SetStatus(true));
        let order = board.store().order(&OrderId::from("1")).unwrap();
        assert_eq!(order.started_at, Some(start + Duration::minutes(3)));
    }

    #[tokio::test]
    async fn test_read_actions_do_not_change_the_snapshot() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap();
        let context: Arc<dyn Clock> = Arc::new(ManualClock::new(start));
        let mut board = KitchenBoard::new(OrderStore::new(vec![Order::new("1", "001", "15", start, 25)]));
        let before = board.snapshot();

        let result = board
            .handle_action(BoardAction::FilteredOrders(Some(OrderStatus::Pending)), &context)
            .await
            .unwrap();

        assert!(matches!(result, BoardActionResult::FilteredOrders(ref orders) if orders.len() == 1));
        assert_eq!(board.snapshot(), before);
    }
}
