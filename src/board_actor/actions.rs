//! Actions for the board actor.
//!
//! Each variant is one [`OrderStore`](crate::store::OrderStore) operation. Operations that
//! stamp a time do not carry one; the actor reads it from its clock when it handles them.

use crate::model::{Notification, Order, OrderId, OrderPriority, OrderStatus};
use crate::store::SortMode;

#[derive(Debug, Clone)]
pub enum BoardAction {
    SetStatus { id: OrderId, status: OrderStatus },
    SetPriority { id: OrderId, priority: OrderPriority },
    MarkNotified(OrderId),
    UpdateProgress { id: OrderId, progress: u8 },
    /// Removes the notification at this position in the queue.
    DismissNotification(usize),
    CheckDelays,
    FilteredOrders(Option<OrderStatus>),
    BoardView {
        status: Option<OrderStatus>,
        sort: SortMode,
    },
}

/// Results from BoardActions - variants match 1:1 with BoardAction
#[derive(Debug, Clone, PartialEq)]
pub enum BoardActionResult {
    /// Whether the order existed.
    SetStatus(bool),
    SetPriority(bool),
    MarkNotified(bool),
    UpdateProgress(bool),
    /// The removed notification, if the index was in range.
    DismissNotification(Option<Notification>),
    /// How many orders newly became delayed.
    CheckDelays(usize),
    FilteredOrders(Vec<Order>),
    BoardView(Vec<Order>),
}
