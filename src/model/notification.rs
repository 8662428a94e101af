use crate::model::{Order, OrderId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// The order reached Ready and a waiter should pick it up.
    Ready,
    /// The order has been in progress longer than its estimate.
    Delayed,
}

/// A dismissible message for the front of house.
///
/// Notifications have no identity of their own; the board addresses them by position in
/// the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub order_id: OrderId,
    pub message: String,
}

impl Notification {
    pub fn ready(order: &Order) -> Self {
        Self {
            kind: NotificationKind::Ready,
            order_id: order.id.clone(),
            message: format!(
                "Order #{} for Table {} is ready for pickup!",
                order.order_number, order.table_number
            ),
        }
    }

    pub fn delayed(order: &Order) -> Self {
        Self {
            kind: NotificationKind::Delayed,
            order_id: order.id.clone(),
            message: format!(
                "⚠️ Alert: Order #{} for Table {} is taking longer than estimated!",
                order.order_number, order.table_number
            ),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
