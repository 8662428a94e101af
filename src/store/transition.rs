//! Per-order transition rules.
//!
//! These functions change a single order and hand back the notification the change should
//! raise, if any. They never touch the notification queue; [`OrderStore`](super::OrderStore)
//! appends what they return.

use crate::model::{Notification, Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// When a Ready transition announces the order.
///
/// `EveryTransition` only checks `waiter_notified`, which the status path never sets, so an
/// order moved to Ready twice is announced twice unless someone called `mark_notified`.
/// `OncePerOrder` sets `waiter_notified` as it announces, so each order is announced once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadyNotifyPolicy {
    #[default]
    EveryTransition,
    OncePerOrder,
}

/// Moves `order` to `status` and applies the side effects of entering that status.
///
/// - InProgress: stamps `started_at` and zeroes progress, but only the first time.
/// - Ready: stamps `ready_at`, sets progress to 100, announces unless `waiter_notified`.
/// - Delivered: stamps `delivered_at`.
/// - Pending: status only.
pub fn apply_status(
    order: &mut Order,
    status: OrderStatus,
    now: DateTime<Utc>,
    policy: ReadyNotifyPolicy,
) -> Option<Notification> {
    order.status = status;
    match status {
        OrderStatus::InProgress => {
            if order.started_at.is_none() {
                order.started_at = Some(now);
                order.progress = 0;
            }
            None
        }
        OrderStatus::Ready => {
            order.ready_at = Some(now);
            order.progress = 100;
            if order.waiter_notified {
                return None;
            }
            if policy == ReadyNotifyPolicy::OncePerOrder {
                order.waiter_notified = true;
            }
            Some(Notification::ready(order))
        }
        OrderStatus::Delivered => {
            order.delivered_at = Some(now);
            None
        }
        OrderStatus::Pending => None,
    }
}

/// Recomputes `is_delayed` for an in-progress order with a start time.
///
/// Returns a delay notification only when the order crosses from not delayed to delayed.
/// Orders in any other state are left as they are.
pub fn evaluate_delay(order: &mut Order, now: DateTime<Utc>) -> Option<Notification> {
    if order.status != OrderStatus::InProgress || order.started_at.is_none() {
        return None;
    }
    let delayed = order.is_overdue(now);
    let newly_delayed = delayed && !order.is_delayed;
    order.is_delayed = delayed;
    newly_delayed.then(|| Notification::delayed(order))
}
