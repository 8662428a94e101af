use super::transition::{self, ReadyNotifyPolicy};
use crate::model::{Notification, Order, OrderId, OrderPriority, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Read view of the whole board, as handed to views and subscribers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub orders: Vec<Order>,
    pub notifications: Vec<Notification>,
}

/// The in-flight orders and the notification queue.
///
/// Orders keep their insertion order; sorting is a read-side concern (see
/// [`view`](super::view)). Notifications are kept oldest first.
///
/// Operations on unknown ids or out-of-range indices change nothing and report that through
/// their return value. Operations that stamp a time take `now` from the caller.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
    notifications: Vec<Notification>,
    ready_policy: ReadyNotifyPolicy,
}

impl OrderStore {
    pub fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            notifications: Vec::new(),
            ready_policy: ReadyNotifyPolicy::default(),
        }
    }

    pub fn with_ready_policy(mut self, policy: ReadyNotifyPolicy) -> Self {
        self.ready_policy = policy;
        self
    }

    pub fn ready_policy(&self) -> ReadyNotifyPolicy {
        self.ready_policy
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            orders: self.orders.clone(),
            notifications: self.notifications.clone(),
        }
    }

    fn order_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        let found = self.orders.iter_mut().find(|order| &order.id == id);
        if found.is_none() {
            warn!(order_id = %id, "Order not found");
        }
        found
    }

    /// Moves an order to `status`, applying the side effects of entering it.
    ///
    /// Returns `false` if no order has this id.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus, now: DateTime<Utc>) -> bool {
        let policy = self.ready_policy;
        let Some(order) = self.order_mut(id) else {
            return false;
        };
        let previous = order.status;
        let notification = transition::apply_status(order, status, now, policy);
        info!(order_id = %id, from = %previous, to = %status, "Status changed");

        if let Some(notification) = notification {
            self.push_notification(notification);
        }
        true
    }

    pub fn set_priority(&mut self, id: &OrderId, priority: OrderPriority) -> bool {
        let Some(order) = self.order_mut(id) else {
            return false;
        };
        order.priority = priority;
        info!(order_id = %id, %priority, "Priority changed");
        true
    }

    /// All orders, or only those in `status`, in board order.
    pub fn filtered_orders(&self, status: Option<OrderStatus>) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|order| status.map_or(true, |wanted| order.status == wanted))
            .collect()
    }

    pub fn mark_notified(&mut self, id: &OrderId) -> bool {
        let Some(order) = self.order_mut(id) else {
            return false;
        };
        order.waiter_notified = true;
        debug!(order_id = %id, "Waiter notified");
        true
    }

    /// Removes the notification at `index`; later notifications move up by one.
    pub fn dismiss_notification(&mut self, index: usize) -> Option<Notification> {
        if index >= self.notifications.len() {
            warn!(index, size = self.notifications.len(), "Notification index out of range");
            return None;
        }
        let dismissed = self.notifications.remove(index);
        debug!(index, size = self.notifications.len(), "Notification dismissed");
        Some(dismissed)
    }

    /// Sets progress verbatim. Keeping it within 0..=100 is up to the caller.
    pub fn update_progress(&mut self, id: &OrderId, progress: u8) -> bool {
        let Some(order) = self.order_mut(id) else {
            return false;
        };
        order.progress = progress;
        debug!(order_id = %id, progress, "Progress updated");
        true
    }

    /// Re-evaluates every in-progress order against its estimate.
    ///
    /// Returns how many orders newly became delayed, each of which raised one notification.
    pub fn check_delays(&mut self, now: DateTime<Utc>) -> usize {
        let raised: Vec<Notification> = self
            .orders
            .iter_mut()
            .filter_map(|order| transition::evaluate_delay(order, now))
            .collect();

        for notification in &raised {
            warn!(order_id = %notification.order_id, "Order running late");
        }
        let count = raised.len();
        for notification in raised {
            self.push_notification(notification);
        }
        count
    }

    fn push_notification(&mut self, notification: Notification) {
        info!(
            order_id = %notification.order_id,
            kind = ?notification.kind,
            size = self.notifications.len() + 1,
            "Notification raised"
        );
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NotificationKind, OrderItem};
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 14, 30, 0).unwrap()
    }

    fn id(raw: &str) -> OrderId {
        OrderId::from(raw)
    }

    fn store() -> OrderStore {
        OrderStore::new(vec![
            Order::new("1", "001", "15", t0(), 25)
                .with_priority(OrderPriority::High)
                .with_items(vec![OrderItem::new("1", "Grilled Salmon", 1)]),
            Order::new("2", "002", "07", t0() - Duration::minutes(5), 30)
                .with_status(OrderStatus::InProgress)
                .with_progress(30),
            Order::new("3", "003", "23", t0() - Duration::minutes(15), 20)
                .with_status(OrderStatus::Ready)
                .with_priority(OrderPriority::Low)
                .with_progress(100),
        ])
    }

    #[test]
    fn test_in_progress_sets_start_once() {
        let mut store = store();
        store.update_progress(&id("1"), 50);

        assert!(store.set_status(&id("1"), OrderStatus::InProgress, t0()));
        let order = store.order(&id("1")).unwrap();
        assert_eq!(order.started_at, Some(t0()));
        assert_eq!(order.progress, 0);

        store.update_progress(&id("1"), 45);
        assert!(store.set_status(&id("1"), OrderStatus::InProgress, t0() + Duration::minutes(7)));
        let order = store.order(&id("1")).unwrap();
        assert_eq!(order.started_at, Some(t0()));
        assert_eq!(order.progress, 45);
    }

    #[test]
    fn test_ready_sets_progress_and_notifies_once() {
        let mut store = store();
        let ready_at = t0() + Duration::minutes(20);

        assert!(store.set_status(&id("1"), OrderStatus::Ready, ready_at));
        let order = store.order(&id("1")).unwrap();
        assert_eq!(order.progress, 100);
        assert_eq!(order.ready_at, Some(ready_at));

        assert_eq!(store.notifications().len(), 1);
        let notification = &store.notifications()[0];
        assert_eq!(notification.kind, NotificationKind::Ready);
        assert_eq!(notification.message(), "Order #001 for Table 15 is ready for pickup!");
    }

    #[test]
    fn test_repeated_ready_notifies_again_until_marked() {
        let mut store = store();
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        assert_eq!(store.notifications().len(), 2);

        assert!(store.mark_notified(&id("1")));
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        assert_eq!(store.notifications().len(), 2);
    }

    #[test]
    fn test_once_per_order_policy_notifies_once() {
        let mut store = store().with_ready_policy(ReadyNotifyPolicy::OncePerOrder);
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        store.set_status(&id("1"), OrderStatus::Pending, t0());
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        assert_eq!(store.notifications().len(), 1);
    }

    #[test]
    fn test_delivered_keeps_progress() {
        let mut store = store();
        store.update_progress(&id("2"), 70);
        let delivered_at = t0() + Duration::minutes(40);

        assert!(store.set_status(&id("2"), OrderStatus::Delivered, delivered_at));
        let order = store.order(&id("2")).unwrap();
        assert_eq!(order.delivered_at, Some(delivered_at));
        assert_eq!(order.progress, 70);
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_unknown_order_is_a_no_op() {
        let mut store = store();
        let before = store.snapshot();

        assert!(!store.set_status(&id("99"), OrderStatus::Ready, t0()));
        assert!(!store.set_priority(&id("99"), OrderPriority::High));
        assert!(!store.mark_notified(&id("99")));
        assert!(!store.update_progress(&id("99"), 10));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_set_priority_has_no_side_effects() {
        let mut store = store();
        assert!(store.set_priority(&id("3"), OrderPriority::High));
        let order = store.order(&id("3")).unwrap();
        assert_eq!(order.priority, OrderPriority::High);
        assert_eq!(order.status, OrderStatus::Ready);
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_filtered_orders_preserves_order() {
        let mut store = store();
        let all: Vec<&str> = store.filtered_orders(None).iter().map(|o| o.id.0.as_str()).collect();
        assert_eq!(all, vec!["1", "2", "3"]);

        store.set_status(&id("1"), OrderStatus::Ready, t0());
        let ready: Vec<&str> = store
            .filtered_orders(Some(OrderStatus::Ready))
            .iter()
            .map(|o| o.id.0.as_str())
            .collect();
        assert_eq!(ready, vec!["1", "3"]);
        assert!(store.filtered_orders(Some(OrderStatus::Delivered)).is_empty());
    }

    #[test]
    fn test_check_delays_notifies_on_first_crossing_only() {
        let mut store = store();
        store.set_status(&id("1"), OrderStatus::InProgress, t0());

        assert_eq!(store.check_delays(t0() + Duration::minutes(25)), 0);
        assert!(!store.order(&id("1")).unwrap().is_delayed);

        assert_eq!(store.check_delays(t0() + Duration::minutes(26)), 1);
        assert!(store.order(&id("1")).unwrap().is_delayed);
        assert_eq!(
            store.notifications()[0].message(),
            "⚠️ Alert: Order #001 for Table 15 is taking longer than estimated!"
        );

        assert_eq!(store.check_delays(t0() + Duration::minutes(40)), 0);
        assert_eq!(store.notifications().len(), 1);
    }

    #[test]
    fn test_in_progress_without_start_is_never_delayed() {
        // Order 2 is seeded in progress but was never started through the store.
        let mut store = store();
        assert_eq!(store.check_delays(t0() + Duration::hours(5)), 0);
        assert!(!store.order(&id("2")).unwrap().is_delayed);
    }

    #[test]
    fn test_dismiss_shifts_later_notifications() {
        let mut store = store();
        store.set_status(&id("1"), OrderStatus::Ready, t0());
        store.set_status(&id("2"), OrderStatus::Ready, t0());
        store.set_status(&id("3"), OrderStatus::Ready, t0());

        let dismissed = store.dismiss_notification(1).unwrap();
        assert_eq!(dismissed.order_id, id("2"));
        let remaining: Vec<&OrderId> = store.notifications().iter().map(|n| &n.order_id).collect();
        assert_eq!(remaining, vec![&id("1"), &id("3")]);

        assert!(store.dismiss_notification(2).is_none());
        assert_eq!(store.notifications().len(), 2);
    }

    #[test]
    fn test_update_progress_is_not_clamped() {
        let mut store = store();
        assert!(store.update_progress(&id("1"), 150));
        assert_eq!(store.order(&id("1")).unwrap().progress, 150);
    }

    #[test]
    fn test_delay_scenario_end_to_end() {
        let mut store = OrderStore::new(vec![Order::new("7", "042", "11", t0(), 25)]);
        store.set_status(&id("7"), OrderStatus::InProgress, t0());

        let raised = store.check_delays(t0() + Duration::minutes(30));

        assert_eq!(raised, 1);
        assert!(store.order(&id("7")).unwrap().is_delayed);
        assert_eq!(store.notifications().len(), 1);
        assert!(store.notifications()[0].message().contains("#042"));
    }
}
