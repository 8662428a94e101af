//! Read-side ordering of the board.
//!
//! The store keeps orders in insertion order. The dashboard shows them filtered by status
//! and sorted by one of two modes; both sorts are stable.

use crate::model::{Order, OrderStatus, ParseEnumError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// High before medium before low.
    #[default]
    Priority,
    /// In-progress orders by expected finish, then everything else by arrival.
    Time,
}

impl FromStr for SortMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortMode::Priority),
            "time" => Ok(SortMode::Time),
            other => Err(ParseEnumError::new("sort mode", other)),
        }
    }
}

/// Sorts `orders` in place for display.
pub fn sort_orders(orders: &mut [Order], mode: SortMode) {
    match mode {
        SortMode::Priority => orders.sort_by(by_priority),
        SortMode::Time => orders.sort_by(by_time),
    }
}

fn by_priority(a: &Order, b: &Order) -> Ordering {
    b.priority.weight().cmp(&a.priority.weight())
}

fn by_time(a: &Order, b: &Order) -> Ordering {
    let a_cooking = a.status == OrderStatus::InProgress;
    let b_cooking = b.status == OrderStatus::InProgress;
    match (a_cooking, b_cooking) {
        // An order with no start time has no expected finish and goes first.
        (true, true) => a.expected_ready_at().cmp(&b.expected_ready_at()),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.received_at.cmp(&b.received_at),
    }
}

/// The orders the dashboard shows: filtered by `status` if given, then sorted.
pub fn board_view<'a, I>(orders: I, status: Option<OrderStatus>, mode: SortMode) -> Vec<Order>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut shown: Vec<Order> = orders
        .into_iter()
        .filter(|order| status.map_or(true, |wanted| order.status == wanted))
        .cloned()
        .collect();
    sort_orders(&mut shown, mode);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderPriority;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap()
    }

    fn order(id: &str, received_offset: i64) -> Order {
        Order::new(id, format!("00{id}"), "01", t0() + Duration::minutes(received_offset), 20)
    }

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|order| order.id.0.as_str()).collect()
    }

    #[test]
    fn test_priority_sort_puts_high_first() {
        let mut orders = vec![
            order("1", 0).with_priority(OrderPriority::Low),
            order("2", 0).with_priority(OrderPriority::High),
            order("3", 0).with_priority(OrderPriority::Medium),
        ];
        sort_orders(&mut orders, SortMode::Priority);
        assert_eq!(ids(&orders), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_priority_sort_is_stable() {
        let mut orders = vec![
            order("1", 0).with_priority(OrderPriority::Medium),
            order("2", 0).with_priority(OrderPriority::High),
            order("3", 0).with_priority(OrderPriority::Medium),
            order("4", 0).with_priority(OrderPriority::High),
        ];
        sort_orders(&mut orders, SortMode::Priority);
        assert_eq!(ids(&orders), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_time_sort_puts_in_progress_first() {
        let mut late_cook = order("1", 30).with_status(OrderStatus::InProgress);
        late_cook.started_at = Some(t0() + Duration::minutes(35));
        let mut orders = vec![
            order("2", 0).with_status(OrderStatus::Pending),
            order("3", -10).with_status(OrderStatus::Delivered),
            late_cook,
            order("4", -20).with_status(OrderStatus::Ready),
        ];
        sort_orders(&mut orders, SortMode::Time);
        assert_eq!(ids(&orders), vec!["1", "4", "3", "2"]);
    }

    #[test]
    fn test_time_sort_orders_cooking_by_expected_finish() {
        let mut quick = order("1", 0).with_status(OrderStatus::InProgress);
        quick.started_at = Some(t0() + Duration::minutes(10));
        quick.estimated_minutes = 5;
        let mut slow = order("2", 0).with_status(OrderStatus::InProgress);
        slow.started_at = Some(t0());
        slow.estimated_minutes = 30;
        let unstarted = order("3", 0).with_status(OrderStatus::InProgress);

        let mut orders = vec![slow, quick, unstarted];
        sort_orders(&mut orders, SortMode::Time);
        assert_eq!(ids(&orders), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_sort_mode_parses() {
        assert_eq!("time".parse::<SortMode>().unwrap(), SortMode::Time);
        assert!("newest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_board_view_filters_then_sorts() {
        let orders = [
            order("1", 0).with_status(OrderStatus::Ready).with_priority(OrderPriority::Low),
            order("2", 0).with_status(OrderStatus::Pending),
            order("3", 0).with_status(OrderStatus::Ready).with_priority(OrderPriority::High),
        ];
        let shown = board_view(&orders, Some(OrderStatus::Ready), SortMode::Priority);
        assert_eq!(ids(&shown), vec!["3", "1"]);
        assert_eq!(board_view(&orders, None, SortMode::Priority).len(), 3);
    }
}
