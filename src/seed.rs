//! Demo orders for a freshly opened board.

use crate::model::{Order, OrderItem, OrderPriority, OrderStatus};
use chrono::{DateTime, Duration, Utc};

/// Three orders received 5, 10 and 20 minutes before `anchor`.
///
/// Order #002 is already in progress but has no start time, so delay checks skip it until
/// it is moved to In Progress again through the board.
pub fn demo_orders(anchor: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order::new("1", "001", "15", anchor - Duration::minutes(5), 25)
            .with_priority(OrderPriority::High)
            .with_guests(2)
            .with_items(vec![
                OrderItem::new("1", "Grilled Salmon", 1),
                OrderItem::new("2", "Caesar Salad", 1),
                OrderItem::new("3", "Chocolate Mousse", 1),
            ]),
        Order::new("2", "002", "07", anchor - Duration::minutes(10), 30)
            .with_status(OrderStatus::InProgress)
            .with_guests(4)
            .with_progress(30)
            .with_items(vec![
                OrderItem::new("4", "Ribeye Steak", 2).with_note("Medium rare"),
                OrderItem::new("5", "Mashed Potatoes", 2),
                OrderItem::new("6", "Wine", 1),
            ]),
        Order::new("3", "003", "23", anchor - Duration::minutes(20), 20)
            .with_status(OrderStatus::Ready)
            .with_priority(OrderPriority::Low)
            .with_guests(3)
            .with_progress(100)
            .with_items(vec![
                OrderItem::new("7", "Pasta Carbonara", 2),
                OrderItem::new("8", "Garlic Bread", 1),
                OrderItem::new("9", "Tiramisu", 2),
            ]),
    ]
}
