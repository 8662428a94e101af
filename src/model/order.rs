//! Orders as tracked on the kitchen board.
//!
//! All timestamps are UTC instants. Human-readable "HH:MM" labels are produced on demand by
//! the `*_label` methods and never stored.
use crate::clock::{format_clock_time, minutes_between};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Error returned when parsing a status or priority from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in the kitchen lifecycle.
///
/// Any status may follow any other; the store attaches side effects to the status being
/// entered, not to the pair of statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// Wire name, as used in serialized data and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in-progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Display name for buttons and badges.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("order status", s))
    }
}

/// How urgently the kitchen should handle an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderPriority {
    High,
    Medium,
    Low,
}

impl OrderPriority {
    pub const ALL: [OrderPriority; 3] = [OrderPriority::High, OrderPriority::Medium, OrderPriority::Low];

    /// Sort weight; higher comes first on the board.
    pub fn weight(&self) -> u8 {
        match self {
            OrderPriority::High => 3,
            OrderPriority::Medium => 2,
            OrderPriority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::High => "high",
            OrderPriority::Medium => "medium",
            OrderPriority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderPriority::High => "High",
            OrderPriority::Medium => "Medium",
            OrderPriority::Low => "Low",
        }
    }
}

impl Display for OrderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| ParseEnumError::new("order priority", s))
    }
}

/// One line of an order. Never modified after the order is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OrderItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            notes: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes = Some(note.into());
        self
    }
}

/// A table's food request tracked through the kitchen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub table_number: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub received_at: DateTime<Utc>,
    pub estimated_minutes: u32,
    pub guests: u32,
    #[serde(default)]
    pub ready_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub waiter_notified: bool,
    #[serde(default)]
    pub is_delayed: bool,
    /// Percentage complete. Kept in 0..=100 by callers; the store does not clamp it.
    #[serde(default)]
    pub progress: u8,
}

impl Order {
    /// Creates a pending, medium-priority order with no items and one guest.
    pub fn new(
        id: impl Into<OrderId>,
        order_number: impl Into<String>,
        table_number: impl Into<String>,
        received_at: DateTime<Utc>,
        estimated_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            table_number: table_number.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            priority: OrderPriority::Medium,
            received_at,
            estimated_minutes,
            guests: 1,
            ready_at: None,
            delivered_at: None,
            started_at: None,
            waiter_notified: false,
            is_delayed: false,
            progress: 0,
        }
    }

    pub fn with_items(mut self, items: Vec<OrderItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: OrderPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }

    /// Total number of dishes across all items.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whole minutes since preparation started, if it has.
    pub fn elapsed_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.started_at.map(|start| minutes_between(start, now))
    }

    /// When the order should be done: start time plus the estimate.
    pub fn expected_ready_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
            .map(|start| start + Duration::minutes(i64::from(self.estimated_minutes)))
    }

    /// Whether the order is being prepared and has run past its estimate.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == OrderStatus::InProgress
            && self
                .elapsed_minutes(now)
                .is_some_and(|elapsed| elapsed > i64::from(self.estimated_minutes))
    }

    /// Minutes left on the estimate, floored at zero.
    ///
    /// Only defined while the order is in progress and has a start time.
    pub fn minutes_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        if self.status != OrderStatus::InProgress {
            return None;
        }
        self.elapsed_minutes(now)
            .map(|elapsed| (i64::from(self.estimated_minutes) - elapsed).max(0))
    }

    pub fn time_received_label(&self) -> String {
        format_clock_time(self.received_at)
    }

    pub fn ready_time_label(&self) -> Option<String> {
        self.ready_at.map(format_clock_time)
    }

    pub fn delivered_time_label(&self) -> Option<String> {
        self.delivered_at.map(format_clock_time)
    }
}
