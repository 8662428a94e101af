//! The order store and its read-side views.

pub mod order_store;
pub mod transition;
pub mod view;

pub use order_store::{BoardSnapshot, OrderStore};
pub use transition::ReadyNotifyPolicy;
pub use view::{board_view, sort_orders, SortMode};
