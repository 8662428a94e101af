//! Plain data types for the kitchen board: orders, their items, and notifications.

pub mod notification;
pub mod order;

pub use notification::*;
pub use order::*;
