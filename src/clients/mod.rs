//! Type-safe wrappers around [`StateClient`](store_actor::StateClient).

pub mod board_client;

pub use board_client::*;
