//! # Kitchen Board
//!
//! > **Order tracking for a restaurant kitchen.**
//!
//! The board tracks in-flight orders from arrival to delivery, raises notifications when an
//! order is ready for pickup or running past its estimate, and presents orders filtered and
//! sorted for the kitchen display.
//!
//! ## 🏗️ Design
//!
//! ### 1. A Plain Store
//! [`OrderStore`](store::OrderStore) is ordinary synchronous data. It never reads the time
//! itself and never fails: every operation takes `now` from the caller and reports whether
//! it took effect. That keeps the rules testable without a runtime.
//!
//! ### 2. One Writer
//! For concurrent use the store is owned by one actor task (see the `store-actor` crate).
//! Each mutation is a message handled to completion before the next, so every
//! read-modify-write is a critical section without locks. The periodic delay check is just
//! another client of the actor.
//!
//! ### 3. Returned Side Effects
//! Transition rules in [`store::transition`] change one order and *return* the notification
//! to raise. Only the store appends to the queue.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: orders, items, notifications.
//! - [`store`]: the order store, its transition rules and the board views.
//! - [`clock`]: the time source, with a manual clock for tests.
//! - [`board_actor`]: the store wrapped as actor state.
//! - [`clients`]: [`BoardClient`](clients::BoardClient), the typed API to the actor.
//! - [`lifecycle`]: [`KitchenSystem`](lifecycle::KitchenSystem), which runs the actor and
//!   the delay ticker.
//! - [`config`]: [`BoardConfig`](config::BoardConfig), loaded from TOML.
//! - [`seed`]: demo orders.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! KITCHEN_BOARD_CONFIG=board.toml RUST_LOG=debug cargo run
//! ```

pub mod board_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod seed;
pub mod store;
