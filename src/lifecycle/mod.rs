//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the board's background tasks.
//!
//! The [`KitchenSystem`] owns two tasks:
//!
//! 1. **Board actor** - the single owner of the order store. Its context is the
//!    [`Clock`](crate::clock::Clock), injected at `run()` time.
//! 2. **Delay ticker** - sends `CheckDelays` to the actor on the configured period.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the ticker** - a oneshot signal; no check is sent after it is seen
//! 2. **Drop the board client** - closes the actor's channel
//! 3. **Await completion** - the actor drains pending requests and exits
//!
//! The actor only exits when *every* `BoardClient` clone is gone, so callers holding clones
//! must drop them before calling [`KitchenSystem::shutdown`].
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter; see [`tracing`](self::tracing).

pub mod delay_ticker;
pub mod kitchen_system;
pub mod tracing;

pub use delay_ticker::*;
pub use kitchen_system::*;
pub use self::tracing::*;
