//! # ActorState Trait
//!
//! The `ActorState` trait is the contract a piece of in-memory state must satisfy to be owned
//! by a [`StateActor`](crate::StateActor). The actor holds exactly one value of the state and
//! is its only writer; every request is handled to completion before the next one starts.
//!
//! # Associated Types
//! - `Action` / `ActionResult`: the domain operations and their replies.
//! - `Snapshot`: a cloneable read view handed to readers and subscribers.
//! - `Context`: dependencies injected at `run()` time (a clock, other clients, ...).
//! - `Error`: the per-state error type.
//!
//! # Provided Methods (Hooks)
//! [`ActorState::on_start`] and [`ActorState::on_stop`] default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// State owned by a single-writer actor.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other actors. The `Context` is passed
/// to every hook rather than stored in the state, which keeps the state itself plain data
/// that can be built and tested without a runtime.
#[async_trait]
pub trait ActorState: Send + Sync + 'static {
    /// Enum of the operations this state supports.
    type Action: Send + Debug;

    /// The reply type for actions.
    type ActionResult: Send + Debug;

    /// Read view of the state. Published to subscribers whenever it changes.
    type Snapshot: Clone + PartialEq + Send + Sync + Debug + 'static;

    /// The runtime context injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this state.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the read view of the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Called once before the first request is processed.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle one action against the state.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Called after the request channel closes, before the actor task exits.
    async fn on_stop(&self, _ctx: &Self::Context) {}
}
