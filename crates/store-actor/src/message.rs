//! # Generic Messages
//!
//! This module defines the message types exchanged between a `StateClient` and its
//! `StateActor`.

use crate::error::FrameworkError;
use crate::state::ActorState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a [`StateActor`](crate::StateActor).
///
/// There are only two shapes of request: read the whole state, or run one domain
/// [`ActorState::Action`] against it. Everything domain-specific lives in the action enum,
/// so the message type never changes when a new operation is added.
#[derive(Debug)]
pub enum StateRequest<S: ActorState> {
    Snapshot {
        respond_to: Response<S::Snapshot>,
    },
    Action {
        action: S::Action,
        respond_to: Response<S::ActionResult>,
    },
}
