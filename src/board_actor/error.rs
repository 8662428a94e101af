//! Error types for the board actor and its client.

use thiserror::Error;

/// Errors surfaced by [`BoardClient`](crate::clients::BoardClient) and the
/// [`KitchenSystem`](crate::lifecycle::KitchenSystem).
///
/// Store operations themselves never fail; an unknown order id is reported through the
/// returned value, not as an error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BoardError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered with a result for a different action.
    #[error("Unexpected reply to {0}")]
    UnexpectedReply(&'static str),

    /// A background task panicked or was cancelled.
    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl From<String> for BoardError {
    fn from(msg: String) -> Self {
        BoardError::ActorCommunicationError(msg)
    }
}
