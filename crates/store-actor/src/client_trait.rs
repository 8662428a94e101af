//! # ActorClient Trait
//!
//! Common interface for domain-specific clients wrapping a [`StateClient`].
use crate::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operation.
///
/// Implementors supply the inner [`StateClient`] and an error mapping; `snapshot()` is then
/// provided with the domain error type.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<KitchenBoard> for BoardClient {
///     type Error = BoardError;
///     fn inner(&self) -> &StateClient<KitchenBoard> { &self.inner }
///     fn map_error(e: FrameworkError) -> BoardError { BoardError::ActorCommunicationError(e.to_string()) }
/// }
/// ```
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<S>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch the current snapshot of the state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<S::Snapshot, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
