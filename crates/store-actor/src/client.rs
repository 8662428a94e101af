//! # Generic Client
//!
//! This module defines the generic client for communicating with a `StateActor`.

use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, oneshot, watch};

/// A type-safe client for a `StateActor`.
///
/// Holds only a sender and a `watch` receiver, so cloning is cheap and clones can be handed
/// to any number of tasks. The actor stops once every clone has been dropped.
pub struct StateClient<S: ActorState> {
    sender: mpsc::Sender<StateRequest<S>>,
    updates: watch::Receiver<S::Snapshot>,
}

impl<S: ActorState> Clone for StateClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            updates: self.updates.clone(),
        }
    }
}

impl<S: ActorState> StateClient<S> {
    pub fn new(
        sender: mpsc::Sender<StateRequest<S>>,
        updates: watch::Receiver<S::Snapshot>,
    ) -> Self {
        Self { sender, updates }
    }

    pub async fn snapshot(&self) -> Result<S::Snapshot, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        action: S::Action,
    ) -> Result<S::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Action { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Returns a receiver that observes every published snapshot.
    ///
    /// The receiver starts out holding the latest snapshot, marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<S::Snapshot> {
        let mut updates = self.updates.clone();
        updates.mark_unchanged();
        updates
    }
}
