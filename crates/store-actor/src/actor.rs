//! # Single-Writer Actor Server
//!
//! This module defines the `StateActor`, the server half of the framework. It owns one
//! [`ActorState`] value and processes messages sequentially, so the state never needs a
//! `Mutex` or `RwLock`.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// The generic actor that owns a single state value.
///
/// # Concurrency Model
/// Every read-modify-write on the state happens inside this task, one message at a time.
/// Two clients racing to change the same state are serialized by the channel, which is what
/// makes each action a critical section without any explicit locking.
///
/// # Change Publication
/// After each successful action the actor rebuilds the [`ActorState::Snapshot`] and sends it
/// on a `watch` channel if it differs from the last published one. Views subscribe through
/// [`StateClient::subscribe`] and re-render on change.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StateActor::new(buffer, state)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = StateActor::new(32, Counter::default());
/// tokio::spawn(actor.run(()));
/// client.perform_action(CounterAction::Increment).await?;
/// ```
pub struct StateActor<S: ActorState> {
    receiver: mpsc::Receiver<StateRequest<S>>,
    state: S,
    updates: watch::Sender<S::Snapshot>,
}

impl<S: ActorState> StateActor<S> {
    /// Creates a new `StateActor` around `state` and its associated `StateClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. When full, client calls wait.
    /// * `state` - The initial state. Its snapshot is the first value subscribers see.
    pub fn new(buffer_size: usize, state: S) -> (Self, StateClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (updates, subscriber) = watch::channel(state.snapshot());
        let actor = Self {
            receiver,
            state,
            updates,
        };
        let client = StateClient::new(sender, subscriber);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every state hook. It is supplied here rather than
    /// in `new()` so that dependencies created after the actor can still be wired in.
    pub async fn run(mut self, context: S::Context) {
        // Extract just the type name (e.g., "KitchenBoard" instead of the full module path)
        let state_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            error!(state_type, error = %e, "on_start failed");
            return;
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.snapshot()));
                }
                StateRequest::Action { action, respond_to } => {
                    debug!(state_type, ?action, "Action");
                    let result = self
                        .state
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::StateError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            let published = self.publish();
                            debug!(state_type, published, "Action ok");
                        }
                        Err(e) => warn!(state_type, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(state_type, "Shutdown");
    }

    fn publish(&self) -> bool {
        let snapshot = self.state.snapshot();
        self.updates.send_if_modified(move |current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        })
    }
}
