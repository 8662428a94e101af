//! # Mock Client & Testing Guide
//!
//! `MockClient<S>` hands out a real [`StateClient<S>`] whose requests are answered from a
//! queue of expectations instead of a running [`StateActor`](crate::StateActor). Use it to
//! test the logic *around* a client (argument mapping, reply decoding, error mapping)
//! without spawning the actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, replies are scripted | Real state transitions |
//! | **Error Injection** | Easy (`return_err`) | Hard (actor must be closed) |
//! | **Use Case** | Client wrappers | The state itself, or the full system |
//!
//! For step-by-step control there are also the lower level helpers
//! [`create_mock_client`], [`expect_action`] and [`expect_snapshot`], which give the test
//! the raw request receiver.

use crate::client::StateClient;
use crate::error::FrameworkError;
use crate::message::StateRequest;
use crate::state::ActorState;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot, watch};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted reply.
enum Expectation<S: ActorState> {
    Snapshot {
        response: Result<S::Snapshot, FrameworkError>,
    },
    Action {
        response: Result<S::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<KitchenBoard>::new(BoardSnapshot::default());
/// mock.expect_action().return_ok(BoardActionResult::SetStatus(true));
///
/// let client = BoardClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<S: ActorState> {
    client: StateClient<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    received: Arc<Mutex<Vec<S::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> MockClient<S> {
    /// Creates a new mock client with no expectations.
    ///
    /// `initial` is the snapshot seen by `subscribe()` on the returned client.
    pub fn new(initial: S::Snapshot) -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<S>>(100);
        let (_updates, subscriber) = watch::channel(initial);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StateRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StateRequest::Action { action, respond_to },
                        Some(Expectation::Action { response }),
                    ) => {
                        received_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender, subscriber),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<S> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<S> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<S> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Takes the actions received so far, oldest first.
    pub fn take_actions(&self) -> Vec<S::Action> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> SnapshotExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, snapshot: S::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<S: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
}

impl<S: ActorState> ActionExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: S::ActionResult) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            response: Ok(result),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Action {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// The test reads requests off `receiver` with [`expect_action`] / [`expect_snapshot`] and
/// answers them through the returned responder, which allows asserting on the exact
/// request payload before replying.
pub fn create_mock_client<S: ActorState>(
    buffer_size: usize,
    initial: S::Snapshot,
) -> (StateClient<S>, mpsc::Receiver<StateRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (_updates, subscriber) = watch::channel(initial);
    (StateClient::new(sender, subscriber), receiver)
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<(
    S::Action,
    oneshot::Sender<Result<S::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<S: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<S>>,
) -> Option<oneshot::Sender<Result<S::Snapshot, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, Default)]
    struct Tally {
        count: u32,
    }

    #[derive(Debug)]
    enum TallyAction {
        Add(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tally error")]
    struct TallyError;

    #[async_trait]
    impl ActorState for Tally {
        type Action = TallyAction;
        type ActionResult = u32;
        type Snapshot = u32;
        type Context = ();
        type Error = TallyError;

        fn snapshot(&self) -> u32 {
            self.count
        }

        async fn handle_action(&mut self, action: TallyAction, _ctx: &()) -> Result<u32, TallyError> {
            match action {
                TallyAction::Add(n) => {
                    self.count += n;
                    Ok(self.count)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Tally>(10, 0);

        let task = tokio::spawn(async move { client.perform_action(TallyAction::Add(3)).await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, TallyAction::Add(3)));
        responder.send(Ok(3)).unwrap();

        let result = task.await.unwrap();
        assert!(matches!(result, Ok(3)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tally>::new(0);
        mock.expect_action().return_ok(5);
        mock.expect_snapshot().return_ok(5);
        mock.expect_action().return_err(FrameworkError::ActorDropped);

        let client = mock.client();
        assert_eq!(client.perform_action(TallyAction::Add(5)).await.unwrap(), 5);
        assert_eq!(client.snapshot().await.unwrap(), 5);
        assert!(matches!(
            client.perform_action(TallyAction::Add(1)).await,
            Err(FrameworkError::ActorDropped)
        ));

        let actions = mock.take_actions();
        assert_eq!(actions.len(), 2);
        mock.verify();
    }
}
