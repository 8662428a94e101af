//! # Store Actor
//!
//! A small framework for owning one piece of mutable state inside a Tokio task and
//! talking to it through a cloneable, type-safe client. It is the **single-writer actor**
//! pattern: the state has exactly one owner, every mutation is a message, and messages are
//! handled one at a time, so each read-modify-write is a critical section with no locks.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - your plain-data state and its actions
//! 2. **Runtime Layer** ([`StateActor`]) - message processing and change publication
//! 3. **Interface Layer** ([`StateClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Observing Changes
//!
//! After each successful action the actor publishes the state's snapshot on a
//! `tokio::sync::watch` channel when it changed. [`StateClient::subscribe`] hands out
//! receivers, which is how a view layer learns it should redraw.
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** via `run(context)`, not at construction time.
//! A state that needs the current time takes a clock as its context, which lets tests run
//! the real actor against a manual clock.
//!
//! ## Testing
//!
//! See the [`mock`] module for [`mock::MockClient`], which answers client requests from
//! scripted expectations without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod state;

// Re-export core types for convenience
pub use actor::StateActor;
pub use client::StateClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
