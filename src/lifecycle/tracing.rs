//! # Observability & Tracing
//!
//! Structured logging for the board, controlled by `RUST_LOG`.
//!
//! | Level | What is logged |
//! |-------|----------------|
//! | `info` | actor and ticker lifecycle, status and priority changes, new notifications |
//! | `debug` | request payloads, reads, progress updates, dismissals |
//! | `warn` | unknown order ids, out-of-range notification indices, late orders |
//! | `error` | background task failures |
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! Client methods carry `#[instrument]` spans, so with `debug` each actor-side log line
//! appears under the client call that caused it:
//!
//! ```text
//! DEBUG set_status{id=OrderId("1") status=InProgress}: Sending request
//! DEBUG Action state_type="KitchenBoard" action=SetStatus { .. }
//!  INFO Status changed order_id=1 from=pending to=in-progress
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; events carry order_id/state_type
        .compact()
        .init();
}
