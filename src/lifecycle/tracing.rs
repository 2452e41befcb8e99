//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter filtered by
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run                     # one line per order and per actor event
//! RUST_LOG=debug cargo run                    # request payloads as well
//! RUST_LOG=order_desk::order_service=debug    # only the order pipeline
//! ```
//!
//! Every actor loop runs inside an `entity_type` span, and the client and service
//! methods carry `#[instrument]` spans, so a single order shows up as
//! `create_order:find_by_id`, `create_order:find_all_by_id` and so on.

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
