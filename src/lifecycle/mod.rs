//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors behind order creation.
//!
//! - [`OrderSystem`] spawns the customer, product and order actors and builds a
//!   [`CreateOrderService`](crate::order_service::CreateOrderService) from their clients.
//! - [`OrderSystemConfig`] holds the knobs (channel buffer size, duplicate-line policy),
//!   read from YAML.
//! - [`setup_tracing`] installs the log subscriber for binaries.
//!
//! ## Shutdown
//!
//! None of the actors holds another actor's client, so the dependency graph is acyclic
//! and dropping the clients is enough: each actor's `recv()` returns `None` and its
//! loop ends. [`OrderSystem::shutdown`] does exactly that and then awaits the tasks.

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::setup_tracing;
