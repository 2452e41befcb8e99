//! # Order Desk
//!
//! Order placement over an actor-based store: one Tokio actor per resource
//! (customers, products, orders) and a [`CreateOrderService`](order_service::CreateOrderService)
//! that validates a request against them and places the order.
//!
//! ## Modules
//!
//! - **[model]**: plain data ([`Customer`](model::Customer), [`Product`](model::Product),
//!   [`Order`](model::Order)) and typed ids.
//! - **[customer_actor]**, **[product_actor]**, **[order_actor]**: the
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations and their errors.
//! - **[clients]**: typed wrappers over [`ResourceClient`](actor_framework::ResourceClient),
//!   and the collaborator traits the service depends on.
//! - **[order_service]**: the create-order pipeline.
//! - **[lifecycle]**: starting and stopping the actors, configuration, logging.
//!
//! ## Testing
//!
//! The service is generic over its collaborators, so unit tests use in-memory fakes.
//! Client tests use [`actor_framework::mock`] to stand in for actors.

pub mod clients;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_service;
pub mod product_actor;
