//! # Customer Actor
//!
//! Holds registered customers and backs the
//! [`CustomerDirectory`](crate::clients::CustomerDirectory) used by order creation.
//!
//! The simplest actor in the system: no dependencies (`Context = ()`) and no custom
//! actions. Creation and updates are validated in the entity hooks.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use actor_framework::ResourceActor;

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CustomerClient::new(generic_client))
}
