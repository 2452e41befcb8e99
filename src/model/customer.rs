use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Customers.
    CustomerId,
    "customer"
);

/// A registered customer.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) (see
/// [`customer_actor::entity`](crate::customer_actor::entity)) so it can live in a
/// [`ResourceActor`](actor_framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

/// Payload for updating an existing customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
