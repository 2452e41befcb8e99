//! # Order Client
//!
//! Typed wrapper around `ResourceClient<Order>`; also the actor-backed [`OrderStore`].
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::OrderStore;
use crate::model::{Customer, LineItem, Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;

/// Client for interacting with the Order actor.
///
/// Validation does not happen here; see
/// [`CreateOrderService`](crate::order_service::CreateOrderService).
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    /// The actor stores exactly the payload it is given, so the returned order is
    /// built from that payload and the new id instead of a second round-trip.
    #[instrument(skip(self, customer, products), fields(customer_id = %customer.id, lines = products.len()))]
    async fn create(&self, customer: Customer, products: Vec<LineItem>) -> Result<Order, OrderError> {
        debug!(?products, "Sending create to actor");
        let id = self
            .inner
            .create(OrderCreate {
                customer: customer.clone(),
                products: products.clone(),
            })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");

        Ok(Order::new(id, customer, products))
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: OrderId) -> Result<(), OrderError> {
        self.inner.delete(id.clone()).await.map_err(|e| match e {
            FrameworkError::NotFound(_) => OrderError::NotFound(id),
            other => Self::map_error(other),
        })
    }
}
