//! [`ActorEntity`] implementation for [`Order`].
//!
//! The order actor only stores what it is given. Validation against customers
//! and the catalog happens before the order reaches it, in
//! [`CreateOrderService`](crate::order_service::CreateOrderService).

use actor_framework::ActorEntity;
use async_trait::async_trait;

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.products.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(Self::new(id, params.customer, params.products))
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
