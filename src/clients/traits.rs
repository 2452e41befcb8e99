//! # Collaborator Traits
//!
//! The narrow interfaces [`CreateOrderService`](crate::order_service::CreateOrderService)
//! depends on. The actor-backed clients in this module implement them; tests swap in
//! in-memory fakes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerId, LineItem, Order, OrderId, Product, ProductId, RequestedProduct};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Resolves customer identifiers.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Returns `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Current product state and stock mutation.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns the products that exist among `ids`, silently omitting unknown ones.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Reduces each listed product's stock by its quantity.
    ///
    /// Either every decrement is applied or, on error, none remain applied.
    async fn update_quantity(&self, products: &[RequestedProduct]) -> Result<(), ProductError>;
}

/// Persistence for orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order and returns the stored representation.
    async fn create(&self, customer: Customer, products: Vec<LineItem>) -> Result<Order, OrderError>;

    /// Removes a stored order. Used to undo an order whose inventory update failed.
    async fn remove(&self, id: OrderId) -> Result<(), OrderError>;
}

#[async_trait]
impl<T: CustomerDirectory + ?Sized> CustomerDirectory for Arc<T> {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        (**self).find_by_id(id).await
    }
}

#[async_trait]
impl<T: ProductCatalog + ?Sized> ProductCatalog for Arc<T> {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        (**self).find_all_by_id(ids).await
    }

    async fn update_quantity(&self, products: &[RequestedProduct]) -> Result<(), ProductError> {
        (**self).update_quantity(products).await
    }
}

#[async_trait]
impl<T: OrderStore + ?Sized> OrderStore for Arc<T> {
    async fn create(&self, customer: Customer, products: Vec<LineItem>) -> Result<Order, OrderError> {
        (**self).create(customer, products).await
    }

    async fn remove(&self, id: OrderId) -> Result<(), OrderError> {
        (**self).remove(id).await
    }
}
