//! Error types for the Order actor and for order creation.

use thiserror::Error;

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::product_actor::ProductError;

/// Errors that can occur while creating or storing orders.
///
/// The first group are request validation failures raised by
/// [`CreateOrderService`](crate::order_service::CreateOrderService). Failures of the
/// customer directory or product catalog pass through unchanged in
/// [`OrderError::Customer`] and [`OrderError::Product`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The customer placing the order does not exist.
    #[error("Customer does not exist: {0}")]
    CustomerNotFound(CustomerId),

    /// The catalog returned fewer products than were requested.
    #[error("One or more products does not exist: requested {requested}, found {found}")]
    ProductsMissing { requested: usize, found: usize },

    /// A product has less stock than the order asks for.
    #[error("Invalid product quantity for {product_id}: requested {requested}, available {available}")]
    InsufficientQuantity {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// A requested quantity is zero, or duplicate lines add up past `u32::MAX`.
    #[error("Invalid requested quantity for {0}")]
    InvalidQuantity(ProductId),

    /// The same product appears on more than one line and duplicates are rejected.
    #[error("Duplicate product in order: {0}")]
    DuplicateProduct(ProductId),

    /// The request lists no products.
    #[error("Order must contain at least one product")]
    EmptyOrder,

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
