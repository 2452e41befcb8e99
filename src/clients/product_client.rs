//! # Product Client
//!
//! Typed wrapper around `ResourceClient<Product>` with the stock actions, and the
//! actor-backed [`ProductCatalog`].
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, error, instrument, warn};

use super::ProductCatalog;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, RequestedProduct};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Maps a framework error for an operation on `id`, naming the product when it is missing.
    fn map_error_for(id: ProductId, e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::NotFound(_) => ProductError::NotFound(id),
            other => Self::map_error(other),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .update(id.clone(), update)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }

    /// Returns the quantity available.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock");
        match self.perform(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected_result(other)),
        }
    }

    /// Removes `quantity` units and returns the stock left.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Decrementing stock");
        match self.perform(id, ProductAction::DecrementStock(quantity)).await? {
            ProductActionResult::DecrementStock(level) => Ok(level),
            other => Err(unexpected_result(other)),
        }
    }

    /// Adds `quantity` units back and returns the new stock level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Restocking");
        match self.perform(id, ProductAction::Restock(quantity)).await? {
            ProductActionResult::Restock(level) => Ok(level),
            other => Err(unexpected_result(other)),
        }
    }

    async fn perform(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id.clone(), action)
            .await
            .map_err(|e| Self::map_error_for(id, e))
    }
}

fn unexpected_result(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self))]
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.get_many(ids.to_vec()).await.map_err(Self::map_error)
    }

    /// Applies the decrements in request order. If one fails, the ones already
    /// applied are restocked in reverse before the error is returned.
    #[instrument(skip(self))]
    async fn update_quantity(&self, products: &[RequestedProduct]) -> Result<(), ProductError> {
        for (applied, requested) in products.iter().enumerate() {
            let Err(e) = self.decrement_stock(requested.id.clone(), requested.quantity).await else {
                continue;
            };
            warn!(product_id = %requested.id, error = %e, "Decrement failed, rolling back");
            for done in products[..applied].iter().rev() {
                if let Err(undo) = self.restock(done.id.clone(), done.quantity).await {
                    error!(product_id = %done.id, error = %undo, "Rollback restock failed");
                }
            }
            return Err(e);
        }
        Ok(())
    }
}
