//! # Order Creation
//!
//! [`CreateOrderService`] turns a [`CreateOrder`] request into a stored [`Order`]:
//!
//! 1. resolve the customer,
//! 2. check the request's shape (non-empty, positive quantities, duplicate policy),
//! 3. look up every distinct product in one batched catalog call,
//! 4. check that all of them exist and have enough stock,
//! 5. price each line from the catalog snapshot,
//! 6. persist the order,
//! 7. decrement inventory with the request lines as given.
//!
//! Any failure before step 6 leaves no trace. If step 7 fails the stored order is
//! removed again and the inventory error is returned; the catalog itself guarantees
//! that a failed decrement leaves stock as it was.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::{CustomerDirectory, OrderStore, ProductCatalog};
use crate::model::{CreateOrder, LineItem, Order, ProductId, RequestedProduct};
use crate::order_actor::OrderError;

/// What to do when one product appears on several request lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateLines {
    /// Treat the lines as one, with their quantities added up.
    #[default]
    Merge,
    /// Fail with [`OrderError::DuplicateProduct`].
    Reject,
}

/// Validates and places orders against injected collaborators.
///
/// ```rust,ignore
/// let service = CreateOrderService::new(customer_client, product_client, order_client);
/// let order = service.execute(request).await?;
/// ```
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    duplicate_lines: DuplicateLines,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
            duplicate_lines: DuplicateLines::default(),
        }
    }

    pub fn with_duplicate_lines(mut self, policy: DuplicateLines) -> Self {
        self.duplicate_lines = policy;
        self
    }

    #[instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrder) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");

        let Some(customer) = self.customers.find_by_id(request.customer_id.clone()).await? else {
            warn!("Customer does not exist");
            return Err(OrderError::CustomerNotFound(request.customer_id));
        };

        let wanted = self.normalize(&request.products)?;
        let ids: Vec<ProductId> = wanted.iter().map(|line| line.id.clone()).collect();

        let found = self.products.find_all_by_id(&ids).await?;
        if found.len() != ids.len() {
            warn!(requested = ids.len(), found = found.len(), "One or more products does not exist");
            return Err(OrderError::ProductsMissing {
                requested: ids.len(),
                found: found.len(),
            });
        }

        let quantities: HashMap<&ProductId, u32> =
            wanted.iter().map(|line| (&line.id, line.quantity)).collect();
        let mut line_items = Vec::with_capacity(found.len());
        for product in found {
            let Some(&requested) = quantities.get(&product.id) else {
                warn!(product_id = %product.id, "Catalog returned a product that was not requested");
                return Err(OrderError::ProductsMissing {
                    requested: ids.len(),
                    found: line_items.len(),
                });
            };
            if product.quantity < requested {
                warn!(product_id = %product.id, requested, available = product.quantity, "Invalid product quantity");
                return Err(OrderError::InsufficientQuantity {
                    product_id: product.id,
                    requested,
                    available: product.quantity,
                });
            }
            line_items.push(LineItem {
                product_id: product.id,
                quantity: requested,
                price: product.price,
            });
        }

        let order = self.orders.create(customer, line_items).await?;

        if let Err(e) = self.products.update_quantity(&request.products).await {
            warn!(order_id = %order.id, error = %e, "Inventory update failed, removing order");
            if let Err(undo) = self.orders.remove(order.id.clone()).await {
                error!(order_id = %order.id, error = %undo, "Failed to remove order after inventory failure");
            }
            return Err(e.into());
        }

        info!(order_id = %order.id, total = %order.total(), "Order created");
        Ok(order)
    }

    /// Rejects empty requests and zero quantities, then applies the duplicate policy.
    /// The result lists each product once, in first-seen order.
    fn normalize(&self, lines: &[RequestedProduct]) -> Result<Vec<RequestedProduct>, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(line) = lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::InvalidQuantity(line.id.clone()));
        }

        // position of each product in `merged`
        let mut index: HashMap<&ProductId, usize> = HashMap::with_capacity(lines.len());
        let mut merged: Vec<RequestedProduct> = Vec::with_capacity(lines.len());
        for line in lines {
            match index.get(&line.id).copied() {
                None => {
                    index.insert(&line.id, merged.len());
                    merged.push(line.clone());
                }
                Some(_) if self.duplicate_lines == DuplicateLines::Reject => {
                    return Err(OrderError::DuplicateProduct(line.id.clone()));
                }
                Some(at) => {
                    let seen = &mut merged[at];
                    seen.quantity = seen
                        .quantity
                        .checked_add(line.quantity)
                        .ok_or_else(|| OrderError::InvalidQuantity(line.id.clone()))?;
                }
            }
        }
        Ok(merged)
    }
}
