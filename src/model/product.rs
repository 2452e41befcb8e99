use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Products.
    ProductId,
    "product"
);

/// Represents a product in the catalog, with its current price and stock.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) with custom stock actions
/// ([`ProductAction`](crate::product_actor::ProductAction)); see
/// [`product_actor::entity`](crate::product_actor::entity).
///
/// A `Product` handed out by the catalog is a snapshot: later price or stock changes
/// in the actor do not reach copies already returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor)
    /// * `name` - Product name
    /// * `price` - Unit price
    /// * `quantity` - Available stock
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Payload for changing a product's price or stock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
}
