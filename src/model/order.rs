use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Customer, CustomerId, ProductId};

resource_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// A priced quantity of one product within an order.
///
/// `price` is the unit price copied from the catalog when the order was validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price: Decimal,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Represents a placed order.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) (see
/// [`order_actor::entity`](crate::order_actor::entity)). Orders are write-once:
/// updates are accepted but change nothing.
///
/// See [`CreateOrderService`](crate::order_service::CreateOrderService) for how the
/// line items are validated and priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub products: Vec<LineItem>,
}

impl Order {
    pub fn new(id: OrderId, customer: Customer, products: Vec<LineItem>) -> Self {
        Self {
            id,
            customer,
            products,
        }
    }

    /// Sum of every line's unit price times quantity.
    pub fn total(&self) -> Decimal {
        self.products.iter().map(LineItem::subtotal).sum()
    }
}

/// Payload the order store persists.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer: Customer,
    pub products: Vec<LineItem>,
}

/// One requested product and quantity in a [`CreateOrder`] request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedProduct {
    pub id: ProductId,
    pub quantity: u32,
}

impl RequestedProduct {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// Input of [`CreateOrderService::execute`](crate::order_service::CreateOrderService::execute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub customer_id: CustomerId,
    pub products: Vec<RequestedProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn total_sums_line_subtotals() {
        let customer = Customer::new(CustomerId::from("c1"), "Ada", "ada@example.com");
        let order = Order::new(
            OrderId::from(1),
            customer,
            vec![
                LineItem {
                    product_id: ProductId::from("p1"),
                    quantity: 2,
                    price: dec!(29.99),
                },
                LineItem {
                    product_id: ProductId::from("p2"),
                    quantity: 3,
                    price: dec!(0.10),
                },
            ],
        );
        assert_eq!(order.total(), dec!(60.28));
    }
}
