//! [`ActorEntity`] implementation for [`Product`], including the stock actions.

use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

use super::{ProductAction, ProductActionResult, ProductError};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name must not be empty".into()));
        }
        check_price(params.price)?;
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    /// # Actions
    /// - `CheckStock`: reports the stock level
    /// - `DecrementStock`: removes stock if enough is available
    /// - `Restock`: adds stock back
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::DecrementStock(requested) => {
                if requested > self.quantity {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id.clone(),
                        requested,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
                Ok(ProductActionResult::DecrementStock(self.quantity))
            }
            ProductAction::Restock(amount) => {
                self.quantity = self.quantity.checked_add(amount).ok_or(
                    ProductError::InvalidQuantity {
                        product_id: self.id.clone(),
                        quantity: amount,
                    },
                )?;
                Ok(ProductActionResult::Restock(self.quantity))
            }
        }
    }
}

fn check_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget(quantity: u32) -> Product {
        Product::new(ProductId::from("p1"), "Widget", dec!(10.00), quantity)
    }

    #[tokio::test]
    async fn decrement_refuses_to_go_below_zero() {
        let mut product = widget(3);
        let err = product
            .handle_action(ProductAction::DecrementStock(4), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product_id: ProductId::from("p1"),
                requested: 4,
                available: 3
            }
        );
        assert_eq!(product.quantity, 3);

        let left = product
            .handle_action(ProductAction::DecrementStock(3), &())
            .await
            .unwrap();
        assert_eq!(left, ProductActionResult::DecrementStock(0));
    }

    #[tokio::test]
    async fn restock_overflow_is_rejected() {
        let mut product = widget(u32::MAX);
        let result = product.handle_action(ProductAction::Restock(1), &()).await;
        assert!(matches!(result, Err(ProductError::InvalidQuantity { .. })));
        assert_eq!(product.quantity, u32::MAX);
    }

    #[test]
    fn negative_price_is_rejected_on_create() {
        let params = ProductCreate {
            name: "Widget".into(),
            price: dec!(-0.01),
            quantity: 1,
        };
        let result = Product::from_create_params(ProductId::from("p1"), params);
        assert_eq!(result.unwrap_err(), ProductError::InvalidPrice(dec!(-0.01)));
    }

    #[tokio::test]
    async fn update_keeps_price_when_invalid() {
        let mut product = widget(1);
        let update = ProductUpdate {
            price: Some(dec!(-5)),
            quantity: None,
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.price, dec!(10.00));
    }
}
