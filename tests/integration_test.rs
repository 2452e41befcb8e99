use actor_framework::ActorClient;
use order_desk::lifecycle::{OrderSystem, OrderSystemConfig};
use order_desk::model::{
    CreateOrder, CustomerCreate, CustomerId, ProductCreate, ProductId, ProductUpdate,
    RequestedProduct,
};
use order_desk::order_actor::OrderError;
use order_desk::order_service::CreateOrderService;
use order_desk::product_actor::ProductError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

async fn seed(system: &OrderSystem, price: Decimal, quantity: u32) -> (CustomerId, ProductId) {
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap();
    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price,
            quantity,
        })
        .await
        .unwrap();
    (customer_id, product_id)
}

fn order_of(customer_id: &CustomerId, lines: &[(&ProductId, u32)]) -> CreateOrder {
    CreateOrder {
        customer_id: customer_id.clone(),
        products: lines
            .iter()
            .map(|&(id, qty)| RequestedProduct::new(id.clone(), qty))
            .collect(),
    }
}

#[tokio::test]
async fn test_order_placed_and_stock_decremented() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, product_id) = seed(&system, dec!(10), 5).await;

    let order = system
        .orders
        .execute(order_of(&customer_id, &[(&product_id, 2)]))
        .await
        .unwrap();

    assert_eq!(order.customer.id, customer_id);
    assert_eq!(order.products.len(), 1);
    assert_eq!(order.products[0].product_id, product_id);
    assert_eq!(order.products[0].quantity, 2);
    assert_eq!(order.products[0].price, dec!(10));
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 3);

    let stored = system.order_client.get(order.id.clone()).await.unwrap();
    assert_eq!(stored, Some(order));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_customer_is_rejected() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (_, product_id) = seed(&system, dec!(10), 5).await;

    let err = system
        .orders
        .execute(order_of(&CustomerId::from("unknown"), &[(&product_id, 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::CustomerNotFound(CustomerId::from("unknown")));
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, product_id) = seed(&system, dec!(10), 5).await;

    let err = system
        .orders
        .execute(order_of(&customer_id, &[(&product_id, 1), (&ProductId::from("p77"), 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::ProductsMissing { requested: 2, found: 1 });
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_externally_minted_ids_resolve_to_not_found_errors() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, _) = seed(&system, dec!(10), 5).await;

    let p1: ProductId = "p1".parse().unwrap();
    let err = system
        .orders
        .execute(order_of(&customer_id, &[(&p1, 2)]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::ProductsMissing { requested: 1, found: 0 });

    let unknown: CustomerId = "unknown".parse().unwrap();
    let err = system
        .orders
        .execute(order_of(&unknown, &[(&p1, 2)]))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::CustomerNotFound(unknown));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insufficient_stock_is_rejected() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, product_id) = seed(&system, dec!(10), 5).await;

    let err = system
        .orders
        .execute(order_of(&customer_id, &[(&product_id, 10)]))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientQuantity {
            product_id: product_id.clone(),
            requested: 10,
            available: 5
        }
    );
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_keeps_price_it_was_placed_at() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, product_id) = seed(&system, dec!(10), 5).await;

    let order = system
        .orders
        .execute(order_of(&customer_id, &[(&product_id, 1)]))
        .await
        .unwrap();

    system
        .product_client
        .update_product(
            product_id.clone(),
            ProductUpdate {
                price: Some(dec!(12.50)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let stored = system.order_client.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.products[0].price, dec!(10));
    assert_eq!(stored.total(), dec!(10));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reject_policy_from_config() {
    let config = OrderSystemConfig::from_yaml_str("duplicate_lines: reject").unwrap();
    let system = OrderSystem::new(config);
    let (customer_id, product_id) = seed(&system, dec!(1), 5).await;

    let err = system
        .orders
        .execute(order_of(&customer_id, &[(&product_id, 1), (&product_id, 1)]))
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::DuplicateProduct(product_id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_never_oversell() {
    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, product_id) = seed(&system, dec!(1), 5).await;

    let service = Arc::new(CreateOrderService::new(
        system.customer_client.clone(),
        system.product_client.clone(),
        system.order_client.clone(),
    ));

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let service = service.clone();
        let (customer_id, product_id) = (customer_id.clone(), product_id.clone());
        tasks.push(tokio::spawn(async move {
            service
                .execute(order_of(&customer_id, &[(&product_id, 1)]))
                .await
        }));
    }

    let mut placed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(OrderError::InsufficientQuantity { .. })
            | Err(OrderError::Product(ProductError::InsufficientStock { .. })) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(placed, 5);
    assert_eq!(system.product_client.check_stock(product_id.clone()).await.unwrap(), 0);

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_updates_are_validated() {
    use order_desk::customer_actor::CustomerError;
    use order_desk::model::CustomerUpdate;

    let system = OrderSystem::new(OrderSystemConfig::default());
    let (customer_id, _) = seed(&system, dec!(1), 1).await;

    let renamed = system
        .customer_client
        .update_customer(
            customer_id.clone(),
            CustomerUpdate {
                name: Some("Alice Liddell".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Alice Liddell");
    assert_eq!(renamed.email, "alice@example.com");

    let err = system
        .customer_client
        .update_customer(
            customer_id,
            CustomerUpdate {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CustomerError::ValidationError(_)));

    let err = system
        .customer_client
        .update_customer(CustomerId::from("c404"), CustomerUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, CustomerError::NotFound(CustomerId::from("c404")));

    system.shutdown().await.unwrap();
}
