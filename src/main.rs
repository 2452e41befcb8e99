use order_desk::lifecycle::{setup_tracing, OrderSystem, OrderSystemConfig};
use order_desk::model::{CreateOrder, CustomerCreate, ProductCreate, RequestedProduct};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var("ORDER_DESK_CONFIG") {
        Ok(path) => OrderSystemConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => OrderSystemConfig::default(),
    };

    info!("Starting order desk");
    let system = OrderSystem::new(config);

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(customer_id = %customer_id, "Customer created");

    let product_id = system
        .product_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: Decimal::new(2999, 2),
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product_id, "Product created");

    let request = CreateOrder {
        customer_id,
        products: vec![RequestedProduct::new(product_id.clone(), 3)],
    };

    let span = tracing::info_span!("create_order");
    match system.orders.execute(request).instrument(span).await {
        Ok(order) => info!(order_id = %order.id, total = %order.total(), "Order placed"),
        Err(e) => error!(error = %e, "Order rejected"),
    }

    let left = system
        .product_client
        .check_stock(product_id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product_id, left, "Stock after order");

    system.shutdown().await?;
    info!("Done");
    Ok(())
}
