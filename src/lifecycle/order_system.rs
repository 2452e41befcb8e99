use tracing::{error, info};

use super::OrderSystemConfig;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::order_service::CreateOrderService;

/// The service as wired by [`OrderSystem`]: every collaborator is an actor client.
pub type OrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Runs the customer, product and order actors and exposes their clients.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(OrderSystemConfig::default());
///
/// let customer_id = system.customer_client.create_customer(customer).await?;
/// let product_id = system.product_client.create_product(product).await?;
/// let order = system.orders.execute(request).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Order creation over clones of the three clients above.
    pub orders: OrderService,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns all actors. Must be called from within a Tokio runtime.
    pub fn new(config: OrderSystemConfig) -> Self {
        let (customer_actor, customer_client) = crate::customer_actor::new(config.buffer_size);
        let (product_actor, product_client) = crate::product_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        // no actor depends on another (Context = ())
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        let orders = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        )
        .with_duplicate_lines(config.duplicate_lines);

        info!(buffer_size = config.buffer_size, duplicate_lines = ?config.duplicate_lines, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            orders,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Drops every client, which closes the actors' channels, then waits for the
    /// actor tasks to finish.
    ///
    /// Clones of the clients held elsewhere keep their actor alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.orders);
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
