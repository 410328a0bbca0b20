//! Waiter flow
//!
//! Staff place orders on behalf of tables and manage pending orders. Unlike
//! the customer flow, submissions here run under a bounded retry policy:
//! the waiter is mid-service and should not babysit transient failures.

use crate::cart::Cart;
use crate::order::validate_submission;
use crate::{ClientConfig, ClientResult, HttpClient, RetryPolicy};
use shared::models::{Order, OrderCreate, OrderRef, OrderUpdate};

/// Client for the staff ordering view
#[derive(Debug, Clone)]
pub struct WaiterClient {
    client: HttpClient,
    max_table: i64,
    retry: RetryPolicy,
}

impl WaiterClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: config.build_http_client(),
            max_table: config.max_table,
            retry: config.retry,
        }
    }

    /// Place a new order for a table, retrying on transient failure
    ///
    /// Validations run once, before the first attempt. Failure surfaces
    /// only after the policy's attempts are exhausted.
    pub async fn place_order(
        &self,
        table_id: i64,
        cart: &Cart,
        note: Option<String>,
    ) -> ClientResult<OrderRef> {
        validate_submission(table_id, self.max_table, cart)?;

        let payload = OrderCreate {
            table_id,
            items: cart.to_lines(),
            notes: note,
        };
        self.retry
            .run(|attempt| {
                tracing::debug!(table_id, attempt, "Placing order");
                self.client.create_order(&payload)
            })
            .await
    }

    /// Save an edited pending order, retrying on transient failure
    pub async fn save_order(
        &self,
        order_id: &str,
        table_id: i64,
        cart: &Cart,
        note: Option<String>,
    ) -> ClientResult<OrderRef> {
        validate_submission(table_id, self.max_table, cart)?;

        let payload = OrderUpdate {
            items: cart.to_lines(),
            notes: note,
        };
        self.retry
            .run(|attempt| {
                tracing::debug!(order_id, attempt, "Saving edited order");
                self.client.update_order(order_id, &payload)
            })
            .await
    }

    /// Pending orders feed for the dashboard
    pub async fn pending_orders(&self) -> ClientResult<Vec<Order>> {
        self.client.pending_orders().await
    }

    /// Hydrate an editing cart from a pending order
    pub fn start_editing(order: &Order) -> (Cart, Option<String>) {
        (Cart::from_lines(order.items.clone()), order.notes.clone())
    }
}
