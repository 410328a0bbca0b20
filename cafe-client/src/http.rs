//! HTTP client for the order/menu API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{ErrorBody, MenuItem, Order, OrderCreate, OrderRef, OrderStatus, OrderUpdate};
use uuid::Uuid;

/// HTTP client for making requests to the order/menu API
///
/// Every request carries the configured timeout; a request that exceeds it
/// is aborted and surfaces as [`ClientError::Timeout`]. Order mutations send
/// a fresh `Idempotency-Key` per attempt so the server can de-duplicate a
/// write that completed after the client gave up.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body and an idempotency token
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body and an idempotency token
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .patch(self.url(path))
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .json(body)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx responses carry the server's `{ "error": ... }` text when the
    /// body parses, else a message derived from the status code. A 2xx body
    /// that fails to deserialize is an invalid response, not a success.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let body_error = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .map(|b| b.error);
            return Err(ClientError::status(status, body_error));
        }

        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{} (body: {})", e, text)))
    }

    // ========== Menu API ==========

    /// Fetch the full menu
    pub async fn menu(&self) -> ClientResult<Vec<MenuItem>> {
        self.get("/api/menu").await
    }

    // ========== Order API ==========

    /// Create a new order for a table
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<OrderRef> {
        tracing::debug!(table_id = payload.table_id, items = payload.items.len(), "Creating order");
        self.post("/api/orders", payload).await
    }

    /// Amend an existing pending order
    pub async fn update_order(&self, order_id: &str, payload: &OrderUpdate) -> ClientResult<OrderRef> {
        tracing::debug!(order_id, items = payload.items.len(), "Updating order");
        self.patch(&format!("/api/orders/{}", order_id), payload)
            .await
    }

    /// List all pending orders (waiter dashboard)
    pub async fn pending_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/orders?status=pending").await
    }

    /// Most recent pending order for a table, if any
    pub async fn pending_order_for_table(&self, table_id: i64) -> ClientResult<Option<Order>> {
        let orders = self.pending_orders().await?;
        let latest = orders
            .into_iter()
            .filter(|o| o.table_id == table_id && o.status == OrderStatus::Pending)
            .max_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(latest)
    }
}
