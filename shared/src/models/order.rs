//! Order Model

use super::CartLine;
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not yet picked up by the kitchen; still amendable
    #[default]
    Pending,
    Preparing,
    Completed,
    Cancelled,
}

/// Order entity as returned by the order API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table_id: i64,
    pub status: OrderStatus,
    pub items: Vec<CartLine>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub order_number: Option<i64>,
}

/// Create order payload (`POST /api/orders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: i64,
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Update order payload (`PATCH /api/orders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Successful mutation response
///
/// A 2xx response whose body has no `id` is treated as a failure by the
/// client, so `id` is required here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: String,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Client-side persisted state for resuming a pending order's edit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppendOrder {
    pub order_id: String,
    pub items: Vec<CartLine>,
}
