//! Shared types for the café ordering client
//!
//! Wire-level data models used across crates: menu items, cart lines,
//! orders and the request/response payloads of the order API.

pub mod models;

// Re-exports
pub use models::{
    AppendOrder, CartLine, ErrorBody, MenuItem, Order, OrderCreate, OrderRef, OrderStatus,
    OrderUpdate,
};
pub use serde::{Deserialize, Serialize};
