//! Data models
//!
//! Wire types for the menu and order API. All models derive serde and
//! reject responses missing required fields at deserialization time.

pub mod cart_line;
pub mod menu_item;
pub mod order;

pub use cart_line::CartLine;
pub use menu_item::MenuItem;
pub use order::{AppendOrder, ErrorBody, Order, OrderCreate, OrderRef, OrderStatus, OrderUpdate};
