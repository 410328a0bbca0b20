//! Client-side session persistence
//!
//! The browser's local storage is an opaque key-value side channel here:
//! the state machine talks to an injected [`SessionStore`] instead of
//! reaching for ambient global state, which keeps it independently
//! testable. Two keys survive reloads: the active order id and the
//! append-order blob describing an order being resumed for editing.

use shared::models::AppendOrder;
use std::sync::Mutex;

/// Key-value store for the client session
pub trait SessionStore: Send + Sync {
    fn order_id(&self) -> Option<String>;
    fn set_order_id(&self, order_id: &str);
    fn clear_order_id(&self);

    fn append_order(&self) -> Option<AppendOrder>;
    fn set_append_order(&self, append: &AppendOrder);
    fn clear_append_order(&self);

    /// Drop everything; used when a fresh browsing session starts
    fn clear(&self) {
        self.clear_order_id();
        self.clear_append_order();
    }
}

/// In-memory session store
///
/// Stands in for local storage in tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    order_id: Mutex<Option<String>>,
    append_order: Mutex<Option<AppendOrder>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn order_id(&self) -> Option<String> {
        self.order_id.lock().expect("lock poisoned").clone()
    }

    fn set_order_id(&self, order_id: &str) {
        *self.order_id.lock().expect("lock poisoned") = Some(order_id.to_string());
    }

    fn clear_order_id(&self) {
        *self.order_id.lock().expect("lock poisoned") = None;
    }

    fn append_order(&self) -> Option<AppendOrder> {
        self.append_order.lock().expect("lock poisoned").clone()
    }

    fn set_append_order(&self, append: &AppendOrder) {
        *self.append_order.lock().expect("lock poisoned") = Some(append.clone());
    }

    fn clear_append_order(&self) {
        *self.append_order.lock().expect("lock poisoned") = None;
    }
}
