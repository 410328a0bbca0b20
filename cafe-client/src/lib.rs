//! Café table-ordering client
//!
//! Core client logic for the table-ordering flow: customers scan a table's
//! QR code, browse the menu, build a cart and submit or amend an order; a
//! waiter view places orders on behalf of tables.
//!
//! # Modules
//!
//! - **gate**: Wi-Fi allow-list access gate (best-effort, fail-closed)
//! - **menu**: cached menu source with stale-while-revalidate
//! - **cart**: cart store with quantity merge and exact money math
//! - **session**: injected key-value store for the client session
//! - **order**: order session state machine (new vs. append)
//! - **waiter**: staff flow with bounded retry
//! - **notify**: ephemeral acknowledgements and error toasts
//!
//! The UI layer (rendering, search, pagination) is a consumer of these
//! types, not part of this crate.

pub mod cart;
pub mod config;
pub mod error;
pub mod gate;
pub mod http;
pub mod menu;
pub mod notify;
pub mod order;
pub mod retry;
pub mod session;
pub mod waiter;

pub use cart::{AddedFeedback, Cart};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gate::{AccessDecision, AccessGate};
pub use http::HttpClient;
pub use menu::{MenuSource, RefreshHandle};
pub use notify::{Notice, NoticeSink, NullSink, RecordingSink};
pub use order::{ConfirmSummary, InitOutcome, OrderMode, OrderSession, SessionState};
pub use retry::RetryPolicy;
pub use session::{MemorySessionStore, SessionStore};
pub use waiter::WaiterClient;

// Re-export shared types for convenience
pub use shared::models::{AppendOrder, CartLine, MenuItem, Order, OrderRef, OrderStatus};
