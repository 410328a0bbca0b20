//! Order session state machine
//!
//! Coordinates the local cart with the remote order resource: a session is
//! either creating a new order or appending to an existing pending one, and
//! walks `Browsing → Confirming → Submitting → Succeeded | Failed`. The
//! only other transitions are `Failed → Confirming` (the user re-confirms;
//! the customer flow never retries on its own) and `Succeeded → Browsing`
//! (a fresh session after the cart is cleared).

use crate::cart::Cart;
use crate::notify::{Notice, NoticeSink, NullSink};
use crate::session::SessionStore;
use crate::{ClientConfig, ClientError, ClientResult, HttpClient};
use rust_decimal::Decimal;
use shared::models::{AppendOrder, OrderCreate, OrderUpdate};
use std::sync::Arc;

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Browsing,
    Confirming,
    Submitting,
    Succeeded,
    Failed,
}

/// Whether submission creates a new order or amends an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderMode {
    #[default]
    New,
    Append,
}

/// Result of the initial pending-order lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// No pending order; start a new one
    Fresh,
    /// Session resumed in append mode with a hydrated cart
    Resumed,
    /// Navigate to the existing order's status view; fired at most once
    /// per session lifetime
    Redirect(String),
}

/// Summary displayed for explicit user confirmation
///
/// Append mode omits the total: only a delta is being saved, so a grand
/// total would mislead.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmSummary {
    pub table_id: i64,
    pub item_count: usize,
    pub total: Option<Decimal>,
}

/// Client-side order session for one table
pub struct OrderSession<S: SessionStore> {
    client: HttpClient,
    store: Arc<S>,
    notices: Arc<dyn NoticeSink>,
    table_id: i64,
    max_table: i64,
    state: SessionState,
    mode: OrderMode,
    order_id: Option<String>,
    cart: Cart,
    note: Option<String>,
    /// Redirect-loop guard, scoped to this session's lifetime
    redirected: bool,
    last_error: Option<String>,
}

impl<S: SessionStore> OrderSession<S> {
    pub fn new(config: &ClientConfig, store: Arc<S>, table_id: i64) -> Self {
        Self {
            client: config.build_http_client(),
            store,
            notices: Arc::new(NullSink),
            table_id,
            max_table: config.max_table,
            state: SessionState::Browsing,
            mode: OrderMode::New,
            order_id: None,
            cart: Cart::new(),
            note: None,
            redirected: false,
            last_error: None,
        }
    }

    /// Attach a sink for acknowledgements and error toasts
    pub fn with_notice_sink(mut self, sink: Arc<dyn NoticeSink>) -> Self {
        self.notices = sink;
        self
    }

    /// Determine the session mode from persisted state and the backend
    ///
    /// A persisted append-order blob takes precedence: it means the user was
    /// already editing that order, so the cart is hydrated from the store.
    /// Otherwise the backend is asked for a pending order on this table; a
    /// hit yields a one-time redirect to its status view. A lookup failure
    /// leaves the session usable in `New` mode and surfaces a retryable
    /// message.
    pub async fn initialize(&mut self) -> ClientResult<InitOutcome> {
        if let Some(append) = self.store.append_order() {
            // A re-run for an order this session already hydrated must not
            // clobber cart edits made since
            if self.order_id.as_deref() == Some(append.order_id.as_str()) {
                return Ok(InitOutcome::Resumed);
            }
            self.mode = OrderMode::Append;
            self.order_id = Some(append.order_id.clone());
            self.cart = Cart::from_lines(append.items);
            self.state = SessionState::Browsing;
            tracing::debug!(order_id = %append.order_id, "Resumed append session from store");
            return Ok(InitOutcome::Resumed);
        }

        let pending = match self.client.pending_order_for_table(self.table_id).await {
            Ok(pending) => pending,
            Err(err) => {
                tracing::warn!(table_id = self.table_id, error = %err, "Pending order lookup failed");
                self.notices.notify(Notice::Error(
                    "Failed to check active orders. Please try again.".to_string(),
                ));
                return Err(err);
            }
        };

        match pending {
            Some(order) => {
                self.mode = OrderMode::Append;
                self.state = SessionState::Browsing;
                self.store.set_order_id(&order.id);

                if self.redirected {
                    // A revalidation re-ran the lookup; do not bounce again,
                    // and keep the cart — it may hold edits made since the
                    // first hydration
                    if self.order_id.is_none() {
                        self.order_id = Some(order.id);
                    }
                    Ok(InitOutcome::Resumed)
                } else {
                    self.order_id = Some(order.id.clone());
                    self.cart = Cart::from_lines(order.items);
                    self.redirected = true;
                    tracing::info!(table_id = self.table_id, order_id = %order.id, "Pending order found, redirecting");
                    Ok(InitOutcome::Redirect(order.id))
                }
            }
            None => {
                self.mode = OrderMode::New;
                self.order_id = None;
                self.state = SessionState::Browsing;
                Ok(InitOutcome::Fresh)
            }
        }
    }

    /// `Browsing → Confirming`, guarded by a non-empty cart
    ///
    /// Also the re-confirm path out of `Failed`. Returns the summary the UI
    /// must show before [`Self::submit`] may run.
    pub fn checkout(&mut self) -> ClientResult<ConfirmSummary> {
        if !matches!(self.state, SessionState::Browsing | SessionState::Failed) {
            return Err(ClientError::Validation(format!(
                "Cannot checkout while {:?}",
                self.state
            )));
        }
        if self.cart.is_empty() {
            let err = ClientError::Validation("Cart is empty".to_string());
            self.notices.notify(Notice::Error(err.to_string()));
            return Err(err);
        }

        self.state = SessionState::Confirming;
        Ok(ConfirmSummary {
            table_id: self.table_id,
            item_count: self.cart.len(),
            total: match self.mode {
                OrderMode::New => Some(self.cart.total_price()),
                OrderMode::Append => None,
            },
        })
    }

    /// `Confirming → Browsing`
    pub fn cancel(&mut self) {
        if self.state == SessionState::Confirming {
            self.state = SessionState::Browsing;
        }
    }

    /// `Confirming → Submitting → Succeeded | Failed`
    ///
    /// Validations run before anything touches the network; violations keep
    /// the session in `Confirming`. On success the order id is persisted,
    /// the cart is cleared and the returned id keys the status view the
    /// caller navigates to. On failure the cart is untouched and the user
    /// must re-confirm.
    pub async fn submit(&mut self) -> ClientResult<String> {
        if self.state != SessionState::Confirming {
            return Err(ClientError::Validation(
                "Nothing confirmed to submit".to_string(),
            ));
        }
        if let Err(err) = validate_submission(self.table_id, self.max_table, &self.cart) {
            self.notices.notify(Notice::Error(err.to_string()));
            return Err(err);
        }

        self.state = SessionState::Submitting;

        let result = match (self.mode, self.order_id.clone()) {
            (OrderMode::Append, Some(order_id)) => {
                let payload = OrderUpdate {
                    items: self.cart.to_lines(),
                    notes: self.note.clone(),
                };
                self.client.update_order(&order_id, &payload).await
            }
            (OrderMode::Append, None) => {
                // Broken invariant; treat as validation, not a network error
                self.state = SessionState::Confirming;
                let err = ClientError::Validation("Append session has no order id".to_string());
                self.notices.notify(Notice::Error(err.to_string()));
                return Err(err);
            }
            (OrderMode::New, _) => {
                let payload = OrderCreate {
                    table_id: self.table_id,
                    items: self.cart.to_lines(),
                    notes: self.note.clone(),
                };
                self.client.create_order(&payload).await
            }
        };

        match result {
            Ok(order) => {
                self.store.set_order_id(&order.id);
                self.store.clear_append_order();
                self.cart.clear();
                self.order_id = Some(order.id.clone());
                self.state = SessionState::Succeeded;
                self.last_error = None;
                tracing::info!(order_id = %order.id, table_id = self.table_id, "Order submitted");
                self.notices
                    .notify(Notice::Info("Order placed successfully!".to_string()));
                Ok(order.id)
            }
            Err(err) => {
                // Timeout vs transport vs status matters in the logs even
                // though the user sees one failure message
                match &err {
                    ClientError::Timeout => {
                        tracing::error!(table_id = self.table_id, "Order submission timed out")
                    }
                    other => {
                        tracing::error!(table_id = self.table_id, error = %other, "Order submission failed")
                    }
                }
                self.state = SessionState::Failed;
                self.last_error = Some(err.to_string());
                self.notices
                    .notify(Notice::Error(format!("Failed to place order: {}", err)));
                Err(err)
            }
        }
    }

    /// `Succeeded → Browsing`: start a fresh session
    ///
    /// The redirect guard survives; it is scoped to the page lifetime, not
    /// to the order.
    pub fn reset(&mut self) {
        if self.state == SessionState::Succeeded {
            self.state = SessionState::Browsing;
            self.mode = OrderMode::New;
            self.order_id = None;
            self.cart.clear();
            self.note = None;
            self.last_error = None;
        }
    }

    /// Persist the current append-editing state for a later resume
    pub fn stash_append_order(&self) {
        if let (OrderMode::Append, Some(order_id)) = (self.mode, &self.order_id) {
            self.store.set_append_order(&AppendOrder {
                order_id: order_id.clone(),
                items: self.cart.to_lines(),
            });
        }
    }

    // ========== Accessors ==========

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn mode(&self) -> OrderMode {
        self.mode
    }

    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    pub fn table_id(&self) -> i64 {
        self.table_id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Preconditions shared by the customer and waiter submission paths
///
/// Violations never reach the network layer.
pub(crate) fn validate_submission(table_id: i64, max_table: i64, cart: &Cart) -> ClientResult<()> {
    if table_id < 1 || table_id > max_table {
        return Err(ClientError::Validation(format!(
            "Table number must be between 1 and {}",
            max_table
        )));
    }
    if cart.is_empty() {
        return Err(ClientError::Validation("Cart is empty".to_string()));
    }
    Ok(())
}
