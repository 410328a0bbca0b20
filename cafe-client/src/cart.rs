//! Cart store
//!
//! Ordered collection of cart lines with quantity merge semantics. Money
//! math goes through `Decimal` so totals carry no cumulative float drift.

use rust_decimal::prelude::*;
use shared::models::{CartLine, MenuItem};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// In-memory cart for the current browsing session
///
/// At most one line per item id: adding an item already in the cart bumps
/// its quantity instead of appending a duplicate. Lines snapshot the menu
/// item's display fields at add-time (see [`CartLine::from_item`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted lines (append-order resume)
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add one unit of a menu item, merging on item id
    ///
    /// Returns the id of the touched line so the caller can key the
    /// transient "added" acknowledgement.
    pub fn add_item(&mut self, item: &MenuItem) -> i64 {
        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_item(item)),
        }
        item.id
    }

    /// Remove one unit of an item; the line disappears at quantity 0
    pub fn decrement_item(&mut self, item_id: i64) {
        if let Some(pos) = self.lines.iter().position(|l| l.item_id == item_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Drop a line entirely regardless of quantity
    pub fn remove_item(&mut self, item_id: i64) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    /// Empty the cart; called after a confirmed server-side mutation
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Clone the lines for an order payload
    pub fn to_lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Sum of quantities across all lines
    pub fn total_quantity(&self) -> i32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `price * quantity` in exact decimal arithmetic, 2dp
    pub fn total_price(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.line_total())
            .sum::<Decimal>()
            .round_dp(2)
    }
}

/// Transient per-item "added to cart" acknowledgement
///
/// UI feedback state, not cart state: entries expire a fixed delay after
/// the add and are pruned on read.
#[derive(Debug)]
pub struct AddedFeedback {
    ttl: Duration,
    added: HashMap<i64, Instant>,
}

impl AddedFeedback {
    /// Default 1 second acknowledgement window
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(1))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            added: HashMap::new(),
        }
    }

    /// Record an add for the given item
    pub fn mark(&mut self, item_id: i64) {
        self.added.insert(item_id, Instant::now());
    }

    /// Whether the acknowledgement for an item is still live
    pub fn is_active(&mut self, item_id: i64) -> bool {
        self.prune();
        self.added.contains_key(&item_id)
    }

    fn prune(&mut self) {
        let ttl = self.ttl;
        self.added.retain(|_, at| at.elapsed() < ttl);
    }
}

impl Default for AddedFeedback {
    fn default() -> Self {
        Self::new()
    }
}
