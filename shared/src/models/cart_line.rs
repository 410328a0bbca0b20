//! Cart Line Model

use super::MenuItem;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// A single line in a cart
///
/// Display fields (name, price, category, image) are copied from the menu
/// item at add-time. A later menu refresh never changes lines already in
/// the cart, so the price shown at add-time is the price submitted at
/// checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: i64,
    pub name: String,
    /// Price in currency unit, frozen at add-time
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub quantity: i32,
}

impl CartLine {
    /// Snapshot a menu item into a new line with quantity 1
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }

    /// Line total (`price * quantity`) in exact decimal arithmetic
    pub fn line_total(&self) -> Decimal {
        let price = Decimal::from_f64(self.price).unwrap_or_default();
        price * Decimal::from(self.quantity)
    }
}
