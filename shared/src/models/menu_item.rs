//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item entity
///
/// Immutable once fetched; the menu is refreshed wholesale, never patched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_deserialize() {
        let json = r#"{"id":1,"name":"Tea","price":20.0,"category":"Drinks","image_url":null}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Tea");
        assert_eq!(item.price, 20.0);
        assert!(item.image_url.is_none());
    }

    #[test]
    fn test_menu_item_missing_field_rejected() {
        // A body without a price is malformed, not a menu item
        let json = r#"{"id":1,"name":"Tea","category":"Drinks"}"#;
        assert!(serde_json::from_str::<MenuItem>(json).is_err());
    }

    #[test]
    fn test_menu_item_optional_image_url_absent() {
        let json = r#"{"id":2,"name":"Coffee","price":35.5,"category":"Drinks"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.image_url.is_none());
    }
}
