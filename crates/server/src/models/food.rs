//! Catalog (menu) item types.

use rust_decimal::Decimal;
use serde::Serialize;

use foodcourt_core::FoodId;

/// A sellable menu item.
///
/// Immutable as far as checkout is concerned: once an order is placed, its
/// lines carry their own price snapshot so later catalog changes never
/// rewrite order history.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Food {
    /// Unique item ID.
    pub id: FoodId,
    /// Display name, unique on the menu.
    pub name: String,
    /// Current unit price.
    pub price: Decimal,
    /// Image path for the menu page.
    pub image: Option<String>,
    /// Menu category (e.g. "Burgers", "Pizza").
    pub category: Option<String>,
}

/// Data for inserting a new menu item.
#[derive(Debug, Clone)]
pub struct NewFood {
    pub name: String,
    pub price: Decimal,
    pub image: Option<String>,
    pub category: Option<String>,
}
