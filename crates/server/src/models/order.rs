//! Order and order-line types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use foodcourt_core::{Email, FoodId, OrderId, OrderLineId, OrderStatus, Phone, UserId};

/// A placed order (domain type).
///
/// Carries a snapshot of the customer contact details taken at order time;
/// guest orders have no owning user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning account, absent for guest orders.
    pub user_id: Option<UserId>,
    /// Customer name snapshot ("First Last").
    pub customer_name: String,
    /// Email snapshot.
    pub email: Email,
    /// Phone snapshot.
    pub phone: Phone,
    /// Delivery address snapshot.
    pub address: String,
    /// Total charged, as supplied at checkout.
    pub total_amount: Decimal,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// True for guest checkout.
    pub is_guest: bool,
    /// Lifecycle status; checkout always creates `Pending`.
    pub status: OrderStatus,
}

/// One line of a placed order.
///
/// The price is the unit price at order time, decoupled from the current
/// catalog price.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderLine {
    /// Unique line ID.
    pub id: OrderLineId,
    /// Owning order.
    pub order_id: OrderId,
    /// Referenced menu item.
    pub food_id: FoodId,
    /// Units ordered, always positive.
    pub quantity: i32,
    /// Unit price snapshot.
    pub price: Decimal,
}

/// Data for inserting a new order.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub customer_name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub total_amount: Decimal,
    pub is_guest: bool,
}

/// Data for inserting one order line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub food_id: FoodId,
    pub quantity: i32,
    pub price: Decimal,
}
