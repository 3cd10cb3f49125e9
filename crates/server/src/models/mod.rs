//! Domain model types.
//!
//! These types represent validated domain objects; the repositories in
//! [`crate::db`] load and persist them.

pub mod food;
pub mod order;
pub mod user;

pub use food::{Food, NewFood};
pub use order::{NewOrder, NewOrderLine, Order, OrderLine};
pub use user::{NewUser, User};
