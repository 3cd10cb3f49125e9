//! Database access for the ordering service.
//!
//! # Tables
//!
//! - `foods` - The menu (catalog)
//! - `users` - Accounts created at registration checkout
//! - `orders` - One row per placed order, contact snapshot included
//! - `order_lines` - Line items referencing `foods`
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p foodcourt-cli -- migrate
//! ```
//!
//! # Store traits
//!
//! The checkout service does not touch `PgPool` directly; it is generic over
//! the [`Catalog`], [`Identity`] and [`OrderLedger`] traits, implemented here
//! by the Postgres repositories and in tests by in-memory stores.

pub mod foods;
pub mod orders;
pub mod users;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use foods::FoodRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

use foodcourt_core::{FoodId, OrderId};

use crate::models::{Food, NewOrder, NewOrderLine, NewUser, User};

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read access to the menu.
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Look up a menu item by ID.
    async fn food_by_id(&self, id: FoodId) -> Result<Option<Food>, RepositoryError>;

    /// Look up a menu item by exact name.
    async fn food_by_name(&self, name: &str) -> Result<Option<Food>, RepositoryError>;
}

/// Account lookup and creation.
#[allow(async_fn_in_trait)]
pub trait Identity {
    /// Find an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// Find an account by email together with its stored password hash.
    async fn find_with_password_hash(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, RepositoryError>;

    /// Create a new account.
    ///
    /// Returns [`RepositoryError::Conflict`] when the email is already taken.
    async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError>;
}

/// Write access to the order ledger.
#[allow(async_fn_in_trait)]
pub trait OrderLedger {
    /// Persist an order and its lines as one atomic unit.
    async fn create_order(
        &self,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<OrderId, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
