//! HTTP route handlers for the ordering service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (verifies database)
//!
//! # Menu
//! GET  /menu                   - List menu items
//! POST /foods                  - Add a menu item
//!
//! # Checkout
//! POST /checkout/guest         - Guest checkout (no account)
//! POST /checkout/register      - Register an account and place the order
//! POST /checkout/login         - Log in and place the order
//!
//! # Admin
//! POST /admin/login            - Admin credential check
//! GET  /admin/orders           - Dashboard data: orders + lines
//! ```

pub mod admin;
pub mod checkout;
pub mod menu;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/guest", post(checkout::guest))
        .route("/register", post(checkout::register))
        .route("/login", post(checkout::login))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/orders", get(admin::orders))
}

/// Create all routes for the ordering service.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Menu
        .route("/menu", get(menu::list))
        .route("/foods", post(menu::create))
        // Checkout
        .nest("/checkout", checkout_routes())
        // Admin dashboard API
        .nest("/admin", admin_routes())
}
