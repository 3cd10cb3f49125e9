//! Integration tests for FoodCourt.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p foodcourt-cli -- migrate
//! cargo run -p foodcourt-cli -- seed
//!
//! # Start the server
//! cargo run -p foodcourt-server
//!
//! # Run integration tests
//! cargo test -p foodcourt-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` hit a running server over HTTP and are marked
//! `#[ignore]` so `cargo test` stays green without external services.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("FOODCOURT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}
