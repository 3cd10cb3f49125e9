//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! foodcourt-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `FOODCOURT_DATABASE_URL` - `PostgreSQL` connection string
//!   (`DATABASE_URL` is used as a fallback)
//!
//! Migration files live in `crates/server/migrations/`.

use super::CommandError;

/// Run all pending database migrations.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
