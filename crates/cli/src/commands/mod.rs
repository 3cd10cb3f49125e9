//! CLI command implementations.

pub mod admin;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors shared across CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Repository-level error.
    #[error("Repository error: {0}")]
    Repository(#[from] foodcourt_server::db::RepositoryError),

    /// Password hashing error.
    #[error("Credential error: {0}")]
    Credential(#[from] foodcourt_server::services::auth::CredentialError),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Connect to the database named by `FOODCOURT_DATABASE_URL` (or
/// `DATABASE_URL` as a fallback).
pub async fn connect() -> Result<PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("FOODCOURT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("FOODCOURT_DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = foodcourt_server::db::create_pool(&database_url).await?;
    Ok(pool)
}
