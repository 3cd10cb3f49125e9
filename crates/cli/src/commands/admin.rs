//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! foodcourt-cli admin create -e admin@example.com -p secret \
//!     --first-name Danish --last-name Khan --phone 03001234567
//! ```
//!
//! # Environment Variables
//!
//! - `FOODCOURT_DATABASE_URL` - `PostgreSQL` connection string

use foodcourt_core::{Email, Phone, UserRole};
use foodcourt_server::db::UserRepository;
use foodcourt_server::models::NewUser;
use foodcourt_server::services::auth;
use tracing::{info, warn};

use super::CommandError;

/// Create a new admin user with a hashed password.
///
/// # Errors
///
/// Returns an error if the email or phone is invalid, the email is already
/// taken, or the database is unreachable.
pub async fn create_user(
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
    address: &str,
) -> Result<(), CommandError> {
    let email: Email = email
        .parse()
        .map_err(|e| CommandError::InvalidInput(format!("email: {e}")))?;
    let phone: Phone = phone
        .parse()
        .map_err(|e| CommandError::InvalidInput(format!("phone: {e}")))?;
    if password.is_empty() {
        return Err(CommandError::InvalidInput("password must not be empty".into()));
    }

    let pool = super::connect().await?;
    let users = UserRepository::new(&pool);

    if users.get_by_email(email.as_str()).await?.is_some() {
        warn!(email = %email, "Admin user already exists, nothing to do");
        return Ok(());
    }

    let new_user = NewUser {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
        phone,
        address: address.to_owned(),
        password_hash: auth::hash_password(password)?,
        role: UserRole::Admin,
    };
    let user = users.insert(&new_user).await?;

    info!(id = %user.id, email = %user.email, "Admin user created successfully!");
    Ok(())
}
