//! Checkout error taxonomy.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::CredentialError;

/// Errors that can terminate a checkout request.
///
/// Validation and identity errors are raised before any persistence happens;
/// an unresolvable cart line is not an error at all (the line is dropped and
/// logged, checkout continues).
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Email does not match the required format.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Phone is not exactly 11 digits.
    #[error("Phone number must be 11 digits")]
    InvalidPhone,

    /// A required field is empty or absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Registration attempted with an email that already has an account.
    #[error("Email already registered")]
    EmailTaken,

    /// Login email/password did not match any account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// Store-level failure, surfaced as an opaque server error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

impl CheckoutError {
    /// True when the error is the client's fault (validation or identity),
    /// false for store-level failures.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail
                | Self::InvalidPhone
                | Self::MissingField(_)
                | Self::EmailTaken
                | Self::InvalidCredentials
        )
    }
}
