//! Credential hashing and verification.
//!
//! Passwords are stored as Argon2id hashes; nothing outside this module
//! handles hash strings directly.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors from credential hashing.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Hashing the password failed.
    #[error("password hashing error")]
    Hash,
}

/// Hash a password using Argon2id.
///
/// # Errors
///
/// Returns [`CredentialError::Hash`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| CredentialError::Hash)
}

/// Verify a claimed password against a stored hash.
///
/// Returns `false` for a wrong password or an unparseable stored hash; the
/// caller treats both as invalid credentials.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
