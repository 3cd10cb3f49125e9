//! User account types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use foodcourt_core::{Email, Phone, UserId, UserRole};

/// A registered account (domain type).
///
/// The password hash is deliberately not part of this struct; repositories
/// return it separately only where credential verification needs it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Unique email address.
    pub email: Email,
    /// Contact phone number.
    pub phone: Phone,
    /// Delivery address.
    pub address: String,
    /// Account role (client or admin).
    pub role: UserRole,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Full display name, as stored on order snapshots.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data for inserting a new account.
///
/// The password must already be hashed; repositories never see plaintext
/// credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = User {
            id: UserId::new(1),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: Email::parse("ada@example.com").expect("valid email"),
            phone: Phone::parse("12345678901").expect("valid phone"),
            address: "12 Analytical Row".to_owned(),
            role: UserRole::Client,
            created_at: Utc::now(),
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
