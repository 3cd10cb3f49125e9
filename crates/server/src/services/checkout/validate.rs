//! Checkout payload validation.
//!
//! Pure functions: raw payload in, validated contact details or a
//! [`CheckoutError`] out. Nothing here touches the database, so a rejected
//! request never leaves partial state behind.

use foodcourt_core::{Email, Phone};

use super::error::CheckoutError;
use super::{CheckoutRequest, LoginRequest};

/// Contact details that passed validation, with email and phone promoted to
/// their typed forms.
#[derive(Debug, Clone)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
}

impl ContactDetails {
    /// Customer name as snapshotted onto orders ("First Last").
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validate the contact fields of a guest or registration checkout.
///
/// Checks run in the same order the endpoints advertise them: email format,
/// phone format, then required fields (password only when
/// `require_password`).
///
/// # Errors
///
/// Returns the first failing check as a [`CheckoutError`].
pub fn contact(
    request: &CheckoutRequest,
    require_password: bool,
) -> Result<ContactDetails, CheckoutError> {
    let email = Email::parse(&request.email).map_err(|_| CheckoutError::InvalidEmail)?;
    let phone = Phone::parse(&request.phone).map_err(|_| CheckoutError::InvalidPhone)?;

    if request.first_name.is_empty() {
        return Err(CheckoutError::MissingField("first_name"));
    }
    if request.last_name.is_empty() {
        return Err(CheckoutError::MissingField("last_name"));
    }
    if request.address.is_empty() {
        return Err(CheckoutError::MissingField("address"));
    }
    if require_password && request.password.as_deref().unwrap_or("").is_empty() {
        return Err(CheckoutError::MissingField("password"));
    }

    Ok(ContactDetails {
        first_name: request.first_name.clone(),
        last_name: request.last_name.clone(),
        email,
        phone,
        address: request.address.clone(),
    })
}

/// Validate a login checkout: email and password must be present.
///
/// No format checks beyond presence; the credential lookup decides the rest.
///
/// # Errors
///
/// Returns [`CheckoutError::MissingField`] for an empty email or password.
pub fn login(request: &LoginRequest) -> Result<(), CheckoutError> {
    if request.email.is_empty() {
        return Err(CheckoutError::MissingField("email"));
    }
    if request.password.is_empty() {
        return Err(CheckoutError::MissingField("password"));
    }
    Ok(())
}
