//! Checkout route handlers.
//!
//! Thin wrappers around [`CheckoutService`]: deserialize the payload, run
//! the matching workflow variant, shape the JSON response.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use foodcourt_core::OrderId;

use crate::db::{FoodRepository, OrderRepository, UserRepository};
use crate::error::Result;
use crate::services::checkout::{CheckoutOutcome, CheckoutRequest, CheckoutService, LoginRequest};
use crate::state::AppState;

/// Response for a successful checkout.
///
/// Three shapes share one struct: `{"success": true, "order_id": n}` for
/// guest/registration, `{"success": true, "redirect": ...}` for a client
/// login, `{"admin": true, "redirect": ...}` for an admin login.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

impl From<CheckoutOutcome> for CheckoutResponse {
    fn from(outcome: CheckoutOutcome) -> Self {
        match outcome {
            CheckoutOutcome::Placed { order_id } => Self {
                success: Some(true),
                admin: None,
                order_id: Some(order_id),
                redirect: None,
            },
            CheckoutOutcome::Confirmation { .. } => Self {
                success: Some(true),
                admin: None,
                order_id: None,
                redirect: Some("/thankyou"),
            },
            CheckoutOutcome::AdminRedirect => Self {
                success: None,
                admin: Some(true),
                order_id: None,
                redirect: Some("/admin_dashboard"),
            },
        }
    }
}

fn service(
    state: &AppState,
) -> CheckoutService<FoodRepository<'_>, UserRepository<'_>, OrderRepository<'_>> {
    CheckoutService::new(
        FoodRepository::new(state.pool()),
        UserRepository::new(state.pool()),
        OrderRepository::new(state.pool()),
    )
}

/// Guest checkout.
///
/// POST /checkout/guest
#[instrument(skip_all, fields(email = %request.email))]
pub async fn guest(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let outcome = service(&state).guest(&request).await?;
    Ok(Json(outcome.into()))
}

/// Registration checkout.
///
/// POST /checkout/register
#[instrument(skip_all, fields(email = %request.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    let outcome = service(&state).register(&request).await?;
    Ok(Json(outcome.into()))
}

/// Login checkout.
///
/// POST /checkout/login
#[instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<CheckoutResponse>> {
    let outcome = service(&state).login(&request).await?;
    Ok(Json(outcome.into()))
}
