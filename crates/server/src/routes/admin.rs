//! Admin dashboard route handlers.
//!
//! The dashboard itself is a separate frontend; these endpoints provide its
//! credential check and its data.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::{OrderRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::{Order, OrderLine};
use crate::services::auth;
use crate::state::AppState;

/// Admin login payload.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Admin login response.
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub redirect: &'static str,
}

/// Dashboard data: all orders (newest first) and their lines.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub orders: Vec<Order>,
    pub order_lines: Vec<OrderLine>,
}

/// Verify admin credentials.
///
/// POST /admin/login
///
/// Unlike login checkout, this accepts only admin accounts; a valid client
/// credential is still rejected.
#[instrument(skip_all, fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Missing email or password".to_string(),
        ));
    }

    let account = UserRepository::new(state.pool())
        .get_with_password_hash(&request.email)
        .await?;

    let Some((user, password_hash)) = account else {
        return Err(AppError::Unauthorized("Invalid admin credentials".to_string()));
    };

    if !auth::verify_password(&request.password, &password_hash) || !user.role.is_admin() {
        return Err(AppError::Unauthorized("Invalid admin credentials".to_string()));
    }

    tracing::info!(user_id = %user.id, "admin authenticated");
    Ok(Json(AdminLoginResponse {
        success: true,
        redirect: "/admin_dashboard",
    }))
}

/// Dashboard data.
///
/// GET /admin/orders
pub async fn orders(State(state): State<AppState>) -> Result<Json<DashboardResponse>> {
    let repo = OrderRepository::new(state.pool());
    let orders = repo.list_recent().await?;
    let order_lines = repo.list_lines().await?;

    Ok(Json(DashboardResponse {
        orders,
        order_lines,
    }))
}
