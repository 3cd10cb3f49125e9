//! Menu route handlers.

use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::db::FoodRepository;
use crate::error::{AppError, Result};
use crate::models::{Food, NewFood};
use crate::state::AppState;

/// Payload for adding a menu item.
#[derive(Debug, Deserialize)]
pub struct AddFoodRequest {
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// List the menu.
///
/// GET /menu
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Food>>> {
    let foods = FoodRepository::new(state.pool()).list().await?;
    Ok(Json(foods))
}

/// Add a menu item.
///
/// POST /foods
#[instrument(skip_all, fields(name = %request.name))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<AddFoodRequest>,
) -> Result<(StatusCode, Json<Food>)> {
    if request.name.is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }
    if request.price < Decimal::ZERO {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }

    let food = FoodRepository::new(state.pool())
        .create(&NewFood {
            name: request.name,
            price: request.price,
            image: request.image,
            category: request.category,
        })
        .await?;

    tracing::info!(food_id = %food.id, "menu item added");
    Ok((StatusCode::CREATED, Json(food)))
}
