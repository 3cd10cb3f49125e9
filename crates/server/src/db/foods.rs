//! Menu (catalog) repository.

use sqlx::PgPool;

use foodcourt_core::FoodId;

use super::{Catalog, RepositoryError};
use crate::models::{Food, NewFood};

/// Repository for menu item database operations.
pub struct FoodRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FoodRepository<'a> {
    /// Create a new food repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the whole menu, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Food>, RepositoryError> {
        let foods = sqlx::query_as::<_, Food>(
            r"
            SELECT id, name, price, image, category
            FROM foods
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(foods)
    }

    /// Get a menu item by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: FoodId) -> Result<Option<Food>, RepositoryError> {
        let food = sqlx::query_as::<_, Food>(
            r"
            SELECT id, name, price, image, category
            FROM foods
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(food)
    }

    /// Get a menu item by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Food>, RepositoryError> {
        let food = sqlx::query_as::<_, Food>(
            r"
            SELECT id, name, price, image, category
            FROM foods
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(food)
    }

    /// Insert a new menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new_food: &NewFood) -> Result<Food, RepositoryError> {
        let food = sqlx::query_as::<_, Food>(
            r"
            INSERT INTO foods (name, price, image, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, image, category
            ",
        )
        .bind(&new_food.name)
        .bind(new_food.price)
        .bind(&new_food.image)
        .bind(&new_food.category)
        .fetch_one(self.pool)
        .await?;

        Ok(food)
    }
}

impl Catalog for FoodRepository<'_> {
    async fn food_by_id(&self, id: FoodId) -> Result<Option<Food>, RepositoryError> {
        self.get_by_id(id).await
    }

    async fn food_by_name(&self, name: &str) -> Result<Option<Food>, RepositoryError> {
        self.get_by_name(name).await
    }
}
