//! Order ledger repository.

use sqlx::PgPool;

use foodcourt_core::{OrderId, OrderStatus};

use super::{OrderLedger, RepositoryError};
use crate::models::{NewOrder, NewOrderLine, Order, OrderLine};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert an order and all of its lines in one transaction.
    ///
    /// Lines are resolved before this is called; either the order and every
    /// line commit together or nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails; the
    /// transaction is rolled back.
    pub async fn insert_with_lines(
        &self,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<OrderId, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order_id = sqlx::query_scalar::<_, OrderId>(
            r"
            INSERT INTO orders
                (user_id, customer_name, email, phone, address, total_amount, is_guest, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(order.user_id)
        .bind(&order.customer_name)
        .bind(&order.email)
        .bind(&order.phone)
        .bind(&order.address)
        .bind(order.total_amount)
        .bind(order.is_guest)
        .bind(OrderStatus::Pending)
        .fetch_one(&mut *tx)
        .await?;

        for line in lines {
            sqlx::query(
                r"
                INSERT INTO order_lines (order_id, food_id, quantity, price)
                VALUES ($1, $2, $3, $4)
                ",
            )
            .bind(order_id)
            .bind(line.food_id)
            .bind(line.quantity)
            .bind(line.price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(order_id)
    }

    /// List all orders, newest first (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_recent(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, customer_name, email, phone, address,
                   total_amount, created_at, is_guest, status
            FROM orders
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// List every order line (admin dashboard).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_lines(&self) -> Result<Vec<OrderLine>, RepositoryError> {
        let lines = sqlx::query_as::<_, OrderLine>(
            r"
            SELECT id, order_id, food_id, quantity, price
            FROM order_lines
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }
}

impl OrderLedger for OrderRepository<'_> {
    async fn create_order(
        &self,
        order: &NewOrder,
        lines: &[NewOrderLine],
    ) -> Result<OrderId, RepositoryError> {
        self.insert_with_lines(order, lines).await
    }
}
