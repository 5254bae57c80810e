//! The PostgreSQL data access layer.
//!
//! Each operation follows the same shape:
//! 1.  Acquire one pooled connection (failure here is a connectivity error).
//! 2.  Execute a single parameterized statement. Mutating statements run inside a
//!     transaction and use `RETURNING` so the affected row comes back in the same round trip.
//! 3.  Commit on success, roll back on any failure.
//! 4.  Release the connection. This is ownership-based: the `PoolConnection` (and the
//!     `Transaction` borrowing it) are dropped on every exit path, including when the request
//!     future is cancelled mid-statement, in which case sqlx rolls the transaction back.

use crate::app::catalog_store::CatalogStore;
use crate::app::errors::{acquire_failed, statement_failed, DataAccessError};
use crate::domain::model::{
    AdminAccount, Product, ProductPayload, ACTIVE_STATUS, ADMIN_ACCOUNT_TYPE, PRODUCTS_TABLE_SQL,
};
use crate::infra::config::AppConfig;
use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool, Postgres, Transaction};
use std::time::Duration;

/// The main service that manages database interaction.
///
/// Holds only the pool handle; no connection, transaction or cursor outlives a single call.
#[derive(Clone)]
pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the pool without opening a connection.
    ///
    /// The server can start while the database is down; requests then fail with a
    /// connectivity error once `acquire_timeout` elapses.
    pub fn connect_lazy(config: &AppConfig) -> Result<Self, DataAccessError> {
        let pool = Self::pool_options(config)
            .connect_lazy(&config.database_url)
            .map_err(acquire_failed)?;
        Ok(Self { pool })
    }

    /// Builds the pool and opens the first connection eagerly.
    pub async fn connect(config: &AppConfig) -> Result<Self, DataAccessError> {
        let pool = Self::pool_options(config)
            .connect(&config.database_url)
            .await
            .map_err(acquire_failed)?;
        Ok(Self { pool })
    }

    fn pool_options(config: &AppConfig) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
    }

    /// Creates the `products` table if it does not exist yet.
    pub async fn ensure_products_table(&self) -> Result<(), DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query(PRODUCTS_TABLE_SQL)
            .execute(&mut *conn)
            .await
            .map_err(statement_failed)?;
        Ok(())
    }

    /// Whether a table with this name exists in the current schema.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool, DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
            )",
        )
        .bind(table_name)
        .fetch_one(&mut *conn)
        .await
        .map_err(statement_failed)
    }

    async fn acquire(&self) -> Result<PoolConnection<Postgres>, DataAccessError> {
        self.pool.acquire().await.map_err(|e| {
            tracing::error!(error = %e, "failed to acquire database connection");
            acquire_failed(e)
        })
    }
}

/// Commits when the statement succeeded, rolls back otherwise.
///
/// The rollback happens here, before the error leaves the data access layer.
async fn finish<T>(
    tx: Transaction<'_, Postgres>,
    result: Result<T, sqlx::Error>,
) -> Result<T, DataAccessError> {
    match result {
        Ok(value) => {
            tx.commit().await.map_err(statement_failed)?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                // The connection is discarded by the pool if it is in a bad state.
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(statement_failed(e))
        }
    }
}

#[async_trait]
impl CatalogStore for DatabaseService {
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, DataAccessError> {
        let mut conn = self.acquire().await?;
        let mut tx = Connection::begin(&mut *conn).await.map_err(statement_failed)?;

        let result = sqlx::query_as::<_, Product>(
            "INSERT INTO products
                (product_picture, product_name, product_price, product_description, product_stocks)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING product_id, product_picture, product_name, product_price,
                       product_description, product_stocks",
        )
        .bind(&payload.product_picture)
        .bind(&payload.product_name)
        .bind(payload.product_price)
        .bind(&payload.product_description)
        .bind(payload.product_stocks)
        .fetch_one(&mut *tx)
        .await;

        finish(tx, result).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query_as::<_, Product>(
            "SELECT product_id, product_picture, product_name, product_price,
                    product_description, product_stocks
             FROM products
             ORDER BY product_id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(statement_failed)
    }

    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query_as::<_, Product>(
            "SELECT product_id, product_picture, product_name, product_price,
                    product_description, product_stocks
             FROM products
             WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(statement_failed)
    }

    async fn update_product(
        &self,
        product_id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, DataAccessError> {
        let mut conn = self.acquire().await?;
        let mut tx = Connection::begin(&mut *conn).await.map_err(statement_failed)?;

        // No prior existence check: an absent row simply returns nothing.
        let result = sqlx::query_as::<_, Product>(
            "UPDATE products
             SET product_picture = $1,
                 product_name = $2,
                 product_price = $3,
                 product_description = $4,
                 product_stocks = $5
             WHERE product_id = $6
             RETURNING product_id, product_picture, product_name, product_price,
                       product_description, product_stocks",
        )
        .bind(&payload.product_picture)
        .bind(&payload.product_name)
        .bind(payload.product_price)
        .bind(&payload.product_description)
        .bind(payload.product_stocks)
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await;

        finish(tx, result).await
    }

    async fn delete_product(&self, product_id: i32) -> Result<bool, DataAccessError> {
        let mut conn = self.acquire().await?;
        let mut tx = Connection::begin(&mut *conn).await.map_err(statement_failed)?;

        let result = sqlx::query_scalar::<_, i32>(
            "DELETE FROM products WHERE product_id = $1 RETURNING product_id",
        )
        .bind(product_id)
        .fetch_optional(&mut *tx)
        .await;

        finish(tx, result).await.map(|deleted| deleted.is_some())
    }

    async fn find_active_admin(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query_as::<_, AdminAccount>(
            "SELECT email, password, account_type, status
             FROM \"user\"
             WHERE email = $1 AND account_type = $2 AND status = $3",
        )
        .bind(email)
        .bind(ADMIN_ACCOUNT_TYPE)
        .bind(ACTIVE_STATUS)
        .fetch_optional(&mut *conn)
        .await
        .map_err(statement_failed)
    }

    async fn ping(&self) -> Result<(), DataAccessError> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(statement_failed)?;
        Ok(())
    }
}
