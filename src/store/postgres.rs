//! PostgreSQL connection handling, `products` DDL and the sqlx-backed store.

use super::ProductStore;
use crate::config::Config;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

const PRODUCT_COLUMNS: &str = "id, name, price, availability";

/// Open the pool. One attempt; the error is returned untouched.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Like [`connect`], but a failure is logged (with the driver's message) instead of returned.
/// The caller decides whether to keep running.
pub async fn connect_db(config: &Config) -> Option<PgPool> {
    match connect(config).await {
        Ok(pool) => {
            tracing::info!("database connection established");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("{}", connection_failure_message(&e));
            None
        }
    }
}

pub fn connection_failure_message(err: &AppError) -> String {
    match err {
        AppError::Db(e) => format!("Hubo un error al conectarse a la base de datos: {}", e),
        other => format!("Hubo un error al conectarse a la base de datos: {}", other),
    }
}

/// Create the `products` table if it does not exist.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    create_products_table(&mut tx).await?;
    tx.commit().await?;
    Ok(())
}

/// Drop and recreate the `products` table. Every row is lost.
pub async fn reset_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    let sql = format!("DROP TABLE IF EXISTS {}", PRODUCTS_TABLE);
    tracing::debug!(sql = %sql, "query (tx)");
    sqlx::query(&sql).execute(&mut *tx).await?;
    create_products_table(&mut tx).await?;
    tx.commit().await?;
    tracing::info!(table = PRODUCTS_TABLE, "schema recreated");
    Ok(())
}

async fn create_products_table(tx: &mut sqlx::PgConnection) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            availability BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        PRODUCTS_TABLE
    );
    tracing::debug!(sql = %ddl, "query (tx)");
    sqlx::query(&ddl).execute(&mut *tx).await?;
    Ok(())
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id DESC", PRODUCT_COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", PRODUCT_COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, product: NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, price, availability) VALUES ($1, $2, $3) RETURNING {}",
            PRODUCTS_TABLE, PRODUCT_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.availability)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, price = $3, availability = $4, updated_at = NOW() WHERE id = $1 RETURNING {}",
            PRODUCTS_TABLE, PRODUCT_COLUMNS
        );
        tracing::debug!(sql = %sql, id = product.id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
