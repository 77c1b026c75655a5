//! Persistence: the `products` table and the store abstraction handlers reach it through.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::{
    connect, connect_db, connection_failure_message, ensure_schema, reset_schema, PgProductStore, PRODUCTS_TABLE,
};

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

/// Single-row operations against the product store. Every call is one atomic store operation.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All rows, highest id first.
    async fn list_all(&self) -> Result<Vec<Product>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert and return the row with its store-assigned id.
    async fn create(&self, product: NewProduct) -> Result<Product, AppError>;

    /// Overwrite name, price and availability of `product.id`. `None` when the row is gone.
    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError>;

    /// Returns false when no row matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
