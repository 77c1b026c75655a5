//! Product entity access: the only path from handlers to the store.

use crate::error::AppError;
use crate::model::{NewProduct, Product, ProductChanges};
use crate::store::ProductStore;

pub struct ProductService;

impl ProductService {
    /// All products, highest id first.
    pub async fn list_all(store: &dyn ProductStore) -> Result<Vec<Product>, AppError> {
        store.list_all().await
    }

    pub async fn get_by_id(store: &dyn ProductStore, id: i64) -> Result<Product, AppError> {
        store.get_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(store: &dyn ProductStore, input: NewProduct) -> Result<Product, AppError> {
        let product = store.create(input).await?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    /// Full overwrite of name, price and availability.
    pub async fn update(store: &dyn ProductStore, id: i64, changes: ProductChanges) -> Result<Product, AppError> {
        let current = Self::get_by_id(store, id).await?;
        let next = current.with_changes(changes);
        store.update(&next).await?.ok_or(AppError::NotFound)
    }

    /// Read the current flag and write its negation.
    pub async fn toggle_availability(store: &dyn ProductStore, id: i64) -> Result<Product, AppError> {
        let current = Self::get_by_id(store, id).await?;
        let next = current.toggled();
        store.update(&next).await?.ok_or(AppError::NotFound)
    }

    pub async fn delete(store: &dyn ProductStore, id: i64) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(id, "product deleted");
        Ok(())
    }
}
