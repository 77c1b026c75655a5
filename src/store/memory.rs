//! In-process store with the same contract as the PostgreSQL one, used as the test double
//! behind the router and service tests.

use super::ProductStore;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> AppError {
    AppError::Db(sqlx::Error::Protocol("memory store lock poisoned".into()))
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        inner.last_id += 1;
        let row = Product {
            id: inner.last_id,
            name: product.name,
            price: product.price,
            availability: product.availability,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
