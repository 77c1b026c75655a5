//! Shared application state for all routes.

use crate::store::{PgProductStore, ProductStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new<S: ProductStore + 'static>(store: S) -> Self {
        AppState { store: Arc::new(store) }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(PgProductStore::new(pool))
    }

    pub fn store(&self) -> &dyn ProductStore {
        self.store.as_ref()
    }
}
