//! Products API: CRUD over a single `products` table with validated input and OpenAPI docs.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{NewProduct, Product, ProductChanges};
pub use routes::{app, common_routes, docs_routes, product_routes, ApiDoc};
pub use service::{ProductService, Violation};
pub use state::AppState;
pub use store::{connect, connect_db, ensure_schema, reset_schema, MemoryProductStore, PgProductStore, ProductStore};

/// Install the `tracing` subscriber used by both binaries. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("products_api=info,tower_http=info")),
        )
        .init();
}
