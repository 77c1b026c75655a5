//! Route tables and the assembled application router.

mod common;
mod docs;
mod products;

pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};
pub use products::product_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Base path of the product API.
pub const PRODUCTS_PATH: &str = "/api/products";

/// Full application: operational routes, docs, and `/api/products`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(docs_routes())
        .nest(PRODUCTS_PATH, product_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit)),
        )
}
