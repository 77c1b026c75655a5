//! OpenAPI document generated from the handler annotations.

use super::common::DOCS_PATH;
use crate::handlers::products;
use crate::model::{CreateProductBody, Product, UpdateProductBody};
use crate::response::{ErrorResponse, MessageResponse, ProductListResponse, ProductResponse, ValidationErrorResponse};
use crate::service::{Location, Violation};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Node.js / Express / TypeScript",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    paths(
        products::get_products,
        products::get_product_by_id,
        products::create_product,
        products::update_product,
        products::update_availability,
        products::delete_product
    ),
    components(schemas(
        Product,
        CreateProductBody,
        UpdateProductBody,
        ProductResponse,
        ProductListResponse,
        MessageResponse,
        ErrorResponse,
        ValidationErrorResponse,
        Violation,
        Location
    )),
    tags((name = "Products", description = "API operations related to products"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs/openapi.json
pub fn docs_routes() -> Router {
    Router::new().route(DOCS_PATH, get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_product_route_is_documented() {
        let doc = ApiDoc::openapi();
        let collection = doc.paths.paths.get("/api/products").expect("collection path");
        assert!(collection.get.is_some());
        assert!(collection.post.is_some());
        let item = doc.paths.paths.get("/api/products/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.patch.is_some());
        assert!(item.delete.is_some());
    }

    #[test]
    fn product_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;
        assert!(schemas.contains_key("Product"));
        assert!(schemas.contains_key("Violation"));
    }
}
