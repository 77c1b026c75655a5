//! Standard response envelope helpers.

use crate::model::Product;
use crate::service::Violation;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

pub const PRODUCT_DELETED: &str = "Producto Eliminado";

#[derive(Serialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

#[derive(Serialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Producto no encontrado")]
    pub error: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<Violation>,
}

pub fn product_ok(data: Product) -> (StatusCode, Json<ProductResponse>) {
    (StatusCode::OK, Json(ProductResponse { data }))
}

pub fn product_created(data: Product) -> (StatusCode, Json<ProductResponse>) {
    (StatusCode::CREATED, Json(ProductResponse { data }))
}

pub fn products_ok(data: Vec<Product>) -> (StatusCode, Json<ProductListResponse>) {
    (StatusCode::OK, Json(ProductListResponse { data }))
}

pub fn message_ok(message: &str) -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse {
            data: message.to_string(),
        }),
    )
}
