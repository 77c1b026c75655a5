//! Product handlers. Every handler validates first; persistence is only reached with typed input.

use crate::error::AppError;
use crate::model::{CreateProductBody, UpdateProductBody};
use crate::response::{
    message_ok, product_created, product_ok, products_ok, ErrorResponse, MessageResponse, ProductListResponse,
    ProductResponse, ValidationErrorResponse, PRODUCT_DELETED,
};
use crate::service::{validate_create, validate_id, validate_update, ProductService};
use crate::state::AppState;
use crate::extractors::JsonBody;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// Get a list of products
///
/// Return a list of products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = ProductListResponse)
    )
)]
pub async fn get_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::list_all(state.store()).await?;
    Ok(products_ok(products))
}

/// Get a product by id
///
/// Return a product based on its unique ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The id of the product to retrieve")),
    responses(
        (status = 200, description = "Successful Response", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 400, description = "Bad request - Invalid ID", body = ValidationErrorResponse)
    )
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validate_id(&raw_id)?;
    let product = ProductService::get_by_id(state.store(), id).await?;
    Ok(product_ok(product))
}

/// Creates a new product
///
/// Returns a new record in the database
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductBody,
    responses(
        (status = 201, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Bad Request - Invalid input data", body = ValidationErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = validate_create(&body)?;
    let product = ProductService::create(state.store(), input).await?;
    Ok(product_created(product))
}

/// Updates a product with user input
///
/// Returns the updated product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The id of the product to update")),
    request_body = UpdateProductBody,
    responses(
        (status = 200, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Bad request - Invalid Id or Invalid input data", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let (id, changes) = validate_update(&raw_id, &body)?;
    let product = ProductService::update(state.store(), id, changes).await?;
    Ok(product_ok(product))
}

/// Updated product availability
///
/// Returns the product with its availability flipped
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The id of the product to toggle")),
    responses(
        (status = 200, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Bad request - Invalid Id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validate_id(&raw_id)?;
    let product = ProductService::toggle_availability(state.store(), id).await?;
    Ok(product_ok(product))
}

/// Deletes a product by a given ID
///
/// Returns a confirmation message
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The id of the product to delete")),
    responses(
        (status = 200, description = "Successful response", body = MessageResponse),
        (status = 400, description = "Bad request - Invalid Id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = validate_id(&raw_id)?;
    ProductService::delete(state.store(), id).await?;
    Ok(message_ok(PRODUCT_DELETED))
}
