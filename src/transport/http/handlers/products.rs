use crate::domain::model::{Product, ProductPayload};
use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::types::{AppState, DetailResponse, PRODUCT_DELETED};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use tracing::field::Empty;
use tracing::{info, instrument, Span};

#[utoipa::path(
    post,
    path = "/products/",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product created", body = Product),
        (status = 422, description = "Invalid product payload", body = DetailResponse),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::create_product", skip_all, fields(product_id = Empty))]
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let product = state
        .store
        .create_product(&payload)
        .await
        .map_err(|e| ApiError::from_data_access("Error creating product", e))?;

    Span::current().record("product_id", product.product_id);
    info!("product created");
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products ordered by id", body = [Product]),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::list_products", skip_all)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .store
        .list_products()
        .await
        .map_err(|e| ApiError::from_data_access("Error fetching products", e))?;

    info!(count = products.len(), "products listed");
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "The product", body = Product),
        (status = 404, description = "Product not found", body = DetailResponse),
        (status = 422, description = "Non-integer id", body = DetailResponse),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::get_product", skip_all, fields(product_id = Empty))]
pub async fn get_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(product_id) = path?;
    Span::current().record("product_id", product_id);

    state
        .store
        .get_product(product_id)
        .await
        .map_err(|e| ApiError::from_data_access("Error fetching product", e))?
        .map(Json)
        .ok_or_else(ApiError::product_not_found)
}

#[utoipa::path(
    put,
    path = "/products/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product identifier")
    ),
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 404, description = "Product not found", body = DetailResponse),
        (status = 422, description = "Invalid id or payload", body = DetailResponse),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::update_product", skip_all, fields(product_id = Empty))]
pub async fn update_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(product_id) = path?;
    Span::current().record("product_id", product_id);
    let Json(payload) = payload?;
    payload.validate()?;

    let product = state
        .store
        .update_product(product_id, &payload)
        .await
        .map_err(|e| ApiError::from_data_access("Error updating product", e))?
        .ok_or_else(ApiError::product_not_found)?;

    info!(product_id, "product replaced");
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DetailResponse),
        (status = 404, description = "Product not found", body = DetailResponse),
        (status = 422, description = "Non-integer id", body = DetailResponse),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::delete_product", skip_all, fields(product_id = Empty))]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<DetailResponse>, ApiError> {
    let Path(product_id) = path?;
    Span::current().record("product_id", product_id);

    let deleted = state
        .store
        .delete_product(product_id)
        .await
        .map_err(|e| ApiError::from_data_access("Error deleting product", e))?;
    if !deleted {
        return Err(ApiError::product_not_found());
    }

    info!(product_id, "product deleted");
    Ok(Json(DetailResponse::new(PRODUCT_DELETED)))
}
