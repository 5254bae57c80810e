use crate::domain::model::{LoginRequest, LoginResponse, Product, ProductPayload};
use crate::transport::http::handlers::{health, logins, products};
use crate::transport::http::types::{AppState, DetailResponse, HealthResponse};
use axum::http::HeaderValue;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::create_product_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler,
        logins::login_handler
    ),
    components(schemas(
        Product,
        ProductPayload,
        LoginRequest,
        LoginResponse,
        DetailResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

/// Collection routes answer with and without the trailing slash.
pub fn create_router(app_state: AppState) -> Router {
    let collection = || -> MethodRouter<AppState> {
        get(products::list_products_handler).post(products::create_product_handler)
    };
    let item = || -> MethodRouter<AppState> {
        get(products::get_product_handler)
            .put(products::update_product_handler)
            .delete(products::delete_product_handler)
    };

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/products/", collection())
        .route("/products", collection())
        .route("/products/:product_id", item())
        .route("/logins/", post(logins::login_handler))
        .route("/logins", post(logins::login_handler))
        .with_state(app_state)
}

/// Only the listed origins may call the API, with credentials. Methods and request headers
/// are mirrored back for those origins.
///
/// Origins are validated by `AppConfig`, which refuses the `*` wildcard.
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
