use crate::app::login_service::authenticate;
use crate::domain::model::{LoginRequest, LoginResponse};
use crate::transport::http::handlers::common::ApiError;
use crate::transport::http::types::{AppState, DetailResponse, LOGIN_SUCCESSFUL};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::field::Empty;
use tracing::{info, instrument, Span};

#[utoipa::path(
    post,
    path = "/logins/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Wrong password", body = DetailResponse),
        (status = 404, description = "No active admin with this email", body = DetailResponse),
        (status = 422, description = "Invalid login payload", body = DetailResponse),
        (status = 500, description = "Database error", body = DetailResponse)
    )
)]
#[instrument(name = "handler::login", skip_all, fields(email = Empty))]
pub async fn login_handler(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = request?;
    Span::current().record("email", request.email.as_str());

    let email = authenticate(state.store.as_ref(), state.verifier.as_ref(), &request).await?;

    info!("admin login accepted");
    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESSFUL.to_string(),
        user: email,
    }))
}
