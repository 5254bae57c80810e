//! Translation of every failure kind into an HTTP response.

use crate::app::errors::DataAccessError;
use crate::app::login_service::LoginError;
use crate::domain::model::ValidationError;
use crate::transport::http::types::{DetailResponse, PRODUCT_NOT_FOUND};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing/mistyped field, bad path parameter, or value rule violation.
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn product_not_found() -> Self {
        ApiError::NotFound(PRODUCT_NOT_FOUND.to_string())
    }

    /// Internal error whose message names the failed operation and includes the cause.
    pub fn internal(context: &str, cause: impl Display) -> Self {
        ApiError::Internal(format!("{}: {}", context, cause))
    }

    /// Maps a data access failure raised while performing `context`.
    pub fn from_data_access(context: &str, err: DataAccessError) -> Self {
        match err {
            // The cause already says it is a connection problem.
            DataAccessError::Connectivity(_) => ApiError::Internal(err.to_string()),
            DataAccessError::Statement(_) => ApiError::internal(context, err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "request rejected");
        }
        (status, Json(DetailResponse::new(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        ApiError::Unprocessable(format!("Invalid JSON body: {}", err.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        ApiError::Unprocessable(format!("Invalid path parameter: {}", err.body_text()))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Unprocessable(err.to_string())
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::AccountNotFound => ApiError::NotFound(err.to_string()),
            LoginError::InvalidPassword => ApiError::Unauthorized(err.to_string()),
            LoginError::DataAccess(e) => ApiError::from_data_access("Error during login", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_detail(err: ApiError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: DetailResponse = serde_json::from_slice(&bytes).unwrap();
        (status, body.detail)
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_detail() {
        let (status, detail) = body_detail(ApiError::product_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Product not found");
    }

    #[tokio::test]
    async fn statement_failure_keeps_context_and_cause() {
        let err = ApiError::from_data_access(
            "Error creating product",
            DataAccessError::Statement(sqlx::Error::Protocol("duplicate key".to_string())),
        );
        let (status, detail) = body_detail(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(detail.starts_with("Error creating product: "));
        assert!(detail.contains("duplicate key"));
    }

    #[tokio::test]
    async fn connectivity_failure_is_internal() {
        let err = ApiError::from_data_access(
            "Error fetching products",
            DataAccessError::Connectivity(sqlx::Error::PoolTimedOut),
        );
        let (status, detail) = body_detail(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(detail.starts_with("Database connection error: "));
    }

    #[test]
    fn login_failures_are_distinguishable() {
        assert_eq!(
            ApiError::from(LoginError::AccountNotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(LoginError::InvalidPassword).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(LoginError::DataAccess(DataAccessError::Connectivity(
                sqlx::Error::PoolClosed
            )))
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_failure_is_unprocessable() {
        let err = ApiError::from(ValidationError::NegativeStock(-3));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("-3"));
    }
}
