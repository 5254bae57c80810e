use crate::app::catalog_store::CatalogStore;
use crate::crypto::password::PasswordVerifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared, read-only handler state. Holds connection sources, never a connection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub verifier: Arc<dyn PasswordVerifier>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, verifier: Arc<dyn PasswordVerifier>) -> Self {
        Self { store, verifier }
    }
}

/// Body of every error response, and of the delete confirmation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

pub const PRODUCT_DELETED: &str = "Product deleted successfully";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
