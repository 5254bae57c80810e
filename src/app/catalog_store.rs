//! The seam between HTTP handlers and storage.

use crate::app::errors::DataAccessError;
use crate::domain::model::{AdminAccount, Product, ProductPayload};
use async_trait::async_trait;

/// Storage operations backing the API.
///
/// Every call is self-contained: implementations acquire whatever connection they need and
/// release it before returning, on success and failure alike. "Not found" is `Ok(None)` /
/// `Ok(false)`, never an error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Inserts a product and returns the stored row (with its assigned id).
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, DataAccessError>;

    /// All products, ordered by `product_id`.
    async fn list_products(&self) -> Result<Vec<Product>, DataAccessError>;

    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, DataAccessError>;

    /// Replaces every column of the product; `None` when no row has this id.
    async fn update_product(
        &self,
        product_id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, DataAccessError>;

    /// Returns `false` when no row had this id.
    async fn delete_product(&self, product_id: i32) -> Result<bool, DataAccessError>;

    /// Looks up an account with this email that is an active admin.
    async fn find_active_admin(&self, email: &str)
        -> Result<Option<AdminAccount>, DataAccessError>;

    /// Liveness probe used by `/health`.
    async fn ping(&self) -> Result<(), DataAccessError>;
}
