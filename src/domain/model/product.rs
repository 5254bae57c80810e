use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

/// DDL for the single table this service owns.
///
/// Only used by `preflight --init-schema` and the integration tests; the API server never
/// alters the schema.
pub const PRODUCTS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS products (
    product_id SERIAL PRIMARY KEY,
    product_picture TEXT,
    product_name TEXT NOT NULL,
    product_price DOUBLE PRECISION NOT NULL,
    product_description TEXT,
    product_stocks INTEGER NOT NULL
)";

/// A persisted product row, exactly as returned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub product_id: i32,
    pub product_picture: Option<String>,
    pub product_name: String,
    pub product_price: f64,
    pub product_description: Option<String>,
    pub product_stocks: i32,
}

/// Request body for create and full-replace update.
///
/// Any `product_id` sent by the client is ignored: the identifier is always assigned by storage
/// (create) or taken from the path (update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPayload {
    #[serde(default)]
    pub product_picture: Option<String>,
    pub product_name: String,
    pub product_price: f64,
    #[serde(default)]
    pub product_description: Option<String>,
    pub product_stocks: i32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("product_price must be a finite, non-negative number (got {0})")]
    InvalidPrice(f64),

    #[error("product_stocks must be zero or positive (got {0})")]
    NegativeStock(i32),
}

impl ProductPayload {
    /// Value rules that typed deserialization cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.product_price.is_finite() || self.product_price < 0.0 {
            return Err(ValidationError::InvalidPrice(self.product_price));
        }
        if self.product_stocks < 0 {
            return Err(ValidationError::NegativeStock(self.product_stocks));
        }
        Ok(())
    }

    /// The product this payload describes once storage has assigned `product_id`.
    pub fn with_id(self, product_id: i32) -> Product {
        Product {
            product_id,
            product_picture: self.product_picture,
            product_name: self.product_name,
            product_price: self.product_price,
            product_description: self.product_description,
            product_stocks: self.product_stocks,
        }
    }
}
