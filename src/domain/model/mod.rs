//! Resource shapes exchanged with clients and read from the database.

pub mod account;
pub mod product;

pub use account::{AdminAccount, LoginRequest, LoginResponse, ACTIVE_STATUS, ADMIN_ACCOUNT_TYPE};
pub use product::{Product, ProductPayload, ValidationError, PRODUCTS_TABLE_SQL};
