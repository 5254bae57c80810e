pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_store::CatalogStore;
pub use app::database_service::DatabaseService;
pub use app::errors::DataAccessError;
pub use crypto::password::{Argon2Verifier, PasswordVerifier};
pub use domain::model::{AdminAccount, LoginRequest, Product, ProductPayload};
pub use infra::config::AppConfig;
