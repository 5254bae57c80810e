pub mod router;
pub mod types;
pub mod handlers {
    pub mod common;
    pub mod health;
    pub mod logins;
    pub mod products;
}

pub use handlers::common::ApiError;
pub use router::{cors_layer, create_router, ApiDoc};
pub use types::AppState;
