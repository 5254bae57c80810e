use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

pub const ADMIN_ACCOUNT_TYPE: &str = "admin";
pub const ACTIVE_STATUS: &str = "active";

/// Body of `POST /logins/`.
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: String,
}

/// A row of the externally owned `"user"` table. Never serialized.
#[derive(Clone, FromRow)]
pub struct AdminAccount {
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub account_type: String,
    pub status: String,
}

impl AdminAccount {
    pub fn is_active_admin(&self) -> bool {
        self.account_type == ADMIN_ACCOUNT_TYPE && self.status == ACTIVE_STATUS
    }
}

impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("account_type", &self.account_type)
            .field("status", &self.status)
            .finish()
    }
}
