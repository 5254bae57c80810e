//! Admin login check. No session or token is issued; success only confirms the credentials.

use crate::app::catalog_store::CatalogStore;
use crate::app::errors::DataAccessError;
use crate::crypto::password::PasswordVerifier;
use crate::domain::model::LoginRequest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    /// No account with this email, or it is not an active admin.
    #[error("Admin account not found or inactive")]
    AccountNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error(transparent)]
    DataAccess(#[from] DataAccessError),
}

/// Checks the credentials and returns the authenticated email.
pub async fn authenticate(
    store: &dyn CatalogStore,
    verifier: &dyn PasswordVerifier,
    request: &LoginRequest,
) -> Result<String, LoginError> {
    let account = store
        .find_active_admin(&request.email)
        .await?
        .filter(|account| account.is_active_admin())
        .ok_or(LoginError::AccountNotFound)?;

    if !verifier.verify(&request.password, &account.password_hash) {
        return Err(LoginError::InvalidPassword);
    }

    Ok(account.email)
}
