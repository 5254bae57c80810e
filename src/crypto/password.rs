//! Password verification for admin logins.
//!
//! Stored hashes are PHC strings (`$argon2id$v=19$...`). This service only ever verifies;
//! hashes are produced by whoever owns the `"user"` table.

use argon2::password_hash::{PasswordHash, PasswordVerifier as _};
use argon2::Argon2;

/// Opaque `verify(password, hash) -> bool` capability.
pub trait PasswordVerifier: Send + Sync {
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Argon2 verifier. The algorithm parameters are read from the PHC string itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Verifier;

impl PasswordVerifier for Argon2Verifier {
    fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                // A malformed stored hash can never match; it is a data problem, not a login one.
                tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
                return false;
            }
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
