//! Centralized configuration (environment variables + defaults).
//!
//! Read once at process start; immutable afterwards.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct AppConfig {
    /// Database URL must be provided (no default) for safety.
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Origins allowed to call the API with credentials. Empty means no cross-origin access.
    pub cors_allowed_origins: Vec<HeaderValue>,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The URL usually embeds credentials.
        f.debug_struct("AppConfig")
            .field("database_url", &"<redacted>")
            .field("bind_addr", &self.bind_addr)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_addr: SocketAddr =
            parse_or(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR.parse().ok())?;
        let db_max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", Some(DEFAULT_DB_MAX_CONNECTIONS))?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let db_acquire_timeout_secs = parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            Some(DEFAULT_DB_ACQUIRE_TIMEOUT_SECS),
        )?;

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            database_url,
            bind_addr,
            cors_allowed_origins,
            db_max_connections,
            db_acquire_timeout_secs,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: Option<T>) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            name,
            value: raw,
            reason: e.to_string(),
        }),
        None => default.ok_or(ConfigError::Missing(name)),
    }
}

/// Comma-separated origins; blanks and trailing slashes are dropped.
///
/// Credentials are always allowed, so the `*` wildcard is refused.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "CORS_ALLOWED_ORIGINS",
        value: raw.to_string(),
        reason,
    };

    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(|origin| {
            if origin == "*" {
                return Err(invalid(
                    "wildcard origin cannot be combined with credentials".to_string(),
                ));
            }
            HeaderValue::from_str(origin)
                .map_err(|e| invalid(format!("origin '{}' is not a valid header value: {}", origin, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn database_url_is_required() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/db")]))
            .unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(cfg.db_acquire_timeout_secs, DEFAULT_DB_ACQUIRE_TIMEOUT_SECS);
        assert!(cfg.cors_allowed_origins.is_empty());
    }

    #[test]
    fn origins_are_split_and_normalized() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            (
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000/, https://shop.example.com,,",
            ),
        ]))
        .unwrap();
        assert_eq!(
            cfg.cors_allowed_origins,
            vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("https://shop.example.com"),
            ]
        );
    }

    #[test]
    fn wildcard_origin_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("CORS_ALLOWED_ORIGINS", "http://localhost:3000, *"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { name: "CORS_ALLOWED_ORIGINS", .. }
        ));
        assert!(err.to_string().contains("wildcard"));
    }

    #[test]
    fn origin_that_is_not_a_header_value_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("CORS_ALLOWED_ORIGINS", "http://ok.example.com,http://bad\norigin"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { name: "CORS_ALLOWED_ORIGINS", .. }
        ));
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("DB_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. }
        ));

        let err = AppConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("DB_MAX_CONNECTIONS", "0"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn debug_output_hides_database_url() {
        let cfg = AppConfig::from_lookup(lookup(&[(
            "DATABASE_URL",
            "postgres://admin:s3cret@db/products",
        )]))
        .unwrap();
        assert!(!format!("{:?}", cfg).contains("s3cret"));
    }
}
