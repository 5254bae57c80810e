//! Application services: the data access layer and the login flow built on it.

pub mod catalog_store;
pub mod database_service;
pub mod errors;
pub mod login_service;
