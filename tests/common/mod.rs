//! Shared fixtures: an in-memory `CatalogStore` and helpers for driving the router.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use product_catalog_api::crypto::password::PasswordVerifier;
use product_catalog_api::transport::http::{create_router, AppState};
use product_catalog_api::{AdminAccount, CatalogStore, DataAccessError, Product, ProductPayload};
use serde_json::Value as JsonValue;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct Tables {
    next_id: i32,
    products: Vec<Product>,
    users: Vec<AdminAccount>,
}

/// Storage double that behaves like the Postgres service, including the "filter in the
/// statement" admin lookup. `set_unreachable(true)` makes every call fail as if the pool could
/// not hand out a connection.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
    unreachable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, email: &str, password: &str, account_type: &str, status: &str) -> Self {
        self.tables.lock().unwrap().users.push(AdminAccount {
            email: email.to_string(),
            password_hash: PlainVerifier::hash(password),
            account_type: account_type.to_string(),
            status: status.to_string(),
        });
        self
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    pub fn product_count(&self) -> usize {
        self.tables.lock().unwrap().products.len()
    }

    fn check_reachable(&self) -> Result<(), DataAccessError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(DataAccessError::Connectivity(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogStore for InMemoryStore {
    async fn create_product(&self, payload: &ProductPayload) -> Result<Product, DataAccessError> {
        self.check_reachable()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let product = payload.clone().with_id(tables.next_id);
        tables.products.push(product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, DataAccessError> {
        self.check_reachable()?;
        Ok(self.tables.lock().unwrap().products.clone())
    }

    async fn get_product(&self, product_id: i32) -> Result<Option<Product>, DataAccessError> {
        self.check_reachable()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }

    async fn update_product(
        &self,
        product_id: i32,
        payload: &ProductPayload,
    ) -> Result<Option<Product>, DataAccessError> {
        self.check_reachable()?;
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .products
            .iter_mut()
            .find(|p| p.product_id == product_id)
            .map(|slot| {
                *slot = payload.clone().with_id(product_id);
                slot.clone()
            }))
    }

    async fn delete_product(&self, product_id: i32) -> Result<bool, DataAccessError> {
        self.check_reachable()?;
        let mut tables = self.tables.lock().unwrap();
        let before = tables.products.len();
        tables.products.retain(|p| p.product_id != product_id);
        Ok(tables.products.len() != before)
    }

    async fn find_active_admin(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, DataAccessError> {
        self.check_reachable()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|u| u.email == email && u.is_active_admin())
            .cloned())
    }

    async fn ping(&self) -> Result<(), DataAccessError> {
        self.check_reachable()
    }
}

/// Verifier for fixtures: the "hash" is the password with a prefix.
pub struct PlainVerifier;

impl PlainVerifier {
    pub fn hash(password: &str) -> String {
        format!("plain:{}", password)
    }
}

impl PasswordVerifier for PlainVerifier {
    fn verify(&self, password: &str, hash: &str) -> bool {
        hash == Self::hash(password)
    }
}

pub fn router_with(store: Arc<InMemoryStore>) -> Router {
    create_router(AppState::new(store, Arc::new(PlainVerifier)))
}

/// Sends one request through the router and returns the status and JSON body (`Null` when
/// the body is empty).
pub async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
