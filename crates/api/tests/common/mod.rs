#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use procure_core::input::{ProductInput, PurchaseOrderInput, VendorInput};
use procure_core::types::DbId;
use procure_db::repositories::{ProductRepo, PurchaseOrderRepo, VendorRepo};
use sqlx::SqlitePool;
use tower::ServiceExt;

use procure_api::config::ServerConfig;
use procure_api::router::build_app_router;
use procure_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(encode_form(fields)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Encode form fields as an `application/x-www-form-urlencoded` body.
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_vendor(pool: &SqlitePool, name: &str) -> DbId {
    VendorRepo::create(
        pool,
        &VendorInput {
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_product(pool: &SqlitePool, name: &str, price: f64) -> DbId {
    ProductRepo::create(
        pool,
        &ProductInput {
            name: name.to_string(),
            description: None,
            price,
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_order(pool: &SqlitePool, vendor_id: DbId, product_id: DbId) -> DbId {
    PurchaseOrderRepo::create(
        pool,
        &PurchaseOrderInput {
            vendor_id,
            product_id,
            quantity: 1,
        },
    )
    .await
    .unwrap()
    .id
}
