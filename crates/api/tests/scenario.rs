//! End-to-end walk through the main workflow using only HTTP requests.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, post_form};
use procure_db::repositories::{ProductRepo, PurchaseOrderRepo, VendorRepo};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_vendor_product_order_approve_flow(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add-vendor",
        &[("name", "Acme"), ("email", ""), ("phone", ""), ("address", "")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/add-product",
        &[("name", "Widget"), ("description", ""), ("price", "9.99")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let vendor_id = VendorRepo::list(&pool, Some("Acme")).await.unwrap()[0].id.to_string();
    let product_id = ProductRepo::list(&pool).await.unwrap()[0].id.to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/create-po",
        &[
            ("vendor", vendor_id.as_str()),
            ("product", product_id.as_str()),
            ("quantity", "3"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let app = common::build_test_app(pool.clone());
    let html = body_text(get(app, "/").await).await;
    assert!(html.contains(r#"<strong id="pending-orders">1</strong>"#));
    assert!(html.contains(r#"<strong id="approved-orders">0</strong>"#));

    let order_id = PurchaseOrderRepo::list(&pool, None).await.unwrap()[0].id;
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/approve-po/{order_id}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let app = common::build_test_app(pool.clone());
    let html = body_text(get(app, "/purchase-orders?status=Approved").await).await;
    assert_eq!(html.matches("<tr><td>").count(), 1);
    assert!(html.contains(&format!("<tr><td>{order_id}</td><td>Acme</td><td>Widget</td><td>3</td>")));

    let approved = PurchaseOrderRepo::list(&pool, Some("Approved")).await.unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, order_id);
}
