//! HTTP-level integration tests for the purchase order lifecycle,
//! the dashboard counts, and the reports page.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, post_form};
use procure_core::purchase_order::{PurchaseOrderStatus, CANCEL_APPROVED_MESSAGE};
use procure_core::types::DbId;
use procure_db::repositories::PurchaseOrderRepo;
use sqlx::SqlitePool;

async fn status_of(pool: &SqlitePool, id: DbId) -> PurchaseOrderStatus {
    PurchaseOrderRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .expect("order should exist")
        .status
}

/// Seed a vendor, a product, and one pending order; return the order id.
async fn seed_pending(pool: &SqlitePool) -> DbId {
    let vendor = common::seed_vendor(pool, "Acme").await;
    let product = common::seed_product(pool, "Widget", 9.99).await;
    common::seed_order(pool, vendor, product).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_form_lists_vendors_and_products(pool: SqlitePool) {
    let vendor = common::seed_vendor(&pool, "Acme").await;
    let product = common::seed_product(&pool, "Widget", 9.99).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/create-po").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&format!(r#"<option value="{vendor}">Acme</option>"#)));
    assert!(html.contains(&format!(r#"<option value="{product}">Widget (9.99)</option>"#)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_is_pending(pool: SqlitePool) {
    let vendor = common::seed_vendor(&pool, "Acme").await.to_string();
    let product = common::seed_product(&pool, "Widget", 9.99).await.to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/create-po",
        &[
            ("vendor", vendor.as_str()),
            ("product", product.as_str()),
            ("quantity", "3"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let orders = PurchaseOrderRepo::list(&pool, None).await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].quantity, 3);
    assert_eq!(orders[0].status, PurchaseOrderStatus::Pending);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_order_with_bad_input_is_rejected(pool: SqlitePool) {
    let vendor = common::seed_vendor(&pool, "Acme").await.to_string();
    let product = common::seed_product(&pool, "Widget", 9.99).await.to_string();
    let (vendor, product) = (vendor.as_str(), product.as_str());

    let cases: [[(&str, &str); 3]; 4] = [
        [("vendor", "acme"), ("product", product), ("quantity", "1")],
        [("vendor", vendor), ("product", product), ("quantity", "many")],
        [("vendor", vendor), ("product", product), ("quantity", "0")],
        // Well-formed but referencing a vendor that does not exist.
        [("vendor", "999999"), ("product", product), ("quantity", "1")],
    ];
    for fields in &cases {
        let app = common::build_test_app(pool.clone());
        let response = post_form(app, "/create-po", fields).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{fields:?}");
    }

    assert!(PurchaseOrderRepo::list(&pool, None).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Approve / cancel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_pending_order(pool: SqlitePool) {
    let id = seed_pending(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/approve-po/{id}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/purchase-orders");
    assert_eq!(status_of(&pool, id).await, PurchaseOrderStatus::Approved);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_cancelled_order_is_allowed(pool: SqlitePool) {
    let id = seed_pending(&pool).await;
    PurchaseOrderRepo::set_status(&pool, id, PurchaseOrderStatus::Cancelled)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/approve-po/{id}")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(status_of(&pool, id).await, PurchaseOrderStatus::Approved);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cancel_pending_then_cancel_again_succeeds(pool: SqlitePool) {
    let id = seed_pending(&pool).await;

    for _ in 0..2 {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/cancel-po/{id}")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/purchase-orders");
        assert_eq!(status_of(&pool, id).await, PurchaseOrderStatus::Cancelled);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cancel_approved_order_is_refused(pool: SqlitePool) {
    let id = seed_pending(&pool).await;
    PurchaseOrderRepo::set_status(&pool, id, PurchaseOrderStatus::Approved)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/cancel-po/{id}")).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_text(response).await, CANCEL_APPROVED_MESSAGE);
    assert_eq!(status_of(&pool, id).await, PurchaseOrderStatus::Approved);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_change_on_missing_order_returns_404(pool: SqlitePool) {
    for uri in ["/approve-po/777", "/cancel-po/777"] {
        let app = common::build_test_app(pool.clone());
        assert_eq!(get(app, uri).await.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

// ---------------------------------------------------------------------------
// Listing and aggregates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_by_exact_status(pool: SqlitePool) {
    let vendor = common::seed_vendor(&pool, "Acme").await;
    let product = common::seed_product(&pool, "Widget", 9.99).await;
    let pending = common::seed_order(&pool, vendor, product).await;
    let approved = common::seed_order(&pool, vendor, product).await;
    PurchaseOrderRepo::set_status(&pool, approved, PurchaseOrderStatus::Approved)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let html = body_text(get(app, "/purchase-orders?status=Approved").await).await;
    assert!(html.contains(&format!("<tr><td>{approved}</td>")));
    assert!(!html.contains(&format!("<tr><td>{pending}</td>")));

    let app = common::build_test_app(pool.clone());
    let html = body_text(get(app, "/purchase-orders?status=approved").await).await;
    assert!(html.contains("No purchase orders."));

    let app = common::build_test_app(pool);
    let html = body_text(get(app, "/purchase-orders").await).await;
    assert!(html.contains(&format!("<tr><td>{approved}</td>")));
    assert!(html.contains(&format!("<tr><td>{pending}</td>")));
    assert!(html.contains(&format!(r#"href="/approve-po/{pending}""#)));
    assert!(!html.contains(&format!(r#"href="/approve-po/{approved}""#)));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_dashboard_counts_and_recent_orders(pool: SqlitePool) {
    let vendor = common::seed_vendor(&pool, "Acme").await;
    let product = common::seed_product(&pool, "Widget", 9.99).await;
    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(common::seed_order(&pool, vendor, product).await);
    }
    PurchaseOrderRepo::set_status(&pool, ids[0], PurchaseOrderStatus::Approved)
        .await
        .unwrap();
    PurchaseOrderRepo::set_status(&pool, ids[1], PurchaseOrderStatus::Cancelled)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<strong id="total-vendors">1</strong>"#));
    assert!(html.contains(r#"<strong id="total-products">1</strong>"#));
    assert!(html.contains(r#"<strong id="pending-orders">4</strong>"#));
    assert!(html.contains(r#"<strong id="approved-orders">1</strong>"#));

    // Five newest, so the oldest order is not listed.
    for id in &ids[1..] {
        assert!(html.contains(&format!("<tr><td>{id}</td>")), "order {id}");
    }
    assert!(!html.contains(&format!("<tr><td>{}</td>", ids[0])));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_reports_page_counts(pool: SqlitePool) {
    let id = seed_pending(&pool).await;
    let vendor = common::seed_vendor(&pool, "Globex").await;
    let product = common::seed_product(&pool, "Gadget", 2.0).await;
    common::seed_order(&pool, vendor, product).await;
    PurchaseOrderRepo::set_status(&pool, id, PurchaseOrderStatus::Approved)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/reports").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<td id="total-vendors">2</td>"#));
    assert!(html.contains(r#"<td id="total-products">2</td>"#));
    assert!(html.contains(r#"<td id="total-orders">2</td>"#));
    assert!(html.contains(r#"<td id="pending-orders">1</td>"#));
    assert!(html.contains(r#"<td id="approved-orders">1</td>"#));
}
