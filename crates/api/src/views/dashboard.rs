use procure_db::models::purchase_order::PurchaseOrderView;
use procure_db::models::report::DashboardSummary;

use super::purchase_order::order_table;
use super::{escape, layout};

/// GET /
pub fn page(
    summary: &DashboardSummary,
    recent: &[PurchaseOrderView],
    notice: Option<&str>,
) -> String {
    let notice = notice
        .map(|msg| format!(r#"<p class="flash">{}</p>"#, escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"{notice}
<ul class="summary">
<li>Total vendors: <strong id="total-vendors">{}</strong></li>
<li>Total products: <strong id="total-products">{}</strong></li>
<li>Pending orders: <strong id="pending-orders">{}</strong></li>
<li>Approved orders: <strong id="approved-orders">{}</strong></li>
</ul>
<p><a href="/add-vendor">Add vendor</a> | <a href="/add-product">Add product</a> | <a href="/create-po">Create purchase order</a></p>
<h2>Recent purchase orders</h2>
{}"#,
        summary.total_vendors,
        summary.total_products,
        summary.pending_orders,
        summary.approved_orders,
        order_table(recent, false),
    );
    layout("Dashboard", &body)
}
