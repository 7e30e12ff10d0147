use procure_db::models::report::ReportSummary;

use super::layout;

/// GET /reports
pub fn page(summary: &ReportSummary) -> String {
    let body = format!(
        r#"<table>
<tr><th>Metric</th><th>Count</th></tr>
<tr><td>Total vendors</td><td id="total-vendors">{}</td></tr>
<tr><td>Total products</td><td id="total-products">{}</td></tr>
<tr><td>Total purchase orders</td><td id="total-orders">{}</td></tr>
<tr><td>Pending orders</td><td id="pending-orders">{}</td></tr>
<tr><td>Approved orders</td><td id="approved-orders">{}</td></tr>
</table>"#,
        summary.total_vendors,
        summary.total_products,
        summary.total_orders,
        summary.pending_orders,
        summary.approved_orders,
    );
    layout("Reports", &body)
}
