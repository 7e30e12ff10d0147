//! Purchase order pages: the order list and the create form.

use std::fmt::Write;

use procure_core::purchase_order::PurchaseOrderStatus;
use procure_db::models::product::Product;
use procure_db::models::purchase_order::PurchaseOrderView;
use procure_db::models::vendor::Vendor;

use super::{escape, format_date, format_price, layout};

/// Table of orders shared by the order list and the dashboard.
///
/// With `actions`, pending orders get approve and cancel links.
pub fn order_table(orders: &[PurchaseOrderView], actions: bool) -> String {
    if orders.is_empty() {
        return "<p>No purchase orders.</p>".to_string();
    }

    let mut rows = String::new();
    for order in orders {
        let action_cell = if !actions {
            String::new()
        } else if order.status.is_terminal() {
            "<td></td>".to_string()
        } else {
            format!(
                r#"<td><a href="/approve-po/{id}">Approve</a> <a href="/cancel-po/{id}">Cancel</a></td>"#,
                id = order.id
            )
        };
        let _ = writeln!(
            rows,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>{}</tr>",
            order.id,
            escape(&order.vendor_name),
            escape(&order.product_name),
            order.quantity,
            format_date(&order.order_date),
            order.status,
            action_cell,
        );
    }

    let action_header = if actions { "<th>Actions</th>" } else { "" };
    format!(
        "<table>\n<tr><th>ID</th><th>Vendor</th><th>Product</th><th>Quantity</th>\
         <th>Order date</th><th>Status</th>{action_header}</tr>\n{rows}</table>"
    )
}

/// GET /purchase-orders
pub fn list_page(orders: &[PurchaseOrderView], status: Option<&str>) -> String {
    let mut options = String::from(r#"<option value="">All</option>"#);
    for candidate in PurchaseOrderStatus::ALL {
        let selected = if status == Some(candidate.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            options,
            r#"<option value="{s}"{selected}>{s}</option>"#,
            s = candidate.as_str()
        );
    }

    let body = format!(
        r#"<form method="get" action="/purchase-orders">
<select name="status">{options}</select>
<button type="submit">Filter</button>
</form>
<p><a href="/create-po">Create purchase order</a></p>
{}"#,
        order_table(orders, true)
    );
    layout("Purchase Orders", &body)
}

/// GET /create-po
pub fn create_page(vendors: &[Vendor], products: &[Product]) -> String {
    let vendor_options: String = vendors
        .iter()
        .map(|v| format!(r#"<option value="{}">{}</option>"#, v.id, escape(&v.name)))
        .collect();
    let product_options: String = products
        .iter()
        .map(|p| {
            format!(
                r#"<option value="{}">{} ({})</option>"#,
                p.id,
                escape(&p.name),
                format_price(p.price)
            )
        })
        .collect();

    let body = format!(
        r#"<form method="post" action="/create-po">
<label>Vendor <select name="vendor" required>{vendor_options}</select></label>
<label>Product <select name="product" required>{product_options}</select></label>
<label>Quantity <input type="number" name="quantity" min="1" required></label>
<button type="submit">Create</button>
</form>"#
    );
    layout("Create Purchase Order", &body)
}
