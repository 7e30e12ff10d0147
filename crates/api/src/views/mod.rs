//! Server-rendered HTML pages.
//!
//! Each submodule renders one family of pages to a `String`. Every value
//! that came from the database or the request passes through [`escape`]
//! before it is written into markup.

pub mod dashboard;
pub mod error;
pub mod product;
pub mod purchase_order;
pub mod report;
pub mod vendor;

use procure_core::types::Timestamp;

/// Navigation entries shown on every page, as `(href, label)`.
const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/vendors", "Vendors"),
    ("/products", "Products"),
    ("/purchase-orders", "Purchase Orders"),
    ("/create-po", "New PO"),
    ("/reports", "Reports"),
];

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an optional field, rendering `None` as an empty string.
pub fn escape_opt(text: Option<&str>) -> String {
    text.map(escape).unwrap_or_default()
}

pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    let nav: String = NAV
        .iter()
        .map(|(href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - ERP</title>
</head>
<body>
<nav>{nav}</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}
