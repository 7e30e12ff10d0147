//! Product pages: the list and the add/edit form.

use std::fmt::Write;

use procure_db::models::product::Product;

use super::{escape, escape_opt, format_price, layout};

/// GET /products
pub fn list_page(products: &[Product]) -> String {
    let mut body = String::from(r#"<p><a href="/add-product">Add product</a></p>"#);
    body.push('\n');

    if products.is_empty() {
        body.push_str("<p>No products yet.</p>");
        return layout("Products", &body);
    }

    body.push_str(
        "<table>\n<tr><th>ID</th><th>Name</th><th>Description</th><th>Price</th>\
         <th>Actions</th></tr>\n",
    );
    for product in products {
        let _ = writeln!(
            body,
            r#"<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/edit-product/{id}">Edit</a> <a href="/delete-product/{id}">Delete</a></td></tr>"#,
            escape(&product.name),
            escape_opt(product.description.as_deref()),
            format_price(product.price),
            id = product.id,
        );
    }
    body.push_str("</table>");
    layout("Products", &body)
}

/// GET /add-product and GET /edit-product/{id}.
pub fn form_page(product: Option<&Product>) -> String {
    let (title, action, button) = match product {
        Some(p) => ("Edit Product", format!("/edit-product/{}", p.id), "Save"),
        None => ("Add Product", "/add-product".to_string(), "Add"),
    };
    let name = product.map(|p| escape(&p.name)).unwrap_or_default();
    let description = escape_opt(product.and_then(|p| p.description.as_deref()));
    // Full precision on edit so an unchanged resubmit keeps the stored price.
    let price = product.map(|p| p.price.to_string()).unwrap_or_default();

    let body = format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Description <textarea name="description">{description}</textarea></label>
<label>Price <input type="number" name="price" value="{price}" min="0" step="any" required></label>
<button type="submit">{button}</button>
</form>"#
    );
    layout(title, &body)
}
