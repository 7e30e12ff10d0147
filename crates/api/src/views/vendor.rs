//! Vendor pages: the searchable list and the add/edit form.

use std::fmt::Write;

use procure_db::models::vendor::Vendor;

use super::{escape, escape_opt, layout};

/// GET /vendors
pub fn list_page(vendors: &[Vendor], search: Option<&str>) -> String {
    let mut body = format!(
        r#"<form method="get" action="/vendors">
<input type="text" name="search" value="{}" placeholder="Search by name">
<button type="submit">Search</button>
</form>
<p><a href="/add-vendor">Add vendor</a></p>
"#,
        escape_opt(search)
    );

    if vendors.is_empty() {
        body.push_str("<p>No vendors found.</p>");
        return layout("Vendors", &body);
    }

    body.push_str(
        "<table>\n<tr><th>ID</th><th>Name</th><th>Email</th><th>Phone</th>\
         <th>Address</th><th>Actions</th></tr>\n",
    );
    for vendor in vendors {
        let _ = writeln!(
            body,
            r#"<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td><a href="/edit-vendor/{id}">Edit</a> <a href="/delete-vendor/{id}">Delete</a></td></tr>"#,
            escape(&vendor.name),
            escape_opt(vendor.email.as_deref()),
            escape_opt(vendor.phone.as_deref()),
            escape_opt(vendor.address.as_deref()),
            id = vendor.id,
        );
    }
    body.push_str("</table>");
    layout("Vendors", &body)
}

/// GET /add-vendor and GET /edit-vendor/{id}.
///
/// With `Some(vendor)` the fields are pre-filled and the form posts back to
/// the vendor's edit route.
pub fn form_page(vendor: Option<&Vendor>) -> String {
    let (title, action, button) = match vendor {
        Some(v) => ("Edit Vendor", format!("/edit-vendor/{}", v.id), "Save"),
        None => ("Add Vendor", "/add-vendor".to_string(), "Add"),
    };
    let name = vendor.map(|v| escape(&v.name)).unwrap_or_default();
    let email = escape_opt(vendor.and_then(|v| v.email.as_deref()));
    let phone = escape_opt(vendor.and_then(|v| v.phone.as_deref()));
    let address = escape_opt(vendor.and_then(|v| v.address.as_deref()));

    let body = format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Email <input type="text" name="email" value="{email}"></label>
<label>Phone <input type="text" name="phone" value="{phone}"></label>
<label>Address <textarea name="address">{address}</textarea></label>
<button type="submit">{button}</button>
</form>"#
    );
    layout(title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor() -> Vendor {
        Vendor {
            id: 4,
            name: "Acme <Corp>".to_string(),
            email: Some("sales@acme.test".to_string()),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn list_escapes_names_and_links_actions() {
        let html = list_page(&[vendor()], Some("ac"));
        assert!(html.contains("Acme &lt;Corp&gt;"));
        assert!(html.contains(r#"href="/edit-vendor/4""#));
        assert!(html.contains(r#"href="/delete-vendor/4""#));
        assert!(html.contains(r#"value="ac""#));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let html = form_page(Some(&vendor()));
        assert!(html.contains(r#"action="/edit-vendor/4""#));
        assert!(html.contains(r#"value="sales@acme.test""#));
    }

    #[test]
    fn add_form_posts_to_add_route() {
        let html = form_page(None);
        assert!(html.contains(r#"action="/add-vendor""#));
        assert!(html.contains(r#"name="name" value="""#));
        assert!(!html.contains("maxlength"));
    }
}
