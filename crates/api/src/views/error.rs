use axum::http::StatusCode;

use super::{escape, layout};

/// Error page for not-found, bad input, and internal failures.
pub fn page(status: StatusCode, message: &str) -> String {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<p class="error">{}</p>
<p><a href="/">Back to dashboard</a></p>"#,
        escape(message)
    );
    layout(title, &body)
}
