//! One-shot notices carried across a redirect in a `flash` cookie.
//!
//! The cookie holds a short key rather than the message text, so the value
//! never needs escaping. The dashboard reads it, renders the message, and
//! expires the cookie in the same response.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

const COOKIE_NAME: &str = "flash";

/// A notice shown once on the next rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    VendorAdded,
}

impl Flash {
    pub fn message(self) -> &'static str {
        match self {
            Flash::VendorAdded => "Vendor added successfully!",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Flash::VendorAdded => "vendor_added",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "vendor_added" => Some(Flash::VendorAdded),
            _ => None,
        }
    }

    /// `Set-Cookie` value that stores this notice.
    pub fn set_cookie(self) -> String {
        format!("{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax", self.key())
    }

    /// `Set-Cookie` value that expires any stored notice.
    pub fn clear_cookie() -> String {
        format!("{COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }

    /// Read the notice from the request's `Cookie` headers, if any.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == COOKIE_NAME)
            .and_then(|(_, value)| Self::from_key(value))
    }
}
