//! Submitted form fields and their typed, validated counterparts.
//!
//! Browsers post every field as text. Each `*Form` struct is the raw,
//! string-typed body; [`VendorForm::into_input`] and friends trim the
//! values, coerce numbers, and run the `validator` rules, reporting any
//! failure as [`CoreError::Validation`].

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Vendor
// ---------------------------------------------------------------------------

/// Raw body of the add-vendor and edit-vendor forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VendorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Validated vendor fields, ready to be written. Apart from the required
/// name, every field is free text.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct VendorInput {
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl VendorForm {
    pub fn into_input(self) -> Result<VendorInput, CoreError> {
        let input = VendorInput {
            name: self.name.trim().to_string(),
            email: optional(&self.email),
            phone: optional(&self.phone),
            address: optional(&self.address),
        };
        input.validate().map_err(validation_error)?;
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// Raw body of the add-product and edit-product forms.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// Validated product fields.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductInput {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

impl ProductForm {
    pub fn into_input(self) -> Result<ProductInput, CoreError> {
        let input = ProductInput {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            price: parse_price(&self.price)?,
        };
        input.validate().map_err(validation_error)?;
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// Purchase order
// ---------------------------------------------------------------------------

/// Raw body of the create-po form. `vendor` and `product` carry ids.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PurchaseOrderForm {
    pub vendor: String,
    pub product: String,
    pub quantity: String,
}

/// Validated purchase order fields.
///
/// The referenced vendor and product are not looked up here; the store's
/// foreign keys reject ids that do not exist.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct PurchaseOrderInput {
    pub vendor_id: DbId,
    pub product_id: DbId,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

impl PurchaseOrderForm {
    pub fn into_input(self) -> Result<PurchaseOrderInput, CoreError> {
        let input = PurchaseOrderInput {
            vendor_id: parse_integer("vendor", &self.vendor)?,
            product_id: parse_integer("product", &self.product)?,
            quantity: parse_integer("quantity", &self.quantity)?,
        };
        input.validate().map_err(validation_error)?;
        Ok(input)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Trimmed value, or `None` when the field was left blank.
fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parse a price. `NaN` and infinities parse as `f64` but are not prices.
fn parse_price(raw: &str) -> Result<f64, CoreError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("Price must be a number, got '{raw}'")))?;
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "Price must be a finite number, got '{raw}'"
        )));
    }
    Ok(value)
}

fn parse_integer(field: &str, raw: &str) -> Result<i64, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} must be a whole number, got '{raw}'")))
}

/// Flatten validator output into one deterministic message.
fn validation_error(errors: ValidationErrors) -> CoreError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    CoreError::Validation(messages.join("; "))
}
