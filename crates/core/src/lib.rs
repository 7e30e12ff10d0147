//! Domain layer for the procurement ERP.
//!
//! Holds the primitive types shared by every crate, the domain error enum,
//! the purchase-order status state machine, and the parsing/validation of
//! submitted form fields into typed inputs.

pub mod error;
pub mod input;
pub mod purchase_order;
pub mod types;
