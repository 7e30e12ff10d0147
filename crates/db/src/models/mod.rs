//! Row models for every table, plus the read-only projections used by
//! list pages and reports.

pub mod product;
pub mod purchase_order;
pub mod report;
pub mod vendor;
