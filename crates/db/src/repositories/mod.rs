//! One repository per table. Every method takes the pool explicitly.

pub mod product_repo;
pub mod purchase_order_repo;
pub mod report_repo;
pub mod vendor_repo;

pub use product_repo::ProductRepo;
pub use purchase_order_repo::PurchaseOrderRepo;
pub use report_repo::ReportRepo;
pub use vendor_repo::VendorRepo;
