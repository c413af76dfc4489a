//! Domain layer - Record types and business logic

pub mod codec;
pub mod collection;
pub mod customer;
pub mod delivery;
pub mod product;
pub mod record;
pub mod report;
pub mod sale;

pub use collection::Collection;
pub use customer::CustomerSummary;
pub use delivery::{Delivery, DeliveryStatus};
pub use product::Product;
pub use record::{Normalized, Record, RecordId, StoreData};
pub use report::DashboardReport;
pub use sale::{Sale, SaleStatus};
