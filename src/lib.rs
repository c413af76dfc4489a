//! shopkeep - Terminal small-business record keeper
//!
//! A command-line tool that tracks sales, inventory and deliveries in a
//! local file-backed store, with CSV import/export, JSON snapshots and a
//! plain-text business report.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ShopkeepError;
