//! Business report use case

use crate::domain::DashboardReport;
use crate::infrastructure::DataStore;

/// Compute the dashboard figures for the current store contents.
pub fn dashboard(store: &DataStore, expense_ratio: f64) -> DashboardReport {
    DashboardReport::compute(store.data(), expense_ratio)
}
