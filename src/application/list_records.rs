//! List records use case

use crate::domain::Record;
use crate::infrastructure::DataStore;

/// List a collection, optionally keeping only records where any field
/// value contains the search text (case-insensitive).
pub fn filter<R: Record>(store: &DataStore, search: Option<&str>) -> Vec<R> {
    let needle = search.map(|s| s.to_lowercase());

    store
        .records::<R>()
        .iter()
        .filter(|record| match &needle {
            None => true,
            Some(needle) => matches(*record, needle),
        })
        .cloned()
        .collect()
}

fn matches<R: Record>(record: &R, needle: &str) -> bool {
    record
        .fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
