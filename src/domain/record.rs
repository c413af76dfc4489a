//! Record identity and the shared record abstraction

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::codec::CsvRow;
use crate::domain::{Collection, Delivery, Product, Sale};

/// Stable identifier assigned to every record when it enters the store.
///
/// Records keep their id across edits; it never depends on the record's
/// position in its collection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        RecordId(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        RecordId(uuid)
    }

    /// Short form shown in list output (first 8 hex digits)
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }

    /// Check whether a user-supplied prefix matches this id.
    ///
    /// Hyphens and case are ignored, so both the short form from list
    /// output and a pasted full uuid work. An empty prefix never matches.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let needle: String = prefix
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != '-')
            .collect();
        !needle.is_empty() && self.0.simple().to_string().starts_with(&needle)
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// The in-memory collections: three ordered record sequences.
///
/// Owned explicitly and passed by reference; the durable mirror lives in
/// `infrastructure::DataStore`.
#[derive(Debug, Default, Clone)]
pub struct StoreData {
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
    pub deliveries: Vec<Delivery>,
}

/// A record built from loosely-typed input, plus the coercions that were
/// applied along the way
#[derive(Debug, Clone)]
pub struct Normalized<R> {
    pub record: R,
    pub issues: Vec<String>,
}

/// Shared behavior of the three stored record types
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection this record type belongs to
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;

    /// Column headers for delimited export, in serialized-name spelling
    fn headers() -> &'static [&'static str];

    /// Field values in `headers()` order
    fn fields(&self) -> Vec<String>;

    /// Build a record from one imported row, recording coercions
    fn from_row(row: &CsvRow) -> Normalized<Self>;

    /// Borrow this type's collection out of the store data
    fn records(data: &StoreData) -> &[Self];

    fn records_mut(data: &mut StoreData) -> &mut Vec<Self>;
}
