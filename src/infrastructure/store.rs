//! The record store: in-memory collections mirrored to disk
//!
//! Every mutating operation writes the affected collections back to their
//! blobs before returning, so the durable mirror never lags the in-memory
//! state. Each collection is written independently; a failed write leaves
//! the other files as they are.

use serde::{Deserialize, Serialize};

use crate::domain::{Delivery, Product, Record, RecordId, Sale, StoreData};
use crate::error::{Result, ShopkeepError};
use crate::infrastructure::FileSystemRepository;

/// Whole-store document used for backup and bulk restore. A key that is
/// absent from a restore file leaves that collection untouched; a present
/// key replaces the collection wholesale.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales: Option<Vec<Sale>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliveries: Option<Vec<Delivery>>,
}

impl Snapshot {
    /// True when no collection key is present at all
    pub fn is_empty(&self) -> bool {
        self.sales.is_none() && self.products.is_none() && self.deliveries.is_none()
    }
}

/// The three collections plus their durable mirror
#[derive(Debug)]
pub struct DataStore {
    repository: FileSystemRepository,
    data: StoreData,
}

impl DataStore {
    /// Read all collections from the repository. A missing or corrupt
    /// blob yields an empty collection for that file only.
    pub fn load(repository: FileSystemRepository) -> Self {
        let data = StoreData {
            sales: read_collection(&repository),
            products: read_collection(&repository),
            deliveries: read_collection(&repository),
        };
        DataStore { repository, data }
    }

    pub fn repository(&self) -> &FileSystemRepository {
        &self.repository
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// Borrow one collection
    pub fn records<R: Record>(&self) -> &[R] {
        R::records(&self.data)
    }

    /// Look up a record by id
    pub fn get<R: Record>(&self, id: RecordId) -> Option<&R> {
        R::records(&self.data).iter().find(|r| r.id() == id)
    }

    /// Resolve a user-supplied id prefix to exactly one record id
    pub fn find_id<R: Record>(&self, prefix: &str) -> Result<RecordId> {
        let mut matches = R::records(&self.data)
            .iter()
            .map(|r| r.id())
            .filter(|id| id.matches_prefix(prefix));

        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id),
            (Some(_), Some(_)) => Err(ShopkeepError::AmbiguousRecord(prefix.to_string())),
            (None, _) => Err(ShopkeepError::UnknownRecord(prefix.to_string())),
        }
    }

    /// Write every collection to its blob. Files are written one at a
    /// time; on failure the files already written stay as written.
    pub fn persist(&self) -> Result<()> {
        self.write_collection::<Sale>()?;
        self.write_collection::<Product>()?;
        self.write_collection::<Delivery>()?;
        Ok(())
    }

    fn write_collection<R: Record>(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(R::records(&self.data))?;
        self.repository.write_blob(R::COLLECTION, &json)
    }

    /// Insert a record at the end of its collection
    pub fn append<R: Record>(&mut self, record: R) -> Result<()> {
        R::records_mut(&mut self.data).push(record);
        self.persist()
    }

    /// Fully overwrite the record with the given id. Returns false (and
    /// leaves the store untouched) when no record matches.
    pub fn replace<R: Record>(&mut self, id: RecordId, record: R) -> Result<bool> {
        let records = R::records_mut(&mut self.data);
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = record;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete the record with the given id, shifting later records down
    /// one position. Returns false when no record matches.
    pub fn remove<R: Record>(&mut self, id: RecordId) -> Result<bool> {
        let records = R::records_mut(&mut self.data);
        match records.iter().position(|r| r.id() == id) {
            Some(index) => {
                records.remove(index);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Append a batch of records; existing records are never touched.
    /// Returns the number of records added.
    pub fn import_merge<R: Record>(&mut self, records: Vec<R>) -> Result<usize> {
        let count = records.len();
        R::records_mut(&mut self.data).extend(records);
        self.persist()?;
        Ok(count)
    }

    /// Empty every collection
    pub fn clear(&mut self) -> Result<()> {
        self.data = StoreData::default();
        self.persist()
    }

    /// Serialize the whole store for backup
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            sales: Some(self.data.sales.clone()),
            products: Some(self.data.products.clone()),
            deliveries: Some(self.data.deliveries.clone()),
        }
    }

    /// Replace collections from a snapshot: only the keys present in the
    /// snapshot are replaced, then the store is persisted.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        if let Some(sales) = snapshot.sales {
            self.data.sales = sales;
        }
        if let Some(products) = snapshot.products {
            self.data.products = products;
        }
        if let Some(deliveries) = snapshot.deliveries {
            self.data.deliveries = deliveries;
        }
        self.persist()
    }
}

fn read_collection<R: Record>(repository: &FileSystemRepository) -> Vec<R> {
    repository
        .read_blob(R::COLLECTION)
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}
