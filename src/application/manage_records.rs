//! Add, edit, remove and clear use cases

use crate::domain::Record;
use crate::error::{Result, ShopkeepError};
use crate::infrastructure::DataStore;

/// Append a new record and report its id
pub fn add_record<R: Record>(store: &mut DataStore, record: R) -> Result<()> {
    let short = record.id().short();
    store.append(record)?;
    println!("Added {} {}", R::COLLECTION.singular(), short);
    Ok(())
}

/// Fully replace the stored record carrying the same id
pub fn edit_record<R: Record>(store: &mut DataStore, record: R) -> Result<()> {
    let id = record.id();
    if !store.replace(id, record)? {
        return Err(ShopkeepError::UnknownRecord(id.short()));
    }
    println!("Updated {} {}", R::COLLECTION.singular(), id.short());
    Ok(())
}

/// Delete one record. `proceed` is the caller's confirmation decision;
/// without it nothing is touched.
pub fn remove_record<R: Record>(store: &mut DataStore, prefix: &str, proceed: bool) -> Result<()> {
    if !proceed {
        println!("Cancelled");
        return Ok(());
    }

    let id = store.find_id::<R>(prefix)?;
    store.remove::<R>(id)?;
    println!("Deleted {} {}", R::COLLECTION.singular(), id.short());
    Ok(())
}

/// Wipe every collection. `proceed` is the caller's confirmation decision.
pub fn clear_store(store: &mut DataStore, proceed: bool) -> Result<()> {
    if !proceed {
        println!("Cancelled");
        return Ok(());
    }

    store.clear()?;
    println!("All records cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sale, SaleStatus};
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> DataStore {
        DataStore::load(FileSystemRepository::new(temp.path().to_path_buf()))
    }

    fn sample_sale() -> Sale {
        Sale::build("A1", "Bob", "Widget", 100.0, None, SaleStatus::Paid)
    }

    #[test]
    fn test_remove_without_confirmation_keeps_record() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let sale = sample_sale();
        let prefix = sale.id.short();
        store.append(sale).unwrap();

        remove_record::<Sale>(&mut store, &prefix, false).unwrap();
        assert_eq!(store.records::<Sale>().len(), 1);

        remove_record::<Sale>(&mut store, &prefix, true).unwrap();
        assert!(store.records::<Sale>().is_empty());
    }

    #[test]
    fn test_remove_unknown_prefix_errors() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        assert!(remove_record::<Sale>(&mut store, "deadbeef", true).is_err());
    }

    #[test]
    fn test_clear_without_confirmation_keeps_records() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.append(sample_sale()).unwrap();

        clear_store(&mut store, false).unwrap();
        assert_eq!(store.records::<Sale>().len(), 1);

        clear_store(&mut store, true).unwrap();
        assert!(store.records::<Sale>().is_empty());
    }
}
