//! Derived customer view use cases

use std::fs;
use std::path::PathBuf;

use crate::domain::customer::{derive_customers, CustomerSummary};
use crate::domain::codec;
use crate::error::Result;
use crate::infrastructure::DataStore;

/// Aggregate the customer view from the sales collection.
pub fn derive(store: &DataStore) -> Vec<CustomerSummary> {
    derive_customers(&store.data().sales)
}

/// Export the customer view to a CSV file
pub fn export(store: &DataStore, output: Option<PathBuf>) -> Result<()> {
    let customers = derive(store);

    if customers.is_empty() {
        println!("No customers to export");
        return Ok(());
    }

    let rows = customers.iter().map(|c| c.fields());
    let text = codec::csv_string(CustomerSummary::headers(), rows)?;

    let path = output.unwrap_or_else(|| PathBuf::from("customers.csv"));
    fs::write(&path, text)?;
    println!("Exported {} customers to {}", customers.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Sale, SaleStatus};
    use crate::infrastructure::FileSystemRepository;
    use tempfile::TempDir;

    #[test]
    fn test_export_writes_customer_rows() {
        let temp = TempDir::new().unwrap();
        let mut store = DataStore::load(FileSystemRepository::new(temp.path().to_path_buf()));
        store
            .append(Sale::build("A1", "Bob", "Widget", 100.0, None, SaleStatus::Paid))
            .unwrap();
        store
            .append(Sale::build("A2", "Bob", "Gadget", 50.0, None, SaleStatus::Paid))
            .unwrap();

        let out = temp.path().join("customers.csv");
        export(&store, Some(out.clone())).unwrap();

        let text = fs::read_to_string(out).unwrap();
        assert!(text.starts_with("\"name\",\"contact\",\"balance\",\"lastOrder\""));
        assert!(text.contains("\"Bob\""));
        assert!(text.contains("\"150\""));
    }

    #[test]
    fn test_export_empty_writes_no_file() {
        let temp = TempDir::new().unwrap();
        let store = DataStore::load(FileSystemRepository::new(temp.path().to_path_buf()));

        let out = temp.path().join("customers.csv");
        export(&store, Some(out.clone())).unwrap();

        assert!(!out.exists());
    }
}
