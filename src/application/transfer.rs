//! CSV import/export and JSON backup/restore use cases

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::codec;
use crate::domain::{Collection, Delivery, Product, Record, Sale};
use crate::error::{Result, ShopkeepError};
use crate::infrastructure::{DataStore, Snapshot};

/// Export one collection to a CSV file. An empty collection writes
/// nothing and tells the user so.
pub fn export_collection<R: Record>(store: &DataStore, output: Option<PathBuf>) -> Result<()> {
    let records = store.records::<R>();

    let Some(text) = codec::export_csv(records)? else {
        println!("No {} to export", R::COLLECTION);
        return Ok(());
    };

    let path = output.unwrap_or_else(|| PathBuf::from(R::COLLECTION.export_filename()));
    fs::write(&path, text)?;
    println!(
        "Exported {} {} to {}",
        records.len(),
        R::COLLECTION,
        path.display()
    );
    Ok(())
}

/// Export all three collections into a directory with their fixed names
pub fn export_all(store: &DataStore, dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    export_collection::<Sale>(store, Some(dir.join(Collection::Sales.export_filename())))?;
    export_collection::<Product>(store, Some(dir.join(Collection::Products.export_filename())))?;
    export_collection::<Delivery>(
        store,
        Some(dir.join(Collection::Deliveries.export_filename())),
    )?;
    Ok(())
}

/// Merge records from a CSV file into one collection. Imported rows are
/// appended after the existing records; coerced values are reported.
pub fn import_collection<R: Record>(store: &mut DataStore, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let set = codec::read_rows(&text)?;

    let mut issues = set.issues;
    let mut records = Vec::with_capacity(set.rows.len());
    for row in &set.rows {
        let normalized = R::from_row(row);
        issues.extend(normalized.issues);
        records.push(normalized.record);
    }

    let count = store.import_merge(records)?;
    println!("Imported {} {}", count, R::COLLECTION);
    for issue in &issues {
        println!("  note: {}", issue);
    }
    Ok(())
}

/// Write the whole store to a JSON snapshot file
pub fn backup(store: &DataStore, file: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&store.snapshot())?;
    fs::write(file, json)?;
    println!("Wrote snapshot to {}", file.display());
    Ok(())
}

/// Bulk import from a JSON snapshot: each collection key present in the
/// file replaces that collection wholesale. A malformed file is reported
/// once and changes nothing.
pub fn restore(store: &mut DataStore, file: &Path) -> Result<()> {
    let text = fs::read_to_string(file)?;
    let snapshot: Snapshot = serde_json::from_str(&text)
        .map_err(|e| ShopkeepError::InvalidImport(format!("not a valid snapshot: {}", e)))?;

    if snapshot.is_empty() {
        println!("Snapshot contains no collections; nothing imported");
        return Ok(());
    }

    let mut parts = Vec::new();
    if let Some(sales) = &snapshot.sales {
        parts.push(format!("{} sales", sales.len()));
    }
    if let Some(products) = &snapshot.products {
        parts.push(format!("{} products", products.len()));
    }
    if let Some(deliveries) = &snapshot.deliveries {
        parts.push(format!("{} deliveries", deliveries.len()));
    }

    store.restore(snapshot)?;
    println!("Imported {}", parts.join(", "));
    Ok(())
}
