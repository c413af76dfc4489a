//! Inventory records

use serde::{Deserialize, Serialize};

use crate::domain::codec::{self, CsvRow};
use crate::domain::{Collection, Normalized, Record, RecordId, StoreData};

/// One stocked product with its reorder threshold and unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default = "RecordId::new")]
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub reorder: u32,
    #[serde(default)]
    pub price: f64,
}

impl Product {
    /// Construct a product with a fresh id
    pub fn build(name: &str, category: &str, stock: u32, reorder: u32, price: f64) -> Self {
        Product {
            id: RecordId::new(),
            name: name.to_string(),
            category: category.to_string(),
            stock,
            reorder,
            price,
        }
    }

    /// A product is low on stock once it reaches its reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder
    }
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> RecordId {
        self.id
    }

    fn headers() -> &'static [&'static str] {
        &["name", "category", "stock", "reorder", "price"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            self.stock.to_string(),
            self.reorder.to_string(),
            codec::fmt_number(self.price),
        ]
    }

    fn from_row(row: &CsvRow) -> Normalized<Self> {
        let mut issues = Vec::new();
        let record = Product {
            id: RecordId::new(),
            name: row.value("name"),
            category: row.value("category"),
            stock: row.count("stock", &mut issues),
            reorder: row.count("reorder", &mut issues),
            price: row.number("price", &mut issues),
        };
        Normalized { record, issues }
    }

    fn records(data: &StoreData) -> &[Self] {
        &data.products
    }

    fn records_mut(data: &mut StoreData) -> &mut Vec<Self> {
        &mut data.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codec::read_rows;

    #[test]
    fn test_low_stock_at_or_below_reorder() {
        assert!(Product::build("Tea", "", 5, 10, 500.0).is_low_stock());
        assert!(Product::build("Tea", "", 10, 10, 500.0).is_low_stock());
        assert!(!Product::build("Tea", "", 11, 10, 500.0).is_low_stock());
    }

    #[test]
    fn test_from_row_with_all_columns() {
        let set = read_rows("name,category,stock,reorder,price\nTea,Drinks,5,10,500\n").unwrap();
        let normalized = Product::from_row(&set.rows[0]);
        assert!(normalized.issues.is_empty());
        assert_eq!(normalized.record.category, "Drinks");
        assert_eq!(normalized.record.stock, 5);
    }

    #[test]
    fn test_from_row_missing_category_is_empty() {
        let set = read_rows("name,stock\nTea,5\n").unwrap();
        let normalized = Product::from_row(&set.rows[0]);
        assert_eq!(normalized.record.category, "");
        assert!(normalized.issues.is_empty());
    }

    #[test]
    fn test_from_row_coerces_bad_counts() {
        let set = read_rows("name,stock,reorder\nTea,many,-2\n").unwrap();
        let normalized = Product::from_row(&set.rows[0]);
        assert_eq!(normalized.record.stock, 0);
        assert_eq!(normalized.record.reorder, 0);
        assert_eq!(normalized.issues.len(), 2);
    }

    #[test]
    fn test_deserialize_defaults_missing_numeric_fields() {
        let product: Product = serde_json::from_str(r#"{"name":"Tea"}"#).unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.price, 0.0);
    }
}
