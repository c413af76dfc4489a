//! The three record collections and their fixed file names

use std::fmt;

/// One of the store's record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Sales,
    Products,
    Deliveries,
}

impl Collection {
    /// File name of the persisted blob inside the store directory
    pub fn data_filename(&self) -> &'static str {
        match self {
            Collection::Sales => "sales.json",
            Collection::Products => "products.json",
            Collection::Deliveries => "deliveries.json",
        }
    }

    /// Default file name for CSV export
    pub fn export_filename(&self) -> &'static str {
        match self {
            Collection::Sales => "sales.csv",
            Collection::Products => "products.csv",
            Collection::Deliveries => "deliveries.csv",
        }
    }

    /// Plural label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Sales => "sales",
            Collection::Products => "products",
            Collection::Deliveries => "deliveries",
        }
    }

    /// Singular label used in messages
    pub fn singular(&self) -> &'static str {
        match self {
            Collection::Sales => "sale",
            Collection::Products => "product",
            Collection::Deliveries => "delivery",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
