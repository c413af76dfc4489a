//! Error types for shopkeep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the shopkeep application
#[derive(Debug, Error)]
pub enum ShopkeepError {
    #[error("Not a shopkeep store: {0}")]
    NotStoreDirectory(PathBuf),

    #[error("No record matches id '{0}'")]
    UnknownRecord(String),

    #[error("Id prefix '{0}' matches more than one record")]
    AmbiguousRecord(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ShopkeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShopkeepError::NotStoreDirectory(_) => 2,
            ShopkeepError::UnknownRecord(_) | ShopkeepError::AmbiguousRecord(_) => 3,
            ShopkeepError::InvalidImport(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ShopkeepError::NotStoreDirectory(path) => {
                format!(
                    "Not a shopkeep store: {}\n\n\
                    Suggestions:\n\
                    • Run 'shopkeep init' in this directory to create a new store\n\
                    • Navigate to an existing shopkeep directory\n\
                    • Set SHOPKEEP_ROOT environment variable to your store path",
                    path.display()
                )
            }
            ShopkeepError::UnknownRecord(id) => {
                format!(
                    "No record matches id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'shopkeep sales list' (or inventory/deliveries) to see record ids\n\
                    • Any unique prefix of the id column is accepted\n\
                    • The record may have been deleted in the meantime",
                    id
                )
            }
            ShopkeepError::AmbiguousRecord(id) => {
                format!(
                    "Id prefix '{}' matches more than one record\n\n\
                    Suggestions:\n\
                    • Add more characters until the prefix is unique\n\
                    • Use 'list' to see the full id column",
                    id
                )
            }
            ShopkeepError::InvalidImport(msg) => {
                format!(
                    "Invalid import file: {}\n\n\
                    Expected a JSON object with optional 'sales', 'products' and\n\
                    'deliveries' arrays. No collection was changed.",
                    msg
                )
            }
            ShopkeepError::Config(msg) => {
                if msg.contains("date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: shopkeep sales add --date 2025-01-17 ...",
                        msg
                    )
                } else if msg.contains("expense ratio") {
                    format!(
                        "{}\n\n\
                        Expected a number between 0 and 1\n\
                        Example: shopkeep config expense_ratio 0.55",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ShopkeepError
pub type Result<T> = std::result::Result<T, ShopkeepError>;
