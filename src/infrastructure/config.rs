//! Configuration management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, ShopkeepError};
use crate::infrastructure::repository::STORE_DIR;

fn default_currency() -> String {
    "₦".to_string()
}

fn default_expense_ratio() -> f64 {
    0.55
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Currency symbol prefixed to money columns
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Share of sales treated as expenses in the report estimate
    #[serde(default = "default_expense_ratio")]
    pub expense_ratio: f64,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            currency: default_currency(),
            expense_ratio: default_expense_ratio(),
            created: Utc::now(),
        }
    }

    /// Load config from .shopkeep/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STORE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShopkeepError::NotStoreDirectory(path.to_path_buf())
            } else {
                ShopkeepError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .shopkeep/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let store_dir = path.join(STORE_DIR);
        let config_path = store_dir.join("config.toml");

        // Ensure .shopkeep directory exists
        if !store_dir.exists() {
            fs::create_dir(&store_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
