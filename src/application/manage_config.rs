//! Config management use case

use crate::error::{Result, ShopkeepError};
use crate::infrastructure::{Config, FileSystemRepository, StoreRepository};

/// Service for managing store configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "currency" => Ok(config.currency.clone()),
            "expense_ratio" => Ok(config.expense_ratio.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ShopkeepError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: currency, expense_ratio, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "currency" => {
                if value.trim().is_empty() {
                    return Err(ShopkeepError::Config(
                        "Currency symbol cannot be empty".to_string(),
                    ));
                }
                config.currency = value.to_string();
            }
            "expense_ratio" => {
                let ratio: f64 = value.parse().map_err(|_| {
                    ShopkeepError::Config(format!("Invalid expense ratio: '{}'", value))
                })?;
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(ShopkeepError::Config(format!(
                        "Invalid expense ratio: '{}'",
                        value
                    )));
                }
                config.expense_ratio = ratio;
            }
            "created" => {
                return Err(ShopkeepError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ShopkeepError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: currency, expense_ratio",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
