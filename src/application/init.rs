//! Initialize store use case

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, StoreRepository};

/// Initialize a new store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Create the .shopkeep directory
    repo.initialize()?;

    // Save default config
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized shopkeep store at {}", path.display());

    Ok(())
}
