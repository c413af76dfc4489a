//! File system repository

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Collection;
use crate::error::{Result, ShopkeepError};
use crate::infrastructure::Config;

/// Name of the store directory that marks a shopkeep root
pub const STORE_DIR: &str = ".shopkeep";

/// Abstract repository for store operations
pub trait StoreRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .shopkeep/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .shopkeep/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if the .shopkeep directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .shopkeep directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of StoreRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks the SHOPKEEP_ROOT environment variable, then falls
    /// back to discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check SHOPKEEP_ROOT environment variable first
        if let Ok(root_path) = std::env::var("SHOPKEEP_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_store_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(ShopkeepError::Config(format!(
                    "SHOPKEEP_ROOT is set to '{}' but no .shopkeep directory found. \
                    Run 'shopkeep init' in that directory or unset SHOPKEEP_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_store_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .shopkeep
                    return Err(ShopkeepError::NotStoreDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .shopkeep directory
    fn has_store_dir(path: &Path) -> bool {
        path.join(STORE_DIR).is_dir()
    }
}

impl StoreRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_store_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let store_dir = self.root.join(STORE_DIR);

        if store_dir.exists() {
            return Err(ShopkeepError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&store_dir)?;
        Ok(())
    }
}

// Collection blob operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Path of a collection's persisted blob
    pub fn data_path(&self, collection: Collection) -> PathBuf {
        self.root.join(STORE_DIR).join(collection.data_filename())
    }

    /// Read a collection blob. Missing or unreadable files yield `None`;
    /// callers fall back to an empty collection rather than failing.
    pub fn read_blob(&self, collection: Collection) -> Option<String> {
        fs::read_to_string(self.data_path(collection)).ok()
    }

    /// Write a collection blob, creating the store directory if needed
    pub fn write_blob(&self, collection: Collection, contents: &str) -> Result<()> {
        let path = self.data_path(collection);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_creates_store_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        assert!(temp.path().join(".shopkeep").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".shopkeep")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_from_root() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".shopkeep")).unwrap();

        let repo = FileSystemRepository::discover_from(temp.path()).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_store_dir() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            ShopkeepError::NotStoreDirectory(_) => {}
            _ => panic!("Expected NotStoreDirectory error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.currency, config.currency);
    }

    #[test]
    fn test_read_blob_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(repo.read_blob(Collection::Sales).is_none());
    }

    #[test]
    fn test_write_then_read_blob() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.write_blob(Collection::Sales, "[]").unwrap();

        assert_eq!(repo.read_blob(Collection::Sales).unwrap(), "[]");
        assert!(temp.path().join(".shopkeep/sales.json").exists());
    }

    #[test]
    fn test_blobs_are_independent_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.write_blob(Collection::Sales, "[1]").unwrap();
        repo.write_blob(Collection::Products, "[2]").unwrap();

        assert_eq!(repo.read_blob(Collection::Sales).unwrap(), "[1]");
        assert_eq!(repo.read_blob(Collection::Products).unwrap(), "[2]");
        assert!(repo.read_blob(Collection::Deliveries).is_none());
    }

    #[test]
    fn test_discover_with_shopkeep_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SHOPKEEP_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".shopkeep")).unwrap();

        std::env::set_var("SHOPKEEP_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_shopkeep_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SHOPKEEP_ROOT");

        let temp = TempDir::new().unwrap();
        // No .shopkeep directory

        std::env::set_var("SHOPKEEP_ROOT", temp.path());

        let result = FileSystemRepository::discover();
        assert!(result.is_err());

        match result.unwrap_err() {
            ShopkeepError::Config(msg) => {
                assert!(msg.contains("no .shopkeep directory"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_discover_without_shopkeep_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("SHOPKEEP_ROOT");

        std::env::remove_var("SHOPKEEP_ROOT");

        // Either discovers a store above the test directory or fails with
        // NotStoreDirectory; both exercise the env-less path.
        match FileSystemRepository::discover() {
            Ok(_) => {}
            Err(ShopkeepError::NotStoreDirectory(_)) => {}
            Err(e) => panic!("Unexpected error: {}", e),
        }
    }
}
