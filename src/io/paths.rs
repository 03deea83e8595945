use crate::{CatalogError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Store file used when neither flags nor settings name one
pub const DEFAULT_STORE_FILE: &str = "library.json";

/// Settings file name inside the configuration directory
pub const SETTINGS_FILE: &str = "config.yaml";

/// Path management for bookcase configuration files
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Configuration directory
    pub config_dir: PathBuf,
}

impl CatalogPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "bookcase").ok_or_else(|| {
            CatalogError::Config("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
        })
    }

    /// Create paths rooted in a specific directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            config_dir: project_root.join(".bookcase"),
        }
    }

    /// Settings file path
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Store used when nothing else is configured, relative to `working_dir`
    pub fn default_store(working_dir: &Path) -> PathBuf {
        working_dir.join(DEFAULT_STORE_FILE)
    }
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if platform directories fail
            let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Self::for_project(&current_dir)
        })
    }
}
