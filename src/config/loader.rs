use super::types::CatalogConfig;
use crate::{CatalogError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in each search directory
pub const CONFIG_FILE_NAME: &str = "catalog.yaml";

/// Configuration loader for catalog.yaml
pub struct ConfigLoader {
    /// Candidate files, first existing one wins
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that searches the platform config directory
    pub fn new() -> Self {
        Self {
            search_paths: default_config_path().into_iter().collect(),
        }
    }

    /// Create a loader with no implicit search paths
    pub fn empty() -> Self {
        Self {
            search_paths: Vec::new(),
        }
    }

    /// Add a candidate file, checked before the existing ones
    pub fn with_search_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.search_paths.insert(0, path.into());
        self
    }

    /// Resolve configuration
    ///
    /// An explicit path must exist. Without one, the first search path that
    /// exists is used, and defaults apply when none do.
    pub fn load(&self, explicit: Option<&Path>) -> Result<CatalogConfig> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        match self.search_paths.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_file(path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(CatalogConfig::default())
            }
        }
    }

    /// Load and parse one configuration file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        if contents.trim().is_empty() {
            return Ok(CatalogConfig::default());
        }

        let config: CatalogConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `catalog.yaml` inside the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "book-catalog").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
