//! Configuration
//!
//! Layered configuration for the library root, store locations, the project
//! focal override table and logging. See [`ConfigLoader`] for source precedence.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;
pub mod workspace;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;
pub use workspace::storage_paths::StorageConfig;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::resolve::{FocalOverrideRule, FocalOverrideTable};
use crate::store::lister::DEFAULT_EXTENSIONS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverpickConfig {
    #[serde(default)]
    pub library: LibraryConfig,

    #[serde(default)]
    pub stores: StorageConfig,

    /// Ordered `(substring, position)` entries matched against project folder names
    #[serde(default)]
    pub focal_overrides: Vec<FocalOverrideRule>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_library_root() -> PathBuf {
    PathBuf::from("projects")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// Where project folders live and which files count as photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Library root (relative paths resolve against the workspace root)
    #[serde(default = "default_library_root")]
    pub root: PathBuf,

    /// Accepted photo extensions, case-insensitive, without the dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl LibraryConfig {
    pub fn resolve_root(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.root)
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: default_library_root(),
            extensions: default_extensions(),
        }
    }
}

impl CoverpickConfig {
    pub fn focal_table(&self) -> FocalOverrideTable {
        FocalOverrideTable::new(self.focal_overrides.clone())
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(ApiError::ConfigError(
                "library.extensions must list at least one extension".to_string(),
            ));
        }
        self.focal_table().validate().map_err(ApiError::ConfigError)
    }
}
