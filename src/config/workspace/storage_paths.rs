//! StorageConfig and resolve_paths for the override and analysis stores.

use crate::config::xdg;
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_OVERRIDES: &str = ".coverpick/overrides.json";
const DEFAULT_ANALYSIS: &str = ".coverpick/analysis.json";

fn default_overrides_path() -> PathBuf {
    PathBuf::from(DEFAULT_OVERRIDES)
}

fn default_analysis_path() -> PathBuf {
    PathBuf::from(DEFAULT_ANALYSIS)
}

/// Store locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Manual override file (relative to workspace root)
    #[serde(default = "default_overrides_path")]
    pub overrides_path: PathBuf,

    /// AI analysis file (relative to workspace root)
    #[serde(default = "default_analysis_path")]
    pub analysis_path: PathBuf,
}

/// Resolved store file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub overrides: PathBuf,
    pub analysis: PathBuf,
}

impl StorageConfig {
    /// Resolve store paths to actual filesystem locations.
    ///
    /// Paths left at their defaults live in the workspace's XDG data directory;
    /// anything else resolves against the workspace root.
    pub fn resolve_paths(&self, workspace_root: &Path) -> Result<StorePaths, ApiError> {
        let overrides = if self.overrides_path == Path::new(DEFAULT_OVERRIDES) {
            xdg::workspace_data_dir(workspace_root)?.join("overrides.json")
        } else {
            workspace_root.join(&self.overrides_path)
        };

        let analysis = if self.analysis_path == Path::new(DEFAULT_ANALYSIS) {
            xdg::workspace_data_dir(workspace_root)?.join("analysis.json")
        } else {
            workspace_root.join(&self.analysis_path)
        };

        Ok(StorePaths {
            overrides,
            analysis,
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            overrides_path: default_overrides_path(),
            analysis_path: default_analysis_path(),
        }
    }
}
