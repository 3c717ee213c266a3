//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CoverpickConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Global config file path (`$XDG_CONFIG_HOME/coverpick/config.toml`)
    pub fn global_config_path() -> Option<PathBuf> {
        super::xdg::config_home()
            .ok()
            .map(|home| home.join("coverpick").join("config.toml"))
    }

    /// Workspace config file path (`<workspace>/coverpick.toml`)
    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join("coverpick.toml")
    }

    /// Load configuration from files and environment, then validate.
    pub fn load(workspace_root: &Path) -> Result<CoverpickConfig, ApiError> {
        let config = MergeService::load(workspace_root)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CoverpickConfig, ApiError> {
        let config = MergeService::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> CoverpickConfig {
        CoverpickConfig::default()
    }
}
