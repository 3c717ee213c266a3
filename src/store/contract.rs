use crate::error::ApiError;
use crate::photo::Photo;
use crate::types::{AiProjectAnalysis, ProjectCoverConfig};
use std::collections::{BTreeMap, HashMap};

/// Lists project folders and the photos inside them.
pub trait FolderLister: Send + Sync {
    fn list_projects(&self) -> Result<Vec<String>, ApiError>;
    fn list_photos(&self, project: &str) -> Result<Vec<Photo>, ApiError>;
}

/// Manual cover overrides, keyed by exact (case-sensitive) folder name.
pub trait OverrideStore: Send + Sync {
    fn get(&self, project: &str) -> Result<Option<ProjectCoverConfig>, ApiError>;
    fn list(&self) -> Result<BTreeMap<String, ProjectCoverConfig>, ApiError>;
    fn put(&self, project: &str, config: &ProjectCoverConfig) -> Result<(), ApiError>;
    /// Remove the override; returns whether one existed.
    fn clear(&self, project: &str) -> Result<bool, ApiError>;
}

/// AI analysis results. Implementations match the folder name case-insensitively.
pub trait AnalysisStore: Send + Sync {
    fn get(&self, project: &str) -> Result<Option<AiProjectAnalysis>, ApiError>;
    /// Every analysis, keyed by [`analysis_key`](crate::store::analysis_key).
    fn all(&self) -> Result<HashMap<String, AiProjectAnalysis>, ApiError>;
}
