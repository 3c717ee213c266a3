//! In-memory stores for embedding and tests.

use crate::error::ApiError;
use crate::photo::Photo;
use crate::store::{analysis_key, AnalysisStore, FolderLister, OverrideStore};
use crate::types::{AiProjectAnalysis, ProjectCoverConfig};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

/// Folder listings held in memory, keyed by project name.
#[derive(Default)]
pub struct MemoryFolderLister {
    projects: RwLock<BTreeMap<String, Vec<Photo>>>,
}

impl MemoryFolderLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, project: impl Into<String>, photos: Vec<Photo>) {
        self.projects.write().insert(project.into(), photos);
    }
}

impl FolderLister for MemoryFolderLister {
    fn list_projects(&self) -> Result<Vec<String>, ApiError> {
        Ok(self.projects.read().keys().cloned().collect())
    }

    fn list_photos(&self, project: &str) -> Result<Vec<Photo>, ApiError> {
        self.projects
            .read()
            .get(project)
            .cloned()
            .ok_or_else(|| ApiError::ProjectNotFound(project.to_string()))
    }
}

#[derive(Default)]
pub struct MemoryOverrideStore {
    entries: RwLock<BTreeMap<String, ProjectCoverConfig>>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(&self, project: &str) -> Result<Option<ProjectCoverConfig>, ApiError> {
        Ok(self.entries.read().get(project).cloned())
    }

    fn list(&self) -> Result<BTreeMap<String, ProjectCoverConfig>, ApiError> {
        Ok(self.entries.read().clone())
    }

    fn put(&self, project: &str, config: &ProjectCoverConfig) -> Result<(), ApiError> {
        let mut entries = self.entries.write();
        if config.is_empty() {
            entries.remove(project);
        } else {
            entries.insert(project.to_string(), config.clone());
        }
        Ok(())
    }

    fn clear(&self, project: &str) -> Result<bool, ApiError> {
        Ok(self.entries.write().remove(project).is_some())
    }
}

#[derive(Default)]
pub struct MemoryAnalysisStore {
    entries: RwLock<HashMap<String, AiProjectAnalysis>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, project: &str, analysis: AiProjectAnalysis) {
        self.entries.write().insert(analysis_key(project), analysis);
    }
}

impl AnalysisStore for MemoryAnalysisStore {
    fn get(&self, project: &str) -> Result<Option<AiProjectAnalysis>, ApiError> {
        Ok(self.entries.read().get(&analysis_key(project)).cloned())
    }

    fn all(&self) -> Result<HashMap<String, AiProjectAnalysis>, ApiError> {
        Ok(self.entries.read().clone())
    }
}
