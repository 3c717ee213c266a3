//! Project Catalog
//!
//! Integration layer between the stores and the pure resolution chain. Every
//! collaborator failure is logged and replaced with an empty listing or an
//! absent override before the core runs, so resolution itself stays total.

use crate::error::ApiError;
use crate::photo::Photo;
use crate::resolve::{
    resolve_cover, CoverResolution, CoverSource, FocalOverrideTable, ResolutionInput,
};
use crate::selector::{explain_cover, PhotoScore};
use crate::store::{analysis_key, AnalysisStore, FolderLister, OverrideStore};
use crate::types::{AiProjectAnalysis, CoverFit, FocalPosition, PhotoId, ProjectCoverConfig};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::warn;

/// Project as surfaced to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    /// Cover first.
    pub photos: Vec<Photo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_photo_id: Option<PhotoId>,
    pub cover_position: FocalPosition,
    pub cover_fit: CoverFit,
    pub cover_source: CoverSource,
}

impl ProjectRecord {
    pub fn from_resolution(name: impl Into<String>, resolution: CoverResolution) -> Self {
        Self {
            name: name.into(),
            photos: resolution.ordered_photos,
            cover_photo_id: resolution.cover_id,
            cover_position: resolution.focal_position,
            cover_fit: resolution.fit,
            cover_source: resolution.cover_source,
        }
    }

    pub fn has_cover(&self) -> bool {
        self.cover_photo_id.is_some()
    }
}

/// Export payload written by `coverpick export`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExport {
    pub generated_at: DateTime<Utc>,
    pub projects: Vec<ProjectRecord>,
}

/// Inputs gathered for one project; failed sources are already substituted.
#[derive(Debug, Clone, Default)]
pub struct ProjectSnapshot {
    pub photos: Vec<Photo>,
    pub manual: Option<ProjectCoverConfig>,
    pub analysis: Option<AiProjectAnalysis>,
}

/// Override and analysis stores read once for a whole-catalog pass.
#[derive(Debug, Clone, Default)]
struct StoreSnapshot {
    overrides: BTreeMap<String, ProjectCoverConfig>,
    analyses: HashMap<String, AiProjectAnalysis>,
}

impl StoreSnapshot {
    fn project(&self, project: &str, photos: Vec<Photo>) -> ProjectSnapshot {
        ProjectSnapshot {
            photos,
            manual: self.overrides.get(project).cloned(),
            analysis: self.analyses.get(&analysis_key(project)).cloned(),
        }
    }
}

/// Partial update applied to a stored override.
#[derive(Debug, Clone, Default)]
pub struct OverrideUpdate {
    /// Photo id, or a raw filename from the project's listing
    pub photo: Option<String>,
    pub position: Option<FocalPosition>,
    pub fit: Option<CoverFit>,
}

impl OverrideUpdate {
    pub fn is_empty(&self) -> bool {
        self.photo.is_none() && self.position.is_none() && self.fit.is_none()
    }
}

/// Resolves projects against a lister, an override store and an analysis store.
pub struct Catalog {
    lister: Arc<dyn FolderLister>,
    overrides: Arc<dyn OverrideStore>,
    analyses: Arc<dyn AnalysisStore>,
    focal_table: FocalOverrideTable,
}

impl Catalog {
    pub fn new(
        lister: Arc<dyn FolderLister>,
        overrides: Arc<dyn OverrideStore>,
        analyses: Arc<dyn AnalysisStore>,
        focal_table: FocalOverrideTable,
    ) -> Self {
        Self {
            lister,
            overrides,
            analyses,
            focal_table,
        }
    }

    pub fn focal_table(&self) -> &FocalOverrideTable {
        &self.focal_table
    }

    pub fn overrides(&self) -> &dyn OverrideStore {
        self.overrides.as_ref()
    }

    pub fn list_projects(&self) -> Result<Vec<String>, ApiError> {
        self.lister.list_projects()
    }

    /// Gather the inputs for `project`.
    ///
    /// Unknown or invalid project names are errors; any other failure becomes
    /// an empty listing or an absent override/analysis.
    pub fn snapshot(&self, project: &str) -> Result<ProjectSnapshot, ApiError> {
        let photos = self.listed_photos(project)?;

        let manual = self.overrides.get(project).unwrap_or_else(|e| {
            warn!(project, error = %e, "Override lookup failed, ignoring override");
            None
        });

        let analysis = self.analyses.get(project).unwrap_or_else(|e| {
            warn!(project, error = %e, "Analysis lookup failed, ignoring AI suggestion");
            None
        });

        Ok(ProjectSnapshot {
            photos,
            manual,
            analysis,
        })
    }

    fn listed_photos(&self, project: &str) -> Result<Vec<Photo>, ApiError> {
        match self.lister.list_photos(project) {
            Ok(photos) => Ok(photos),
            Err(e @ (ApiError::ProjectNotFound(_) | ApiError::InvalidArgument(_))) => Err(e),
            Err(e) => {
                warn!(project, error = %e, "Folder listing failed, treating project as empty");
                Ok(Vec::new())
            }
        }
    }

    fn load_stores(&self) -> StoreSnapshot {
        let overrides = self.overrides.list().unwrap_or_else(|e| {
            warn!(error = %e, "Override store unreadable, ignoring overrides");
            BTreeMap::new()
        });
        let analyses = self.analyses.all().unwrap_or_else(|e| {
            warn!(error = %e, "Analysis store unreadable, ignoring AI suggestions");
            HashMap::new()
        });
        StoreSnapshot {
            overrides,
            analyses,
        }
    }

    /// Run the resolution chain over a gathered snapshot.
    pub fn resolve_snapshot(&self, project: &str, snapshot: &ProjectSnapshot) -> CoverResolution {
        let input = ResolutionInput::new(&snapshot.photos)
            .project(project)
            .manual(snapshot.manual.as_ref())
            .analysis(snapshot.analysis.as_ref())
            .focal_table(&self.focal_table);
        resolve_cover(&input)
    }

    pub fn resolve_project(&self, project: &str) -> Result<CoverResolution, ApiError> {
        let snapshot = self.snapshot(project)?;
        Ok(self.resolve_snapshot(project, &snapshot))
    }

    pub fn project_record(&self, project: &str) -> Result<ProjectRecord, ApiError> {
        let resolution = self.resolve_project(project)?;
        Ok(ProjectRecord::from_resolution(project, resolution))
    }

    /// Records for every listed project, in project listing order.
    ///
    /// Both stores are read once up front; projects are then resolved on
    /// scoped worker threads.
    pub fn resolve_all(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        let projects = self.lister.list_projects()?;
        if projects.is_empty() {
            return Ok(Vec::new());
        }
        let stores = self.load_stores();
        let stores = &stores;
        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(projects.len());
        let chunk_size = projects.len().div_ceil(workers);

        let chunks: Result<Vec<Vec<ProjectRecord>>, ApiError> = std::thread::scope(|scope| {
            let handles: Vec<_> = projects
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || self.resolve_chunk(chunk, stores)))
                .collect();
            handles
                .into_iter()
                .map(|h| {
                    h.join().map_err(|_| {
                        ApiError::StorageError("Project resolution worker panicked".to_string())
                    })
                })
                .collect()
        });

        Ok(chunks?.into_iter().flatten().collect())
    }

    fn resolve_chunk(&self, projects: &[String], stores: &StoreSnapshot) -> Vec<ProjectRecord> {
        projects
            .iter()
            .filter_map(|project| match self.listed_photos(project) {
                Ok(photos) => {
                    let snapshot = stores.project(project, photos);
                    let resolution = self.resolve_snapshot(project, &snapshot);
                    Some(ProjectRecord::from_resolution(project.as_str(), resolution))
                }
                Err(e) => {
                    // the folder vanished between listing and resolving
                    warn!(project = project.as_str(), error = %e, "Skipping project");
                    None
                }
            })
            .collect()
    }

    /// Records for projects that have a cover; zero-photo projects are skipped.
    pub fn cover_records(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        Ok(self
            .resolve_all()?
            .into_iter()
            .filter(ProjectRecord::has_cover)
            .collect())
    }

    pub fn export(&self, include_empty: bool) -> Result<CatalogExport, ApiError> {
        let projects = if include_empty {
            self.resolve_all()?
        } else {
            self.cover_records()?
        };
        Ok(CatalogExport {
            generated_at: Utc::now(),
            projects,
        })
    }

    /// Heuristic score breakdown for a project's photos in listing order.
    pub fn explain(&self, project: &str) -> Result<Vec<PhotoScore>, ApiError> {
        let photos = self.lister.list_photos(project)?;
        Ok(explain_cover(&photos))
    }

    /// Merge `update` into the stored override for `project`.
    ///
    /// A photo reference must exist in the project's current listing, either
    /// as an id or as a raw filename.
    pub fn set_override(
        &self,
        project: &str,
        update: &OverrideUpdate,
    ) -> Result<ProjectCoverConfig, ApiError> {
        if update.is_empty() {
            return Err(ApiError::InvalidArgument(
                "Override needs at least one of photo, position, or fit".to_string(),
            ));
        }

        let photos = self.lister.list_photos(project)?;
        let mut config = self.overrides.get(project)?.unwrap_or_default();

        if let Some(reference) = &update.photo {
            let photo = photos
                .iter()
                .find(|p| p.id == *reference)
                .or_else(|| photos.iter().find(|p| p.raw_name == *reference))
                .ok_or_else(|| ApiError::PhotoNotFound {
                    project: project.to_string(),
                    photo_id: reference.clone(),
                })?;
            config.cover_photo_id = Some(photo.id.clone());
        }
        if let Some(position) = update.position {
            config.cover_position = Some(position);
        }
        if let Some(fit) = update.fit {
            config.cover_fit = Some(fit);
        }

        self.overrides.put(project, &config)?;
        Ok(config)
    }

    pub fn clear_override(&self, project: &str) -> Result<bool, ApiError> {
        self.overrides.clear(project)
    }
}
