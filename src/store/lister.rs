//! Local folder lister: one directory per project under a library root.

use crate::error::ApiError;
use crate::photo::Photo;
use crate::store::FolderLister;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif", "heic"];

/// Lists `<root>/<project>/*` image files. Photo ids are `<project>/<file name>`.
pub struct LocalFolderLister {
    root: PathBuf,
    extensions: Vec<String>,
}

impl LocalFolderLister {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == e)
            })
            .unwrap_or(false)
    }

    fn project_dir(&self, project: &str) -> Result<PathBuf, ApiError> {
        let trimmed = project.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || project.contains('/')
            || project.contains('\\')
        {
            return Err(ApiError::InvalidArgument(format!(
                "Invalid project folder name: {:?}",
                project
            )));
        }
        let dir = self.root.join(project);
        if !dir.is_dir() {
            return Err(ApiError::ProjectNotFound(project.to_string()));
        }
        Ok(dir)
    }
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

impl FolderLister for LocalFolderLister {
    fn list_projects(&self) -> Result<Vec<String>, ApiError> {
        if !self.root.is_dir() {
            return Err(ApiError::StorageError(format!(
                "Library root is not a directory: {}",
                self.root.display()
            )));
        }

        let mut projects = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            match entry.file_name().to_str() {
                Some(name) if !is_hidden(name) => projects.push(name.to_string()),
                Some(_) => {}
                None => tracing::warn!("Skipping non UTF8 project folder: {:?}", entry.path()),
            }
        }
        projects.sort();
        Ok(projects)
    }

    fn list_photos(&self, project: &str) -> Result<Vec<Photo>, ApiError> {
        let dir = self.project_dir(project)?;

        let mut photos = Vec::new();
        let walker = WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if !entry.file_type().is_file() || !self.is_image(entry.path()) {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF8 photo filename: {:?}", entry.path());
                continue;
            };
            if is_hidden(file_name) {
                continue;
            }
            photos.push(Photo::new(format!("{}/{}", project, file_name), file_name));
        }

        tracing::debug!(project, count = photos.len(), "Listed project photos");
        Ok(photos)
    }
}
