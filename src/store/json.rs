//! JSON file stores for overrides and AI analyses.
//!
//! Both files hold a single JSON object keyed by folder name. A missing file
//! is an empty store. An entry that does not parse is logged and skipped so
//! one bad record cannot hide the others.

use crate::error::ApiError;
use crate::store::{analysis_key, AnalysisStore, OverrideStore};
use crate::types::{AiProjectAnalysis, ProjectCoverConfig};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

fn read_object(path: &Path) -> Result<Map<String, Value>, ApiError> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::StorageError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::StorageError(format!(
            "Expected a JSON object in {}",
            path.display()
        ))),
        Err(e) => Err(ApiError::StorageError(format!(
            "Failed to parse {}: {}",
            path.display(),
            e
        ))),
    }
}

fn parse_entries<T: DeserializeOwned>(path: &Path, map: Map<String, Value>) -> Vec<(String, T)> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        match serde_json::from_value::<T>(value) {
            Ok(entry) => entries.push((key, entry)),
            Err(e) => {
                tracing::warn!(
                    "Skipping malformed entry '{}' in {}: {}",
                    key,
                    path.display(),
                    e
                );
            }
        }
    }
    entries
}

fn write_object(path: &Path, map: &Map<String, Value>) -> Result<(), ApiError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ApiError::StorageError(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    let content = serde_json::to_string_pretty(map)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, content).map_err(|e| {
        ApiError::StorageError(format!("Failed to write {}: {}", tmp.display(), e))
    })?;
    std::fs::rename(&tmp, path).map_err(|e| {
        ApiError::StorageError(format!(
            "Failed to move {} into place: {}",
            path.display(),
            e
        ))
    })
}

/// Manual overrides persisted as `{ "<Folder Name>": { coverPhotoId, coverPosition, coverFit } }`.
pub struct JsonOverrideStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonOverrideStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OverrideStore for JsonOverrideStore {
    fn get(&self, project: &str) -> Result<Option<ProjectCoverConfig>, ApiError> {
        let mut map = read_object(&self.path)?;
        let Some(value) = map.remove(project) else {
            return Ok(None);
        };
        match serde_json::from_value::<ProjectCoverConfig>(value) {
            Ok(config) if config.is_empty() => Ok(None),
            Ok(config) => Ok(Some(config)),
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed override for '{}' in {}: {}",
                    project,
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn list(&self) -> Result<BTreeMap<String, ProjectCoverConfig>, ApiError> {
        let map = read_object(&self.path)?;
        Ok(parse_entries::<ProjectCoverConfig>(&self.path, map)
            .into_iter()
            .filter(|(_, config)| !config.is_empty())
            .collect())
    }

    fn put(&self, project: &str, config: &ProjectCoverConfig) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock();
        // a corrupt file is an error here: rewriting it would drop every other entry
        let mut map = read_object(&self.path)?;
        if config.is_empty() {
            map.remove(project);
        } else {
            map.insert(project.to_string(), serde_json::to_value(config)?);
        }
        write_object(&self.path, &map)?;
        tracing::info!(project, path = %self.path.display(), "Saved cover override");
        Ok(())
    }

    fn clear(&self, project: &str) -> Result<bool, ApiError> {
        let _guard = self.write_lock.lock();
        let mut map = read_object(&self.path)?;
        if map.remove(project).is_none() {
            return Ok(false);
        }
        write_object(&self.path, &map)?;
        tracing::info!(project, path = %self.path.display(), "Cleared cover override");
        Ok(true)
    }
}

/// AI analyses persisted as `{ "<folder name>": { bestCoverId, ... } }`.
///
/// Keys are lowercased on load; when two keys fold to the same name the
/// lexically first original key wins.
pub struct JsonAnalysisStore {
    path: PathBuf,
}

impl JsonAnalysisStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every analysis in the file, keyed by lowercased folder name.
    pub fn load_all(&self) -> Result<HashMap<String, AiProjectAnalysis>, ApiError> {
        let map = read_object(&self.path)?;
        let mut entries = parse_entries::<AiProjectAnalysis>(&self.path, map);
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut out = HashMap::with_capacity(entries.len());
        for (key, analysis) in entries {
            out.entry(analysis_key(&key)).or_insert(analysis);
        }
        Ok(out)
    }
}

impl AnalysisStore for JsonAnalysisStore {
    fn get(&self, project: &str) -> Result<Option<AiProjectAnalysis>, ApiError> {
        Ok(self.load_all()?.remove(&analysis_key(project)))
    }

    fn all(&self) -> Result<HashMap<String, AiProjectAnalysis>, ApiError> {
        self.load_all()
    }
}
