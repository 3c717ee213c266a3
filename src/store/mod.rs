//! Collaborator Stores
//!
//! Interfaces to the data the resolution chain reads: folder listings,
//! manual overrides keyed by exact folder name, and AI analyses keyed by
//! lowercased folder name. The core never calls these itself; the catalog
//! does, and substitutes absent values when they fail.

pub mod contract;
pub mod json;
pub mod lister;
pub mod memory;

pub use contract::{AnalysisStore, FolderLister, OverrideStore};
pub use json::{JsonAnalysisStore, JsonOverrideStore};
pub use lister::LocalFolderLister;
pub use memory::{MemoryAnalysisStore, MemoryFolderLister, MemoryOverrideStore};

/// Normalize a folder name into an analysis store key.
pub fn analysis_key(project: &str) -> String {
    project.to_lowercase()
}
