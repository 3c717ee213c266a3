//! Coverpick: Deterministic Cover Photo Selection
//!
//! Picks the photo that represents each project folder of a portfolio, plus a
//! focal position and fit for it, from filename signals, optional AI hints and
//! manual overrides. The selection core ([`focal`], [`selector`], [`resolve`])
//! is pure; [`store`] and [`catalog`] connect it to folders and JSON files.

pub mod catalog;
pub mod config;
pub mod error;
pub mod focal;
pub mod logging;
pub mod photo;
pub mod resolve;
pub mod selector;
pub mod store;
pub mod tooling;
pub mod types;

pub use catalog::{Catalog, ProjectRecord};
pub use error::ApiError;
pub use focal::detect_position;
pub use photo::Photo;
pub use resolve::{resolve_cover, CoverResolution, FocalOverrideTable, ResolutionInput};
pub use selector::{select_cover, CoverDecision};
pub use types::{AiProjectAnalysis, CoverFit, FocalPosition, ProjectCoverConfig};
