//! Override Resolution Chain
//!
//! Blends persisted overrides and AI hints with the heuristic selector.
//! Precedence is an ordered pipeline rather than nested conditionals:
//!
//! - cover pick: manual id -> AI `bestCoverId` -> selector; first valid stage wins
//! - focal position: detected -> project substring table -> manual; later wins
//! - fit: manual else `cover`
//!
//! Stages that reference a photo missing from the current listing are skipped.

pub mod focal_table;

use crate::focal::detect_position;
use crate::photo::Photo;
use crate::selector::{select_cover, SelectionReason};
use crate::types::{AiProjectAnalysis, CoverFit, FocalPosition, PhotoId, ProjectCoverConfig};
use serde::Serialize;
use tracing::debug;

pub use focal_table::{FocalOverrideRule, FocalOverrideTable};

/// Stage that chose the cover photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverSource {
    Manual,
    Ai,
    Filename,
    Single,
    Heuristic,
    None,
}

impl CoverSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverSource::Manual => "manual",
            CoverSource::Ai => "ai",
            CoverSource::Filename => "filename",
            CoverSource::Single => "single",
            CoverSource::Heuristic => "heuristic",
            CoverSource::None => "none",
        }
    }
}

/// Transform that set the final focal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    Detected,
    ProjectTable,
    Manual,
    Default,
}

impl PositionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionSource::Detected => "detected",
            PositionSource::ProjectTable => "project_table",
            PositionSource::Manual => "manual",
            PositionSource::Default => "default",
        }
    }
}

/// Snapshot of everything one resolution call may consult.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionInput<'a> {
    pub photos: &'a [Photo],
    pub project: Option<&'a str>,
    pub manual: Option<&'a ProjectCoverConfig>,
    pub analysis: Option<&'a AiProjectAnalysis>,
    pub focal_table: Option<&'a FocalOverrideTable>,
}

impl<'a> ResolutionInput<'a> {
    pub fn new(photos: &'a [Photo]) -> Self {
        Self {
            photos,
            project: None,
            manual: None,
            analysis: None,
            focal_table: None,
        }
    }

    pub fn project(mut self, project: &'a str) -> Self {
        self.project = Some(project);
        self
    }

    pub fn manual(mut self, manual: Option<&'a ProjectCoverConfig>) -> Self {
        self.manual = manual;
        self
    }

    pub fn analysis(mut self, analysis: Option<&'a AiProjectAnalysis>) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn focal_table(mut self, table: &'a FocalOverrideTable) -> Self {
        self.focal_table = Some(table);
        self
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.photos.iter().position(|p| p.id == id)
    }
}

/// Final cover decision handed to presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverResolution {
    /// Cover first; every other photo keeps its listing order.
    pub ordered_photos: Vec<Photo>,
    pub cover_id: Option<PhotoId>,
    pub focal_position: FocalPosition,
    pub fit: CoverFit,
    pub cover_source: CoverSource,
    pub position_source: PositionSource,
}

impl CoverResolution {
    pub fn cover(&self) -> Option<&Photo> {
        self.cover_id.as_ref().and(self.ordered_photos.first())
    }
}

#[derive(Debug, Clone, Copy)]
struct CoverPick {
    index: usize,
    source: CoverSource,
}

type PickStage = fn(&ResolutionInput<'_>) -> Option<CoverPick>;
type PositionStage = fn(&ResolutionInput<'_>) -> Option<FocalPosition>;

const PICK_STAGES: &[PickStage] = &[pick_manual, pick_ai, pick_heuristic];

const POSITION_STAGES: &[(PositionSource, PositionStage)] = &[
    (PositionSource::ProjectTable, table_position),
    (PositionSource::Manual, manual_position),
];

fn pick_manual(input: &ResolutionInput<'_>) -> Option<CoverPick> {
    let id = input.manual?.cover_photo_id.as_deref()?;
    match input.index_of(id) {
        Some(index) => Some(CoverPick {
            index,
            source: CoverSource::Manual,
        }),
        None => {
            debug!(
                project = input.project.unwrap_or_default(),
                photo_id = id,
                "Manual cover photo not in listing, falling through"
            );
            None
        }
    }
}

fn pick_ai(input: &ResolutionInput<'_>) -> Option<CoverPick> {
    let id = input.analysis?.best_cover_id.as_deref()?;
    match input.index_of(id) {
        Some(index) => Some(CoverPick {
            index,
            source: CoverSource::Ai,
        }),
        None => {
            debug!(
                project = input.project.unwrap_or_default(),
                photo_id = id,
                "AI cover suggestion not in listing, falling through"
            );
            None
        }
    }
}

fn pick_heuristic(input: &ResolutionInput<'_>) -> Option<CoverPick> {
    let decision = select_cover(input.photos);
    let source = match decision.reason {
        SelectionReason::Empty => return None,
        SelectionReason::FilenamePrefix => CoverSource::Filename,
        SelectionReason::SinglePhoto => CoverSource::Single,
        SelectionReason::Scored => CoverSource::Heuristic,
    };
    Some(CoverPick {
        index: decision.index,
        source,
    })
}

fn table_position(input: &ResolutionInput<'_>) -> Option<FocalPosition> {
    input.focal_table?.lookup(input.project?)
}

fn manual_position(input: &ResolutionInput<'_>) -> Option<FocalPosition> {
    input.manual?.cover_position
}

/// Resolve the cover photo, focal position and fit for one project.
pub fn resolve_cover(input: &ResolutionInput<'_>) -> CoverResolution {
    let fit = input
        .manual
        .and_then(|m| m.cover_fit)
        .unwrap_or_default();

    let Some(pick) = PICK_STAGES.iter().find_map(|stage| stage(input)) else {
        return CoverResolution {
            ordered_photos: Vec::new(),
            cover_id: None,
            focal_position: FocalPosition::Center,
            fit,
            cover_source: CoverSource::None,
            position_source: PositionSource::Default,
        };
    };

    let cover = &input.photos[pick.index];
    let mut focal_position = detect_position(&cover.name);
    let mut position_source = PositionSource::Detected;
    for (source, stage) in POSITION_STAGES {
        if let Some(position) = stage(input) {
            focal_position = position;
            position_source = *source;
        }
    }

    debug!(
        project = input.project.unwrap_or_default(),
        cover_id = %cover.id,
        cover_source = pick.source.as_str(),
        position = focal_position.as_str(),
        position_source = position_source.as_str(),
        "Resolved cover"
    );

    CoverResolution {
        cover_id: Some(cover.id.clone()),
        ordered_photos: promote(input.photos, pick.index),
        focal_position,
        fit,
        cover_source: pick.source,
        position_source,
    }
}

/// Move the photo at `index` to the front, keeping the others in order.
pub fn promote(photos: &[Photo], index: usize) -> Vec<Photo> {
    let mut ordered = photos.to_vec();
    if index < ordered.len() {
        let cover = ordered.remove(index);
        ordered.insert(0, cover);
    }
    ordered
}
