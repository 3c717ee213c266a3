//! Core value types shared by the selector, the resolution chain and the adapters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// PhotoId: opaque identifier assigned by the folder lister
pub type PhotoId = String;

/// Which part of the cover photo the presentation layer should keep in frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocalPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

impl FocalPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocalPosition::Top => "top",
            FocalPosition::Center => "center",
            FocalPosition::Bottom => "bottom",
        }
    }
}

impl fmt::Display for FocalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FocalPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(FocalPosition::Top),
            "center" => Ok(FocalPosition::Center),
            "bottom" => Ok(FocalPosition::Bottom),
            other => Err(format!(
                "Invalid focal position: {} (must be 'top', 'center', or 'bottom')",
                other
            )),
        }
    }
}

/// How the cover image is fitted into its frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverFit {
    #[default]
    Cover,
    Contain,
}

impl CoverFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverFit::Cover => "cover",
            CoverFit::Contain => "contain",
        }
    }
}

impl fmt::Display for CoverFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverFit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cover" => Ok(CoverFit::Cover),
            "contain" => Ok(CoverFit::Contain),
            other => Err(format!(
                "Invalid cover fit: {} (must be 'cover' or 'contain')",
                other
            )),
        }
    }
}

/// Per-project manual override, created only through administrative action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCoverConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo_id: Option<PhotoId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_position: Option<FocalPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_fit: Option<CoverFit>,
}

impl ProjectCoverConfig {
    /// True when no field is set; such an override is equivalent to none at all.
    pub fn is_empty(&self) -> bool {
        self.cover_photo_id.is_none() && self.cover_position.is_none() && self.cover_fit.is_none()
    }
}

/// Advisory result of an external vision-model pass over a project folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiProjectAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_cover_id: Option<PhotoId>,
}
