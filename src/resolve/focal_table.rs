//! Project-level focal position table.
//!
//! Maps a substring of a project's folder name to a forced focal position.
//! Entries are checked in definition order, case-insensitively; the first hit wins.

use crate::types::FocalPosition;
use serde::{Deserialize, Serialize};

/// One `(substring, position)` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalOverrideRule {
    pub contains: String,
    pub position: FocalPosition,
}

impl FocalOverrideRule {
    pub fn new(contains: impl Into<String>, position: FocalPosition) -> Self {
        Self {
            contains: contains.into(),
            position,
        }
    }
}

/// Ordered, injectable table of project focal overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocalOverrideTable {
    rules: Vec<FocalOverrideRule>,
    folded: Vec<String>,
}

impl FocalOverrideTable {
    pub fn new(rules: Vec<FocalOverrideRule>) -> Self {
        let folded = rules.iter().map(|r| r.contains.to_lowercase()).collect();
        Self { rules, folded }
    }

    pub fn rules(&self) -> &[FocalOverrideRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Position forced for `project`, if any entry's substring occurs in it.
    /// Blank entries never match.
    pub fn lookup(&self, project: &str) -> Option<FocalPosition> {
        let project = project.to_lowercase();
        self.folded
            .iter()
            .zip(&self.rules)
            .find(|(needle, _)| !needle.trim().is_empty() && project.contains(needle.as_str()))
            .map(|(_, rule)| rule.position)
    }

    /// Reject blank substrings, which would otherwise be silently dead entries.
    pub fn validate(&self) -> Result<(), String> {
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.contains.trim().is_empty() {
                return Err(format!("focal_overrides[{}]: 'contains' cannot be empty", i));
            }
        }
        Ok(())
    }
}

impl From<Vec<FocalOverrideRule>> for FocalOverrideTable {
    fn from(rules: Vec<FocalOverrideRule>) -> Self {
        Self::new(rules)
    }
}
