//! Scoring rule table for the cover selector.
//!
//! Rules are plain data. Within a group the first matching rule applies and
//! the rest of the group is skipped; groups are scored independently, so a
//! name can collect both a preferred bonus and the avoid penalty.

use crate::photo::{tokenize, Photo};
use serde::Serialize;

/// Rules in the same group short-circuit each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleGroup {
    Preferred,
    Avoid,
}

/// A keyword set and the adjustment applied when any keyword is a token of the name.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRule {
    pub label: &'static str,
    pub group: RuleGroup,
    pub keywords: &'static [&'static str],
    pub delta: i32,
}

/// Branding and exterior shots.
pub const STRONG_PREFERRED: ScoreRule = ScoreRule {
    label: "strong_preferred",
    group: RuleGroup::Preferred,
    keywords: &[
        "logo",
        "brand",
        "signage",
        "sign",
        "facade",
        "storefront",
        "shopfront",
        "entrance",
        "exterior",
        "front",
        "hero",
        "cover",
        "main",
    ],
    delta: 20,
};

/// Wide interior and presentation shots.
pub const MILD_PREFERRED: ScoreRule = ScoreRule {
    label: "mild_preferred",
    group: RuleGroup::Preferred,
    keywords: &[
        "overview",
        "general",
        "reception",
        "lobby",
        "opening",
        "render",
        "3d",
        "perspective",
    ],
    delta: 8,
};

/// Technical and MEP detail shots.
pub const AVOID: ScoreRule = ScoreRule {
    label: "avoid",
    group: RuleGroup::Avoid,
    keywords: &[
        "electrical",
        "board",
        "panel",
        "detail",
        "mep",
        "pipe",
        "duct",
        "cable",
        "wiring",
        "switch",
        "breaker",
        "db",
        "meter",
        "ceiling",
        "ac",
        "chiller",
        "pump",
        "thermostat",
        "valve",
        "riser",
        "shaft",
        "slab",
        "conduit",
        "trunking",
        "tray",
        "diffuser",
        "grill",
        "drain",
        "toilet",
        "wc",
        "sprinkler",
        "sensor",
    ],
    delta: -30,
};

/// Keyword rules in evaluation order.
pub const KEYWORD_RULES: &[ScoreRule] = &[STRONG_PREFERRED, MILD_PREFERRED, AVOID];

/// Bonus for low sequence numbers: photographers front-load hero shots.
pub const SEQUENCE_FIRST_BONUS: i32 = 8;
pub const SEQUENCE_EARLY_BONUS: i32 = 4;

/// One rule that contributed to a photo's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: &'static str,
    pub matched: String,
    pub delta: i32,
}

/// True when the name forces itself to be the cover: `cover...` or `00-`/`00_`/`00 `.
pub fn is_forced_cover(photo: &Photo) -> bool {
    let key = photo.match_key();
    key.starts_with("cover")
        || key
            .strip_prefix("00")
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| matches!(c, '-' | '_' | ' '))
}

/// First run of one or two digits bounded by non-digits (or the ends of the name).
pub fn sequence_number(key: &str) -> Option<u32> {
    let bytes = key.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i - start <= 2 {
                return key[start..i].parse().ok();
            }
        } else {
            i += 1;
        }
    }
    None
}

/// Adjustment for a sequence number: 1 earns the most, 2 and 3 a little.
pub fn sequence_bonus(number: u32) -> i32 {
    match number {
        1 => SEQUENCE_FIRST_BONUS,
        2..=3 => SEQUENCE_EARLY_BONUS,
        _ => 0,
    }
}

/// Score a photo against `rules` plus the sequence bonus.
pub fn score_with(rules: &[ScoreRule], photo: &Photo) -> (i32, Vec<RuleHit>) {
    let tokens: Vec<&str> = photo.tokens().collect();
    let mut matched_groups: Vec<RuleGroup> = Vec::new();
    let mut hits = Vec::new();
    let mut points = 0;

    for rule in rules {
        if matched_groups.contains(&rule.group) {
            continue;
        }
        let found = rule
            .keywords
            .iter()
            .find(|keyword| tokens.iter().any(|t| t == *keyword));
        if let Some(keyword) = found {
            matched_groups.push(rule.group);
            points += rule.delta;
            hits.push(RuleHit {
                rule: rule.label,
                matched: (*keyword).to_string(),
                delta: rule.delta,
            });
        }
    }

    if let Some(number) = sequence_number(photo.match_key()) {
        let delta = sequence_bonus(number);
        if delta != 0 {
            points += delta;
            hits.push(RuleHit {
                rule: "sequence",
                matched: number.to_string(),
                delta,
            });
        }
    }

    (points, hits)
}

/// Score a photo against the built-in rule table.
pub fn score_photo(photo: &Photo) -> (i32, Vec<RuleHit>) {
    score_with(KEYWORD_RULES, photo)
}
