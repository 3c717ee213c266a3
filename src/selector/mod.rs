//! Cover Selector
//!
//! Picks the photo that represents a project using only filename signals.
//! Pure and deterministic: the same list always yields the same decision.

pub mod rules;

use crate::focal::detect_position;
use crate::photo::Photo;
use crate::types::FocalPosition;
use serde::Serialize;

pub use rules::{RuleGroup, RuleHit, ScoreRule, KEYWORD_RULES};

/// Score subtracted per listing position; earlier photos win ties.
pub const POSITION_PENALTY: f64 = 0.1;

/// Heuristic points less the positional penalty. This is the ranked value.
pub fn effective_score(points: i32, index: usize) -> f64 {
    f64::from(points) - POSITION_PENALTY * index as f64
}

/// Why the selector landed on its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// No photos; the index is a placeholder.
    Empty,
    /// Name starts with `cover` or `00-`.
    FilenamePrefix,
    SinglePhoto,
    Scored,
}

/// Selector output. `index` is always valid for non-empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverDecision {
    pub index: usize,
    pub focal_position: FocalPosition,
    pub reason: SelectionReason,
}

/// Pick the cover photo and its focal position.
pub fn select_cover(photos: &[Photo]) -> CoverDecision {
    select_cover_with(KEYWORD_RULES, photos)
}

/// [`select_cover`] against a caller-supplied keyword rule table.
pub fn select_cover_with(rules: &[ScoreRule], photos: &[Photo]) -> CoverDecision {
    if photos.is_empty() {
        return CoverDecision {
            index: 0,
            focal_position: FocalPosition::Center,
            reason: SelectionReason::Empty,
        };
    }

    if let Some(index) = photos.iter().position(rules::is_forced_cover) {
        return decision(photos, index, SelectionReason::FilenamePrefix);
    }

    if photos.len() == 1 {
        return decision(photos, 0, SelectionReason::SinglePhoto);
    }

    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;
    for (index, photo) in photos.iter().enumerate() {
        let (points, _) = rules::score_with(rules, photo);
        let score = effective_score(points, index);
        // strict: an equal score never displaces an earlier photo
        if score > best_score {
            best_score = score;
            best_index = index;
        }
    }

    decision(photos, best_index, SelectionReason::Scored)
}

fn decision(photos: &[Photo], index: usize, reason: SelectionReason) -> CoverDecision {
    CoverDecision {
        index,
        focal_position: detect_position(&photos[index].name),
        reason,
    }
}

/// Score breakdown for one photo, in listing order.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoScore {
    pub index: usize,
    pub photo_id: String,
    pub name: String,
    pub forced: bool,
    pub points: i32,
    /// `points - 0.1 * index`, the value the selector ranks on.
    pub effective: f64,
    pub focal_position: FocalPosition,
    pub hits: Vec<RuleHit>,
    pub selected: bool,
}

/// Per-photo scoring detail, with the selector's pick marked.
pub fn explain_cover(photos: &[Photo]) -> Vec<PhotoScore> {
    let chosen = select_cover(photos);
    photos
        .iter()
        .enumerate()
        .map(|(index, photo)| {
            let (points, hits) = rules::score_photo(photo);
            PhotoScore {
                index,
                photo_id: photo.id.clone(),
                name: photo.name.clone(),
                forced: rules::is_forced_cover(photo),
                points,
                effective: effective_score(points, index),
                focal_position: detect_position(&photo.name),
                hits,
                selected: chosen.reason != SelectionReason::Empty && chosen.index == index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(names: &[&str]) -> Vec<Photo> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Photo::new(format!("p{}", i), *n))
            .collect()
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let decision = select_cover(&[]);
        assert_eq!(decision.index, 0);
        assert_eq!(decision.focal_position, FocalPosition::Center);
        assert_eq!(decision.reason, SelectionReason::Empty);
    }

    #[test]
    fn hard_prefix_beats_scoring() {
        let list = photos(&["site.jpg", "cover-storefront.jpg", "electrical-panel.jpg"]);
        let decision = select_cover(&list);
        assert_eq!(decision.index, 1);
        assert_eq!(decision.reason, SelectionReason::FilenamePrefix);

        // even a prefix on a penalised name wins
        let list = photos(&["facade-01.jpg", "00-electrical-panel-top.jpg"]);
        let decision = select_cover(&list);
        assert_eq!(decision.index, 1);
        assert_eq!(decision.focal_position, FocalPosition::Top);
    }

    #[test]
    fn first_prefix_in_listing_order_wins() {
        let list = photos(&["a.jpg", "00_second.jpg", "cover.jpg"]);
        assert_eq!(select_cover(&list).index, 1);
    }

    #[test]
    fn single_photo_shortcut() {
        let list = photos(&["electrical-panel-bottom.jpg"]);
        let decision = select_cover(&list);
        assert_eq!(decision.index, 0);
        assert_eq!(decision.reason, SelectionReason::SinglePhoto);
        assert_eq!(decision.focal_position, FocalPosition::Bottom);
    }

    #[test]
    fn avoid_keyword_suppresses() {
        let list = photos(&["electrical-panel.jpg", "facade-01.jpg"]);
        let decision = select_cover(&list);
        assert_eq!(decision.index, 1);
        assert_eq!(decision.reason, SelectionReason::Scored);
    }

    #[test]
    fn ties_go_to_earliest() {
        let list = photos(&["photo-a.jpg", "photo-b.jpg"]);
        assert_eq!(select_cover(&list).index, 0);

        let list = photos(&["pipe.jpg", "lobby.jpg", "reception.jpg"]);
        assert_eq!(select_cover(&list).index, 1);
    }

    #[test]
    fn positional_penalty_accumulates_over_long_listings() {
        // p0 scores -2, p21 scores 0; at index 21 the penalty leaves p21 at -2.1
        let mut names = vec!["facade-01-panel.jpg"];
        names.extend(std::iter::repeat("pipe.jpg").take(20));
        names.push("site.jpg");
        let list = photos(&names);
        assert_eq!(list.len(), 22);

        let decision = select_cover(&list);
        assert_eq!(decision.index, 0);

        let scores = explain_cover(&list);
        let best = scores
            .iter()
            .max_by(|a, b| a.effective.total_cmp(&b.effective).then(b.index.cmp(&a.index)))
            .unwrap();
        assert_eq!(best.index, decision.index);
        assert!(scores[0].selected);
        assert!(!scores[21].selected);
    }

    #[test]
    fn sequence_bonus_breaks_keyword_ties() {
        let list = photos(&["interior-07.jpg", "interior-02.jpg", "interior-01.jpg"]);
        assert_eq!(select_cover(&list).index, 2);
    }

    #[test]
    fn all_negative_still_picks_best() {
        let list = photos(&["pipe-riser.jpg", "front-duct.jpg"]);
        assert_eq!(select_cover(&list).index, 1);
    }

    #[test]
    fn explain_marks_the_selected_photo() {
        let list = photos(&["IMG_2931.jpg", "entrance-top.jpg"]);
        let scores = explain_cover(&list);
        assert_eq!(scores.len(), 2);
        assert!(!scores[0].selected);
        assert!(scores[1].selected);
        assert_eq!(scores[1].points, 20);
        assert!((scores[1].effective - 19.9).abs() < 1e-9);
        assert_eq!(scores[1].focal_position, FocalPosition::Top);
    }
}
