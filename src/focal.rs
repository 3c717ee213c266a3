//! Focal Position Detector
//!
//! Reads a crop hint out of a filename: `facade-top.jpg` keeps the top of the
//! frame, `lobby_lower.jpg` keeps the bottom, everything else stays centered.

use crate::photo::match_key;
use crate::types::FocalPosition;

const TOP_WORDS: &[&str] = &["top", "upper"];
const BOTTOM_WORDS: &[&str] = &["bottom", "lower"];

/// Detect the focal position for a photo name (extension already stripped).
///
/// An indicator only counts as its own token: it must follow a separator and
/// must not run on into more letters, so `rooftop` and `topping` stay
/// centered. Top is checked before bottom.
pub fn detect_position(name: &str) -> FocalPosition {
    let key = match_key(name);
    if TOP_WORDS.iter().any(|w| has_separated_word(&key, w)) {
        FocalPosition::Top
    } else if BOTTOM_WORDS.iter().any(|w| has_separated_word(&key, w)) {
        FocalPosition::Bottom
    } else {
        FocalPosition::Center
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | ' ' | '.')
}

fn has_separated_word(key: &str, word: &str) -> bool {
    key.match_indices(word).any(|(start, _)| {
        let preceded = key[..start].chars().next_back().is_some_and(is_separator);
        let terminated = key[start + word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphabetic());
        preceded && terminated
    })
}
