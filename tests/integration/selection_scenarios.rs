//! Observable selection behavior on small, named listings.

use coverpick::resolve::{resolve_cover, CoverSource, ResolutionInput};
use coverpick::{
    detect_position, select_cover, AiProjectAnalysis, CoverFit, FocalPosition, Photo,
    ProjectCoverConfig,
};

fn listing(names: &[&str]) -> Vec<Photo> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Photo::new(format!("id-{}", i), *name))
        .collect()
}

fn ordered_names(photos: &[Photo]) -> Vec<&str> {
    photos.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn hard_prefix_takes_precedence() {
    let photos = listing(&["site.jpg", "cover-storefront.jpg", "electrical-panel.jpg"]);
    let resolution = resolve_cover(&ResolutionInput::new(&photos));
    assert_eq!(resolution.ordered_photos[0].name, "cover-storefront");
    assert_eq!(resolution.cover_source, CoverSource::Filename);

    let photos = listing(&["hero-front-01.jpg", "00-wiring.jpg"]);
    assert_eq!(select_cover(&photos).index, 1);
}

#[test]
fn avoid_keyword_suppresses_technical_shots() {
    let photos = listing(&["facade-01.jpg", "electrical-panel.jpg"]);
    assert_eq!(select_cover(&photos).index, 0);

    let photos = listing(&["electrical-panel.jpg", "facade-01.jpg"]);
    assert_eq!(select_cover(&photos).index, 1);
}

#[test]
fn ties_resolve_to_earliest() {
    let photos = listing(&["photo-a.jpg", "photo-b.jpg"]);
    assert_eq!(select_cover(&photos).index, 0);
}

#[test]
fn stale_ai_id_falls_back_to_selector() {
    let photos = listing(&["site.jpg", "lobby-overview.jpg"]);
    let analysis = AiProjectAnalysis {
        best_cover_id: Some("id-from-a-deleted-photo".to_string()),
    };
    let resolution = resolve_cover(&ResolutionInput::new(&photos).analysis(Some(&analysis)));
    assert_eq!(resolution.cover_id.as_deref(), Some("id-1"));
    assert_eq!(resolution.cover_source, CoverSource::Heuristic);
}

#[test]
fn manual_override_has_absolute_priority() {
    let photos = listing(&["cover-main.jpg", "lobby.jpg", "db-board-bottom.jpg"]);
    let manual = ProjectCoverConfig {
        cover_photo_id: Some("id-2".to_string()),
        cover_position: None,
        cover_fit: Some(CoverFit::Contain),
    };
    let analysis = AiProjectAnalysis {
        best_cover_id: Some("id-1".to_string()),
    };
    let resolution = resolve_cover(
        &ResolutionInput::new(&photos)
            .manual(Some(&manual))
            .analysis(Some(&analysis)),
    );
    assert_eq!(
        ordered_names(&resolution.ordered_photos),
        vec!["db-board-bottom", "cover-main", "lobby"]
    );
    assert_eq!(resolution.focal_position, FocalPosition::Bottom);
    assert_eq!(resolution.fit, CoverFit::Contain);
}

#[test]
fn reorder_preserves_relative_order() {
    let photos = listing(&["a.jpg", "b.jpg", "c-entrance.jpg", "d.jpg"]);
    let resolution = resolve_cover(&ResolutionInput::new(&photos));
    assert_eq!(
        ordered_names(&resolution.ordered_photos),
        vec!["c-entrance", "a", "b", "d"]
    );
}

#[test]
fn empty_input_is_well_defined() {
    let resolution = resolve_cover(&ResolutionInput::new(&[]));
    assert!(resolution.ordered_photos.is_empty());
    assert!(resolution.cover_id.is_none());
    assert_eq!(resolution.focal_position, FocalPosition::Center);
}

#[test]
fn focal_detection_needs_a_separator() {
    assert_eq!(detect_position("rooftop"), FocalPosition::Center);
    assert_eq!(detect_position("facade-top"), FocalPosition::Top);
    let photo = Photo::new("x", "rooftop.jpg");
    assert_eq!(select_cover(&[photo]).focal_position, FocalPosition::Center);
}
