//! Property tests over arbitrary listings and override snapshots.

use coverpick::resolve::{resolve_cover, FocalOverrideRule, FocalOverrideTable, ResolutionInput};
use coverpick::{select_cover, AiProjectAnalysis, FocalPosition, Photo, ProjectCoverConfig};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "cover", "00", "facade", "front", "lobby", "render", "3d", "panel", "electrical", "ac",
    "top", "bottom", "upper", "lower", "rooftop", "01", "02", "3", "12", "2931", "img", "site",
];

fn name_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(WORDS), 1..4),
        prop::sample::select(&["-", "_", " "][..]),
        prop::sample::select(&["jpg", "JPG", "png"][..]),
    )
        .prop_map(|(words, sep, ext)| format!("{}.{}", words.join(sep), ext))
}

fn listing_strategy() -> impl Strategy<Value = Vec<Photo>> {
    prop::collection::vec(name_strategy(), 0..12).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Photo::new(format!("p{}", i), name))
            .collect()
    })
}

fn position_strategy() -> impl Strategy<Value = FocalPosition> {
    prop_oneof![
        Just(FocalPosition::Top),
        Just(FocalPosition::Center),
        Just(FocalPosition::Bottom),
    ]
}

proptest! {
    #[test]
    fn selector_index_is_always_valid(photos in listing_strategy()) {
        let decision = select_cover(&photos);
        if photos.is_empty() {
            prop_assert_eq!(decision.index, 0);
        } else {
            prop_assert!(decision.index < photos.len());
        }
    }

    #[test]
    fn resolution_is_deterministic(
        photos in listing_strategy(),
        manual_id in prop::option::of(0usize..16),
        ai_id in prop::option::of(0usize..16),
        manual_position in prop::option::of(position_strategy()),
    ) {
        let manual = ProjectCoverConfig {
            cover_photo_id: manual_id.map(|i| format!("p{}", i)),
            cover_position: manual_position,
            cover_fit: None,
        };
        let analysis = AiProjectAnalysis { best_cover_id: ai_id.map(|i| format!("p{}", i)) };
        let table = FocalOverrideTable::new(vec![FocalOverrideRule::new("proj", FocalPosition::Top)]);
        let input = ResolutionInput::new(&photos)
            .project("Project X")
            .manual(Some(&manual))
            .analysis(Some(&analysis))
            .focal_table(&table);

        let first = resolve_cover(&input);
        let second = resolve_cover(&input);
        prop_assert_eq!(&first, &second);

        if let Some(position) = manual_position {
            if !photos.is_empty() {
                prop_assert_eq!(first.focal_position, position);
            }
        }
    }

    #[test]
    fn reorder_is_a_single_promotion(
        photos in listing_strategy(),
        ai_id in prop::option::of(0usize..16),
    ) {
        let analysis = AiProjectAnalysis { best_cover_id: ai_id.map(|i| format!("p{}", i)) };
        let resolution = resolve_cover(&ResolutionInput::new(&photos).analysis(Some(&analysis)));

        prop_assert_eq!(resolution.ordered_photos.len(), photos.len());
        if let Some(cover_id) = &resolution.cover_id {
            prop_assert_eq!(&resolution.ordered_photos[0].id, cover_id);
            let rest: Vec<&str> = resolution.ordered_photos[1..].iter().map(|p| p.id.as_str()).collect();
            let expected: Vec<&str> = photos
                .iter()
                .map(|p| p.id.as_str())
                .filter(|id| *id != cover_id.as_str())
                .collect();
            prop_assert_eq!(rest, expected);
        } else {
            prop_assert!(photos.is_empty());
        }
    }

    #[test]
    fn valid_ai_suggestion_is_honored(photos in listing_strategy(), pick in 0usize..12) {
        prop_assume!(!photos.is_empty());
        let pick = pick % photos.len();
        let analysis = AiProjectAnalysis { best_cover_id: Some(photos[pick].id.clone()) };
        let resolution = resolve_cover(&ResolutionInput::new(&photos).analysis(Some(&analysis)));
        prop_assert_eq!(resolution.cover_id.as_deref(), Some(photos[pick].id.as_str()));
    }
}
