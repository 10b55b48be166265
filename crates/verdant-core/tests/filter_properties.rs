//! Property-based tests for the facet filter
//!
//! Uses proptest to check the visible set against a direct evaluation of
//! both facets for arbitrary catalogs and selection sequences.

use proptest::prelude::*;
use verdant_core::filter::{apply, FacetGroup, FilterSelection, Placeholder, PlaceholderChange};
use verdant_core::{Difficulty, Plant, PlantType, ALL, DEFAULT_STAGGER};

// ============================================================================
// Strategy Generators
// ============================================================================

fn plant_type_strategy() -> impl Strategy<Value = PlantType> {
    prop::sample::select(PlantType::ALL.to_vec())
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

/// Generate a catalog with unique ids
fn plants_strategy(max: usize) -> impl Strategy<Value = Vec<Plant>> {
    prop::collection::vec((plant_type_strategy(), difficulty_strategy()), 0..max).prop_map(
        |facets| {
            facets
                .into_iter()
                .enumerate()
                .map(|(i, (plant_type, difficulty))| Plant {
                    id: format!("plant-{i}"),
                    name: format!("Plant {i}"),
                    botanical: String::new(),
                    blurb: String::new(),
                    plant_type,
                    difficulty,
                    light: String::new(),
                    water: String::new(),
                })
                .collect()
        },
    )
}

/// A facet button click: group plus button value (wildcard included)
fn click_strategy() -> impl Strategy<Value = (FacetGroup, &'static str)> {
    prop_oneof![
        prop::sample::select(FacetGroup::Type.options())
            .prop_map(|o| (FacetGroup::Type, o.value)),
        prop::sample::select(FacetGroup::Difficulty.options())
            .prop_map(|o| (FacetGroup::Difficulty, o.value)),
    ]
}

fn expected_visible(plants: &[Plant], type_value: &str, difficulty_value: &str) -> Vec<String> {
    plants
        .iter()
        .filter(|p| type_value == ALL || p.plant_type.as_str() == type_value)
        .filter(|p| difficulty_value == ALL || p.difficulty.as_str() == difficulty_value)
        .map(|p| p.id.clone())
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The visible set is exactly the cards matching both non-wildcard facets
    #[test]
    fn visible_set_matches_both_facets(
        plants in plants_strategy(30),
        clicks in prop::collection::vec(click_strategy(), 0..10),
    ) {
        let mut selection = FilterSelection::default();
        for (group, value) in clicks {
            selection = selection.select(group, value).unwrap();
        }

        let outcome = apply(&selection, &plants, DEFAULT_STAGGER);
        let shown: Vec<String> = outcome.shown.iter().map(|c| c.id.clone()).collect();

        prop_assert_eq!(
            shown,
            expected_visible(
                &plants,
                selection.active(FacetGroup::Type),
                selection.active(FacetGroup::Difficulty),
            )
        );
        prop_assert_eq!(outcome.shown.len() + outcome.hidden.len(), plants.len());
    }

    /// Wildcards on both facets show every card
    #[test]
    fn all_all_shows_everything(plants in plants_strategy(30)) {
        let outcome = apply(&FilterSelection::default(), &plants, DEFAULT_STAGGER);
        prop_assert_eq!(outcome.shown.len(), plants.len());
        prop_assert!(outcome.hidden.is_empty());
    }

    /// Delays grow by one stagger step per shown card
    #[test]
    fn delays_are_rank_times_step(
        plants in plants_strategy(30),
        click in click_strategy(),
    ) {
        let selection = FilterSelection::default().select(click.0, click.1).unwrap();
        let outcome = apply(&selection, &plants, DEFAULT_STAGGER);
        for (rank, card) in outcome.shown.iter().enumerate() {
            prop_assert_eq!(card.delay, DEFAULT_STAGGER * rank as u32);
        }
    }

    /// The placeholder is present iff the visible set is empty, and is
    /// never inserted twice in a row
    #[test]
    fn placeholder_tracks_emptiness_without_duplicates(
        plants in plants_strategy(12),
        clicks in prop::collection::vec(click_strategy(), 1..25),
    ) {
        let mut selection = FilterSelection::default();
        let mut placeholder = Placeholder::default();
        let mut instances: i32 = 0;

        for (group, value) in clicks {
            selection = selection.select(group, value).unwrap();
            let outcome = apply(&selection, &plants, DEFAULT_STAGGER);
            match placeholder.sync(outcome.is_empty()) {
                PlaceholderChange::Insert => instances += 1,
                PlaceholderChange::Remove => instances -= 1,
                PlaceholderChange::Unchanged => {}
            }
            prop_assert!((0..=1).contains(&instances));
            prop_assert_eq!(placeholder.is_present(), outcome.is_empty());
            prop_assert_eq!(instances == 1, outcome.is_empty());
        }
    }
}
