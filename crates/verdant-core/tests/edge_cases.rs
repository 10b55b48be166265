//! Edge case and boundary condition tests
//!
//! These tests exercise the page widgets against the bundled catalog and
//! at the boundaries of their thresholds.

use proptest::prelude::*;
use verdant_core::{
    apply, Accordion, Catalog, FacetGroup, FilterSelection, HeaderWatcher, RevealState,
    ScrollTarget, SiteConfig, DEFAULT_STAGGER,
};

// ============================================================================
// Filter Against The Bundled Catalog
// ============================================================================

/// Every type × difficulty combination, wildcards included
#[test]
fn test_every_combination_of_bundled_catalog() {
    let catalog = Catalog::embedded().unwrap();

    for type_option in FacetGroup::Type.options() {
        for difficulty_option in FacetGroup::Difficulty.options() {
            let selection = FilterSelection::default()
                .select(FacetGroup::Type, type_option.value)
                .unwrap()
                .select(FacetGroup::Difficulty, difficulty_option.value)
                .unwrap();
            let outcome = apply(&selection, &catalog.plants, DEFAULT_STAGGER);

            for plant in &catalog.plants {
                let type_ok =
                    type_option.value == "all" || plant.plant_type.as_str() == type_option.value;
                let difficulty_ok = difficulty_option.value == "all"
                    || plant.difficulty.as_str() == difficulty_option.value;
                assert_eq!(
                    outcome.is_shown(&plant.id),
                    type_ok && difficulty_ok,
                    "{} with type={} difficulty={}",
                    plant.id,
                    type_option.value,
                    difficulty_option.value
                );
            }
        }
    }
}

/// The bundled catalog has at least one empty combination, so the
/// placeholder path is reachable on the real page
#[test]
fn test_bundled_catalog_has_an_empty_combination() {
    let catalog = Catalog::embedded().unwrap();
    let selection = FilterSelection::default()
        .select(FacetGroup::Type, "herb")
        .unwrap()
        .select(FacetGroup::Difficulty, "expert")
        .unwrap();
    assert!(apply(&selection, &catalog.plants, DEFAULT_STAGGER).is_empty());
}

#[test]
fn test_empty_catalog_is_always_empty() {
    let outcome = apply(&FilterSelection::default(), &[], DEFAULT_STAGGER);
    assert!(outcome.is_empty());
    assert!(outcome.hidden.is_empty());
}

// ============================================================================
// Header Threshold
// ============================================================================

/// Crossing the threshold and back toggles the marker exactly at the
/// threshold, once per frame however many scroll events arrive
#[test]
fn test_header_marker_toggles_at_threshold() {
    let mut watcher = HeaderWatcher::new(50.0);
    let positions = [0.0, 20.0, 49.0, 50.0, 51.0, 300.0, 51.0, 50.0, 10.0];
    let mut changes = Vec::new();

    for y in positions {
        let mut frames = 0;
        for _ in 0..5 {
            if watcher.on_scroll() {
                frames += 1;
            }
        }
        assert_eq!(frames, 1);
        if let Some(scrolled) = watcher.on_frame(y) {
            changes.push((y, scrolled));
        }
    }

    assert_eq!(changes, vec![(51.0, true), (50.0, false)]);
}

// ============================================================================
// Anchors, Reveal, Config
// ============================================================================

#[test]
fn test_hash_only_links_go_to_top() {
    assert_eq!(ScrollTarget::from_href("#"), Some(ScrollTarget::Top));
    assert_eq!(ScrollTarget::from_href("#home"), Some(ScrollTarget::Top));
}

#[test]
fn test_reveal_ignores_exit_before_entry() {
    let mut state = RevealState::default();
    for _ in 0..3 {
        assert!(!state.notify(false));
    }
    assert!(state.notify(true));
}

#[test]
fn test_empty_config_document_is_default() {
    assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
}

// ============================================================================
// Accordion Invariant
// ============================================================================

proptest! {
    /// No sequence of toggles ever leaves two items open
    #[test]
    fn accordion_never_opens_two(
        len in 1usize..8,
        clicks in prop::collection::vec(0usize..10, 0..40),
    ) {
        let mut accordion = Accordion::new(len);
        for index in clicks {
            let before = accordion.open_item();
            let change = accordion.toggle(index);
            let open: Vec<usize> = (0..len).filter(|i| accordion.is_open(*i)).collect();
            prop_assert!(open.len() <= 1);
            if index < len && before != Some(index) {
                prop_assert_eq!(open, vec![index]);
                prop_assert_eq!(change.closed, before);
            }
        }
    }
}
