//! Plant Catalog Grid
//!
//! Facet filter over the plant cards. The selection is an immutable
//! [`FilterSelection`]; every change reruns [`apply`] and the cards pick up
//! their visibility and fade-in delay from the outcome.

use dioxus::prelude::*;
use verdant_core::{
    apply, FacetGroup, FilterSelection, Placeholder, PlaceholderChange, Plant, ShownCard,
    NO_RESULTS_MESSAGE,
};
use verdant_ui::FacetPills;

use crate::components::Reveal;
use crate::context::{use_catalog, use_site_config};

const FACET_GROUPS: [FacetGroup; 2] = [FacetGroup::Type, FacetGroup::Difficulty];

/// Filter bar, card grid and the "no results" placeholder
#[component]
pub fn PlantGrid() -> Element {
    let catalog = use_catalog();
    let stagger = use_site_config().stagger();

    let mut selection = use_signal(FilterSelection::default);
    // Bumped on every change so shown cards replay their fade-in
    let mut generation = use_signal(|| 0u32);
    let mut placeholder = use_signal(Placeholder::default);

    let plants = catalog.clone();
    let outcome = use_memo(move || apply(&selection(), &plants.plants, stagger));

    use_effect(move || {
        let empty = outcome.read().is_empty();
        match placeholder.write().sync(empty) {
            PlaceholderChange::Insert => tracing::debug!("No plants match, showing placeholder"),
            PlaceholderChange::Remove => tracing::debug!("Plants match again, removing placeholder"),
            PlaceholderChange::Unchanged => {}
        }
    });

    let on_select = move |(group, value): (FacetGroup, String)| {
        let result = selection.peek().select(group, &value);
        match result {
            Ok(next) => {
                selection.set(next);
                generation += 1;
            }
            Err(e) => tracing::warn!("Ignoring filter click: {}", e),
        }
    };

    let current = selection();
    let replay = generation() % 2 == 1;

    rsx! {
        div { class: "filters",
            for group in FACET_GROUPS {
                FacetPills {
                    key: "{group.as_str()}",
                    group,
                    active: current.active(group).to_string(),
                    on_select,
                }
            }
        }

        div { class: "plant-grid",
            for plant in catalog.plants.iter() {
                PlantCard {
                    key: "{plant.id}",
                    plant: plant.clone(),
                    shown: outcome.read().shown_card(&plant.id).cloned(),
                    replay,
                }
            }
        }

        if placeholder.read().is_present() {
            p { class: "no-results", role: "status", "{NO_RESULTS_MESSAGE}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PlantCardProps {
    plant: Plant,
    /// `None` when filtered out
    shown: Option<ShownCard>,
    /// Alternates on each recomputation to restart the fade-in
    replay: bool,
}

#[component]
fn PlantCard(props: PlantCardProps) -> Element {
    let plant = &props.plant;
    let delay = props
        .shown
        .as_ref()
        .map(|card| format!("animation-delay: {}", card.css_delay()));

    rsx! {
        Reveal {
            class: "plant-card",
            hidden: props.shown.is_none(),
            article {
                class: fade_class(props.replay),
                style: delay.unwrap_or_default(),
                "data-type": plant.plant_type.as_str(),
                "data-difficulty": plant.difficulty.as_str(),
                div { class: "plant-card__header",
                    h3 { class: "plant-card__name", "{plant.name}" }
                    p { class: "plant-card__botanical", "{plant.botanical}" }
                }
                p { class: "plant-card__blurb", "{plant.blurb}" }
                div { class: "plant-card__tags",
                    span { class: "tag tag--type", "{plant.plant_type.label()}" }
                    span { class: "tag tag--{plant.difficulty.as_str()}", "{plant.difficulty.label()}" }
                }
                dl { class: "plant-card__care",
                    dt { "Light" }
                    dd { "{plant.light}" }
                    dt { "Water" }
                    dd { "{plant.water}" }
                }
            }
        }
    }
}

/// Two class names sharing one keyframe set, so flipping between them
/// restarts the animation without remounting the card.
fn fade_class(replay: bool) -> &'static str {
    if replay {
        "plant-card__body fade-in fade-in--replay"
    } else {
        "plant-card__body fade-in"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_class_alternates() {
        assert_ne!(fade_class(false), fade_class(true));
        assert!(fade_class(false).contains("fade-in"));
        assert!(fade_class(true).contains("fade-in"));
    }
}
