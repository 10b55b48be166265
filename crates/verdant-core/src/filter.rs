//! Facet filter over the plant card grid.
//!
//! Two independent facet groups (type and difficulty) each hold exactly one
//! active selection, where `all` is the wildcard. A card is visible when it
//! matches both selections. Recomputation is a pure function of the current
//! [`FilterSelection`] and the card list; nothing is cached between calls.
//!
//! Facet buttons carry an explicit group identifier ([`FacetGroup`]), so the
//! dimension a click belongs to never depends on surrounding label text.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::catalog::{Difficulty, Plant, PlantType};
use crate::error::{VerdantError, VerdantResult};

/// Wildcard value shared by both facet groups
pub const ALL: &str = "all";

/// Message shown in the placeholder when no card matches
pub const NO_RESULTS_MESSAGE: &str = "No plants match your filters. Try a different combination.";

/// Default per-card fade-in step
pub const DEFAULT_STAGGER: Duration = Duration::from_millis(100);

/// Facet dimension, written to `data-facet-group` on each button group
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FacetGroup {
    Type,
    Difficulty,
}

impl FacetGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetGroup::Type => "type",
            FacetGroup::Difficulty => "difficulty",
        }
    }

    /// Group heading shown above the buttons
    pub fn label(&self) -> &'static str {
        match self {
            FacetGroup::Type => "Plant Type",
            FacetGroup::Difficulty => "Care Level",
        }
    }

    /// Buttons for this group, wildcard first
    pub fn options(&self) -> Vec<FacetOption> {
        let mut options = vec![FacetOption {
            value: ALL,
            label: "All",
        }];
        match self {
            FacetGroup::Type => options.extend(PlantType::ALL.iter().map(|t| FacetOption {
                value: t.as_str(),
                label: t.label(),
            })),
            FacetGroup::Difficulty => {
                options.extend(Difficulty::ALL.iter().map(|d| FacetOption {
                    value: d.as_str(),
                    label: d.label(),
                }))
            }
        }
        options
    }
}

impl FromStr for FacetGroup {
    type Err = VerdantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(FacetGroup::Type),
            "difficulty" => Ok(FacetGroup::Difficulty),
            other => Err(VerdantError::UnknownFacet {
                group: "group",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for FacetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single facet button
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Selection within one facet group
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: Copy + PartialEq> Facet<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(selected) => *selected == value,
        }
    }
}

impl<T: FromStr<Err = VerdantError>> Facet<T> {
    /// Parse a button value, accepting the `all` wildcard
    pub fn parse(value: &str) -> VerdantResult<Self> {
        if value == ALL {
            Ok(Facet::All)
        } else {
            value.parse().map(Facet::Only)
        }
    }
}

/// The active selection of both facet groups.
///
/// Immutable: a click produces a new selection via [`FilterSelection::select`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FilterSelection {
    pub plant_type: Facet<PlantType>,
    pub difficulty: Facet<Difficulty>,
}

impl FilterSelection {
    /// Selection after clicking the button `value` in `group`.
    ///
    /// The other group keeps its current selection.
    pub fn select(self, group: FacetGroup, value: &str) -> VerdantResult<Self> {
        Ok(match group {
            FacetGroup::Type => Self {
                plant_type: Facet::parse(value)?,
                ..self
            },
            FacetGroup::Difficulty => Self {
                difficulty: Facet::parse(value)?,
                ..self
            },
        })
    }

    /// The button value currently active in `group`
    pub fn active(&self, group: FacetGroup) -> &'static str {
        match group {
            FacetGroup::Type => match self.plant_type {
                Facet::All => ALL,
                Facet::Only(t) => t.as_str(),
            },
            FacetGroup::Difficulty => match self.difficulty {
                Facet::All => ALL,
                Facet::Only(d) => d.as_str(),
            },
        }
    }

    pub fn is_active(&self, group: FacetGroup, value: &str) -> bool {
        self.active(group) == value
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        self.plant_type.matches(plant.plant_type) && self.difficulty.matches(plant.difficulty)
    }
}

/// A card made visible by a recomputation
#[derive(Clone, PartialEq, Debug)]
pub struct ShownCard {
    pub id: String,
    /// Fade-in delay: rank among shown cards times the stagger step
    pub delay: Duration,
}

impl ShownCard {
    /// Value for the inline `animation-delay` style
    pub fn css_delay(&self) -> String {
        format!("{}ms", self.delay.as_millis())
    }
}

/// Result of applying a selection to the card list
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FilterOutcome {
    pub shown: Vec<ShownCard>,
    pub hidden: Vec<String>,
}

impl FilterOutcome {
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.iter().any(|c| c.id == id)
    }

    pub fn shown_card(&self, id: &str) -> Option<&ShownCard> {
        self.shown.iter().find(|c| c.id == id)
    }
}

/// Recompute the visible card set for `selection`.
pub fn apply(selection: &FilterSelection, plants: &[Plant], stagger: Duration) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for plant in plants {
        if selection.matches(plant) {
            let rank = outcome.shown.len() as u32;
            outcome.shown.push(ShownCard {
                id: plant.id.clone(),
                delay: stagger.saturating_mul(rank),
            });
        } else {
            outcome.hidden.push(plant.id.clone());
        }
    }

    tracing::debug!(
        plant_type = selection.active(FacetGroup::Type),
        difficulty = selection.active(FacetGroup::Difficulty),
        shown = outcome.shown.len(),
        hidden = outcome.hidden.len(),
        "Filter recomputed"
    );

    outcome
}

/// What the page must do with the "no results" placeholder
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlaceholderChange {
    Insert,
    Remove,
    Unchanged,
}

/// Tracks the singleton "no results" placeholder after the card grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Placeholder {
    present: bool,
}

impl Placeholder {
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Reconcile with the latest outcome; never inserts a second instance.
    pub fn sync(&mut self, visible_is_empty: bool) -> PlaceholderChange {
        match (self.present, visible_is_empty) {
            (false, true) => {
                self.present = true;
                PlaceholderChange::Insert
            }
            (true, false) => {
                self.present = false;
                PlaceholderChange::Remove
            }
            _ => PlaceholderChange::Unchanged,
        }
    }
}
