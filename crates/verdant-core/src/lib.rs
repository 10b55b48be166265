//! Verdant Core Library
//!
//! Behavior behind the Verdant plant-care catalog page, kept free of any
//! DOM so it runs and tests natively.
//!
//! ## Overview
//!
//! Each page widget is a small state machine driven by UI events:
//!
//! - **filter**: two-facet card filter with staggered fade-in and a
//!   singleton "no results" placeholder
//! - **newsletter**: email/consent validation and the timed
//!   Submitting → Success → Idle flow
//! - **nav**: mobile menu open/closed state
//! - **scroll**: anchor offsets and the frame-coalesced header watcher
//! - **reveal**: one-shot visibility-triggered entrance animations
//! - **accordion**: single-open-panel disclosure
//!
//! ## Quick Start
//!
//! ```ignore
//! use verdant_core::{apply, Catalog, FacetGroup, FilterSelection, DEFAULT_STAGGER};
//!
//! let catalog = Catalog::embedded()?;
//! let selection = FilterSelection::default().select(FacetGroup::Type, "herb")?;
//! for card in apply(&selection, &catalog.plants, DEFAULT_STAGGER).shown {
//!     println!("{} (+{})", card.id, card.css_delay());
//! }
//! ```

pub mod accordion;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod nav;
pub mod newsletter;
pub mod reveal;
pub mod scroll;
pub mod timer;

// Re-exports
pub use accordion::{is_activation_key, Accordion, AccordionChange};
pub use catalog::{CareTopic, Catalog, Difficulty, Plant, PlantType, SeasonTip, CARE_GUIDE, SEASONS};
pub use config::SiteConfig;
pub use error::{VerdantError, VerdantResult};
pub use filter::{
    apply, Facet, FacetGroup, FacetOption, FilterOutcome, FilterSelection, Placeholder,
    PlaceholderChange, ShownCard, ALL, DEFAULT_STAGGER, NO_RESULTS_MESSAGE,
};
pub use logging::SubmissionRecord;
pub use nav::{ClickTarget, NavMenu};
pub use newsletter::{
    deliver, run_submission, validate_email, FormError, FormField, FormHandle, FormState,
    Newsletter, SimulatedSubscriber, Subscribe,
};
pub use reveal::{RevealOptions, RevealState};
pub use scroll::{anchor_offset, HeaderWatcher, ScrollTarget, VerticalRect};
pub use timer::Timer;
#[cfg(feature = "tokio")]
pub use timer::TokioTimer;
