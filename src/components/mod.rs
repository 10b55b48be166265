//! Page sections for Verdant.
//!
//! Each section owns its own slice of the page and its own state; nothing
//! flows between them.

mod care_guide;
mod newsletter;
mod plant_grid;
mod reveal;
mod seasons;
mod site_header;
mod smooth_link;

pub use care_guide::CareGuide;
pub use newsletter::NewsletterSignup;
pub use plant_grid::PlantGrid;
pub use reveal::Reveal;
pub use seasons::SeasonCards;
pub use site_header::SiteHeader;
pub use smooth_link::SmoothLink;
