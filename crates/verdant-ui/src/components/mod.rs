//! Reusable UI components for the catalog page

mod button;
mod facet_pills;
mod input;

pub use button::*;
pub use facet_pills::*;
pub use input::*;
