//! Verdant UI Components
//!
//! Presentational Dioxus components shared by the catalog page. They hold
//! no behavior of their own: state lives in `verdant-core` and is passed in
//! through props, events come back out through handlers.
//!
//! ## Class Naming
//!
//! Components emit BEM-style classes (`block__element--modifier`) that the
//! page stylesheet targets:
//! - `btn`, `btn--primary`, `btn--busy`
//! - `filter-group`, `filter-btn`, `filter-btn active`
//! - `form-field`, `form-field__error`, `form-field--invalid`

pub mod components;

pub use components::*;
