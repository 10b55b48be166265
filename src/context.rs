//! Page-wide context for Verdant.
//!
//! Provides the site configuration and the plant catalog to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| SiteContext::load());
//!
//! // In child components
//! let config = use_site_config();
//! let catalog = use_catalog();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use verdant_core::{Catalog, SiteConfig};

/// Read-only data shared by every section of the page.
///
/// Both values are fixed after startup, so they are shared behind `Rc`
/// rather than signals.
#[derive(Clone)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
    pub catalog: Rc<Catalog>,
}

impl SiteContext {
    /// Load the bundled catalog. A broken catalog renders an empty grid
    /// instead of failing the page.
    pub fn load() -> Self {
        let catalog = Catalog::embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load plant catalog: {}", e);
            Catalog::default()
        });
        tracing::debug!("Loaded {} plants", catalog.len());

        Self {
            config: Rc::new(crate::get_site_config()),
            catalog: Rc::new(catalog),
        }
    }
}

/// Hook to access the site configuration.
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<SiteContext>().config
}

/// Hook to access the plant catalog.
pub fn use_catalog() -> Rc<Catalog> {
    use_context::<SiteContext>().catalog
}
