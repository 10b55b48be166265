#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod theme;

use std::sync::OnceLock;

use verdant_core::SiteConfig;

/// Site configuration bundled with the page
const SITE_CONFIG_JSON: &str = include_str!("../assets/site.json");

/// Global site configuration, parsed once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration (parsed at startup or default)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

fn main() {
    let parsed = SiteConfig::from_json(SITE_CONFIG_JSON);

    let level = parsed
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    // Fails only if a subscriber is already installed
    let _ = dioxus::logger::init(level);

    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid site config, using defaults: {}", e);
            SiteConfig::default()
        }
    };

    tracing::info!(
        "Starting Verdant (header offset {}px, reveal threshold {})",
        config.header_offset,
        config.reveal_threshold
    );

    let _ = SITE_CONFIG.set(config);

    dioxus::launch(app::App);
}
