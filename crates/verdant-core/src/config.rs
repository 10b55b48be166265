//! Site tunables.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::accordion::DEFAULT_SETTLE;
use crate::error::{VerdantError, VerdantResult};
use crate::filter::DEFAULT_STAGGER;
use crate::newsletter::{DEFAULT_LATENCY, DEFAULT_SUCCESS_WINDOW};
use crate::reveal::{RevealOptions, DEFAULT_BOTTOM_MARGIN, DEFAULT_THRESHOLD};
use crate::scroll::{DEFAULT_HEADER_OFFSET, DEFAULT_HEADER_THRESHOLD};

/// Largest accepted per-card fade-in step (ms)
pub const MAX_STAGGER_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Fixed header height cleared by anchor scrolling (px)
    pub header_offset: f64,
    /// Scroll distance after which the header is marked (px)
    pub header_threshold: f64,
    /// Visible fraction that triggers a reveal
    pub reveal_threshold: f64,
    /// Bottom viewport shrink for reveals (px)
    pub reveal_bottom_margin: f64,
    /// Per-card fade-in step (ms)
    pub stagger_ms: u64,
    /// Simulated newsletter latency (ms)
    pub submit_latency_ms: u64,
    /// How long the success panel stays up (ms)
    pub success_window_ms: u64,
    /// Delay before scrolling an opened accordion item into view (ms)
    pub accordion_settle_ms: u64,
    /// Log level name: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            header_threshold: DEFAULT_HEADER_THRESHOLD,
            reveal_threshold: DEFAULT_THRESHOLD,
            reveal_bottom_margin: DEFAULT_BOTTOM_MARGIN,
            stagger_ms: DEFAULT_STAGGER.as_millis() as u64,
            submit_latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            success_window_ms: DEFAULT_SUCCESS_WINDOW.as_millis() as u64,
            accordion_settle_ms: DEFAULT_SETTLE.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a configuration document.
    pub fn from_json(json: &str) -> VerdantResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> VerdantResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded site config");
        Self::from_json(&text)
    }

    fn validate(&self) -> VerdantResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(VerdantError::Config(format!(
                "reveal_threshold must be between 0 and 1, got {}",
                self.reveal_threshold
            )));
        }
        if self.header_offset < 0.0 || self.reveal_bottom_margin < 0.0 {
            return Err(VerdantError::Config(
                "header_offset and reveal_bottom_margin must not be negative".to_string(),
            ));
        }
        if self.stagger_ms > MAX_STAGGER_MS {
            return Err(VerdantError::Config(format!(
                "stagger_ms must be at most {}, got {}",
                MAX_STAGGER_MS, self.stagger_ms
            )));
        }
        Ok(())
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn success_window(&self) -> Duration {
        Duration::from_millis(self.success_window_ms)
    }

    pub fn accordion_settle(&self) -> Duration {
        Duration::from_millis(self.accordion_settle_ms)
    }

    pub fn reveal_options(&self) -> RevealOptions {
        RevealOptions {
            threshold: self.reveal_threshold,
            bottom_margin: self.reveal_bottom_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.header_threshold, 50.0);
        assert_eq!(config.stagger(), Duration::from_millis(100));
        assert_eq!(config.submit_latency(), Duration::from_millis(1500));
        assert_eq!(config.success_window(), Duration::from_secs(5));
        assert_eq!(config.accordion_settle(), Duration::from_millis(300));
        assert_eq!(config.reveal_options(), RevealOptions::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = SiteConfig::from_json(r#"{"submit_latency_ms": 10}"#).unwrap();
        assert_eq!(config.submit_latency(), Duration::from_millis(10));
        assert_eq!(config.header_offset, 80.0);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SiteConfig::from_json(r#"{"reveal_threshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, VerdantError::Config(_)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = SiteConfig::from_json(r#"{"header_ofset": 10}"#).unwrap_err();
        assert!(matches!(err, VerdantError::Json(_)));
    }

    #[test]
    fn oversized_stagger_is_rejected() {
        let err = SiteConfig::from_json(r#"{"stagger_ms": 18446744073709551615}"#).unwrap_err();
        assert!(err.to_string().contains("stagger_ms must be at most"));

        let config = SiteConfig::from_json(r#"{"stagger_ms": 10000}"#).unwrap();
        assert_eq!(config.stagger(), Duration::from_secs(10));
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"stagger_ms": 50}"#).unwrap();
        let config = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(config.stagger(), Duration::from_millis(50));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = SiteConfig::from_file("/nonexistent/verdant/site.json").unwrap_err();
        assert!(matches!(err, VerdantError::Io(_)));
    }
}
