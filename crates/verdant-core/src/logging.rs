//! Diagnostic records.
//!
//! Every accepted newsletter submission emits one structured `tracing`
//! event. The record is also serializable so a collector can keep it as a
//! JSON line.

use serde::{Deserialize, Serialize};

/// Tracing target for newsletter submissions
pub const NEWSLETTER_TARGET: &str = "verdant::newsletter";

/// What was submitted through the newsletter form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub email: String,
    pub consent: bool,
}

impl SubmissionRecord {
    pub fn new(email: impl Into<String>, consent: bool) -> Self {
        Self {
            email: email.into(),
            consent,
        }
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from a JSON line.
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Emit the diagnostic event for one submission.
pub fn record_submission(record: &SubmissionRecord) {
    match record.to_json_line() {
        Ok(line) => tracing::info!(
            target: NEWSLETTER_TARGET,
            email = %record.email,
            consent = record.consent,
            record = %line,
            "Newsletter submission"
        ),
        Err(e) => tracing::warn!(
            target: NEWSLETTER_TARGET,
            email = %record.email,
            consent = record.consent,
            "Newsletter submission (record not serializable: {})",
            e
        ),
    }
}
