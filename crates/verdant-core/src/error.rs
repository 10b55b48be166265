//! Error types for Verdant

use thiserror::Error;

/// Main error type for Verdant operations
#[derive(Error, Debug)]
pub enum VerdantError {
    /// Plant catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Site configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A facet button carried a value its group does not know
    #[error("Unknown {group} facet value: {value}")]
    UnknownFacet { group: &'static str, value: String },

    /// Newsletter subscriber rejected or failed the submission
    #[error("Subscribe error: {0}")]
    Subscribe(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using VerdantError
pub type VerdantResult<T> = Result<T, VerdantError>;
