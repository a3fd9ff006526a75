// src/infra/errors.rs — Error types for khelpers

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    // Tree errors
    #[error("Record #{index} has no usable '{field}' field")]
    MissingField { index: usize, field: String },

    #[error("Record #{index} has a malformed '{field}' value (expected an array of records)")]
    InvalidChildren { index: usize, field: String },

    #[error("Cycle detected in parent references: {}", chain.join(" -> "))]
    CycleDetected { chain: Vec<String> },

    // Input errors
    #[error("Unrecognized date '{input}'")]
    DateParse { input: String },

    #[error("Invalid date format string '{format}'")]
    DateFormat { format: String },

    #[error("Configuration error: {0}")]
    Config(String),

    // Infra
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl HelperError {
    /// Errors caused by the shape of caller-supplied records.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HelperError::MissingField { .. }
                | HelperError::InvalidChildren { .. }
                | HelperError::CycleDetected { .. }
                | HelperError::DateParse { .. }
                | HelperError::DateFormat { .. }
        )
    }
}
