//! Error types for find/replace.

use thiserror::Error;

use crate::model::{ElementId, ModelError};

/// Errors raised while searching or rewriting attributes.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The find text could not be compiled.
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A scope root is not in the model.
    #[error("Unknown scope element: {0}")]
    UnknownElement(ElementId),

    /// Writing a replacement failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl SearchError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
