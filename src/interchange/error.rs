//! Error types for interchange operations.

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur while reading or writing model documents.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document names a kind outside the metamodel.
    #[error("Unknown element kind '{kind}' on element {element}")]
    UnknownKind { element: String, kind: String },

    /// The document is well-formed but describes an inconsistent model.
    #[error("Invalid document: {0}")]
    Invalid(String),

    /// Rebuilding the model store failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unknown kind error.
    pub fn unknown_kind(element: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnknownKind {
            element: element.into(),
            kind: kind.into(),
        }
    }

    /// Create an invalid document error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
