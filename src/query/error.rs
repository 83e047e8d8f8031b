//! Error types for query resolution.

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{ElementId, ElementKind};

/// Errors raised by [`QueryRegistry`](super::QueryRegistry).
///
/// Wrong subject kinds and unresolvable model roots are not errors: queries
/// return an empty result for them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No query is registered for the kind, or any of its supertypes, under this name.
    #[error("No query '{name}' registered for {kind} or its supertypes")]
    NotFound { kind: ElementKind, name: SmolStr },

    /// The subject element is not in the model.
    #[error("Unknown subject element: {0}")]
    UnknownElement(ElementId),
}

impl QueryError {
    /// Create a not-found error.
    pub fn not_found(kind: ElementKind, name: impl Into<SmolStr>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }
}
