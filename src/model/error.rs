//! Error types for model store mutations.

use thiserror::Error;

use super::{Cardinality, ElementId, RelationRole};

/// Errors raised when editing a [`Model`](super::Model).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The referenced element is not in the model.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// An element with this ID already exists.
    #[error("Duplicate element: {0}")]
    DuplicateElement(ElementId),

    /// The metaclass name is not recognised.
    #[error("Unknown element kind: {0}")]
    UnknownKind(String),

    /// The child already has an owner.
    #[error("Element {child} is already contained by {owner}")]
    AlreadyContained { child: ElementId, owner: ElementId },

    /// Adding the edge would make an element contain itself.
    #[error("Containment cycle: {child} is an ancestor of {owner}")]
    ContainmentCycle { owner: ElementId, child: ElementId },

    /// A relation was used with a different shape than it was created with.
    #[error(
        "Relation '{relation}' on {element} is {actual_cardinality:?}/{actual_role:?}, \
         not {expected_cardinality:?}/{expected_role:?}"
    )]
    RelationMismatch {
        element: ElementId,
        relation: String,
        expected_cardinality: Cardinality,
        expected_role: RelationRole,
        actual_cardinality: Cardinality,
        actual_role: RelationRole,
    },
}

impl ModelError {
    /// Create an unknown element error.
    pub fn unknown(id: &ElementId) -> Self {
        Self::UnknownElement(id.clone())
    }
}
