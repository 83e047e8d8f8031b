//! Read-only graph access used by queries.
//!
//! Queries see the model only through [`ModelGraphView`], which keeps them
//! independent of the concrete store. Implementations must read live state
//! on every call: the graph can be edited between two calls and queries must
//! observe the edit.

use std::sync::Arc;

use super::{Attribute, ElementId, ElementKind, Model};

/// Minimal navigational contract over a typed element graph.
pub trait ModelGraphView: Send + Sync {
    /// The kind of an element, `None` if the element is unknown.
    fn kind_of(&self, element: &ElementId) -> Option<ElementKind>;

    /// Targets of a named relation, in order.
    ///
    /// Single-valued relations yield zero or one target. Unknown elements and
    /// unset relations yield an empty list.
    fn relation(&self, element: &ElementId, relation: &str) -> Vec<ElementId>;

    /// The containing element, if any.
    fn owner(&self, element: &ElementId) -> Option<ElementId>;

    /// Direct children over every containment relation, in order.
    fn contents(&self, element: &ElementId) -> Vec<ElementId>;

    /// A text attribute, `None` if absent or not applicable to the element's kind.
    fn attribute(&self, element: &ElementId, attribute: Attribute) -> Option<Arc<str>>;

    /// Whether the element's kind is `kind` or one of its subtypes.
    fn is_variant(&self, element: &ElementId, kind: ElementKind) -> bool {
        self.kind_of(element).is_some_and(|k| k.is_a(kind))
    }
}

impl ModelGraphView for Model {
    fn kind_of(&self, element: &ElementId) -> Option<ElementKind> {
        self.get(element).map(|e| e.kind)
    }

    fn relation(&self, element: &ElementId, relation: &str) -> Vec<ElementId> {
        self.get(element)
            .map(|e| e.targets(relation).to_vec())
            .unwrap_or_default()
    }

    fn owner(&self, element: &ElementId) -> Option<ElementId> {
        self.get(element).and_then(|e| e.owner.clone())
    }

    fn contents(&self, element: &ElementId) -> Vec<ElementId> {
        self.get(element)
            .map(|e| e.contained().cloned().collect())
            .unwrap_or_default()
    }

    fn attribute(&self, element: &ElementId, attribute: Attribute) -> Option<Arc<str>> {
        let element = self.get(element)?;
        if !attribute.applies_to(element.kind) {
            return None;
        }
        element.attribute(attribute).cloned()
    }
}
