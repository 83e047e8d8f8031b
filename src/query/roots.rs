//! Resolution of the `SystemEngineering` root that scopes an element.
//!
//! Two explicit phases, no recursion:
//!
//! 1. walk the ownership chain upward from the element (inclusive);
//! 2. otherwise find the enclosing `SharedPkg` and, for each of its reuse
//!    links in order, apply phase 1 to the link. The first hit wins.

use rustc_hash::FxHashSet;

use crate::model::{ElementId, ElementKind, ModelGraphView, relations};

/// Nearest element of `kind` on the ownership chain of `element`, inclusive.
///
/// An ownership cycle in the underlying view stops the walk and yields `None`.
pub fn enclosing_of_kind(
    view: &dyn ModelGraphView,
    element: &ElementId,
    kind: ElementKind,
) -> Option<ElementId> {
    let mut visited = FxHashSet::default();
    let mut current = Some(element.clone());
    while let Some(id) = current {
        if !visited.insert(id.clone()) {
            tracing::warn!(start = %element, at = %id, "ownership cycle while walking to {kind}");
            return None;
        }
        if view.is_variant(&id, kind) {
            return Some(id);
        }
        current = view.owner(&id);
    }
    None
}

/// Phase 1: the `SystemEngineering` that contains `element`, if any.
pub fn enclosing_system_engineering(
    view: &dyn ModelGraphView,
    element: &ElementId,
) -> Option<ElementId> {
    enclosing_of_kind(view, element, ElementKind::SystemEngineering)
}

/// Phase 2: reach a `SystemEngineering` through the reuse links of the
/// `SharedPkg` enclosing `element`.
pub fn system_engineering_via_reuse(
    view: &dyn ModelGraphView,
    element: &ElementId,
) -> Option<ElementId> {
    let shared = enclosing_of_kind(view, element, ElementKind::SharedPkg)?;
    view.relation(&shared, relations::REUSE_LINKS)
        .iter()
        .find_map(|link| {
            let root = enclosing_system_engineering(view, link);
            tracing::trace!(%link, found = root.is_some(), "reuse link probe");
            root
        })
}

/// The `SystemEngineering` root for `element`, trying direct ownership first
/// and the shared package reuse links second.
pub fn resolve_system_engineering(
    view: &dyn ModelGraphView,
    element: &ElementId,
) -> Option<ElementId> {
    enclosing_system_engineering(view, element)
        .or_else(|| system_engineering_via_reuse(view, element))
}
