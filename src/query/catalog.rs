//! Built-in business queries.

use std::sync::Arc;

use super::roots::resolve_system_engineering;
use super::{Query, QueryContext, QueryRegistry, QueryRegistryBuilder, distinct};
use crate::model::{ElementId, ElementKind, ModelGraphView, relations};

pub const REALIZED_PHYSICAL_LINKS: &str = "GetCurrent_PhysicalLink_RealizedPhysicalLinks";
pub const INHERITED_SIGNALS: &str = "GetCurrent_Signal_InheritedSignals";

/// A registry builder pre-populated with every built-in query.
///
/// Each query is registered for its own subject kind only, so executing it
/// by name on another kind is [`QueryError::NotFound`](super::QueryError).
/// To dispatch broadly and get empty results instead, also register the
/// query under [`ElementKind::ModelElement`].
pub fn capella_queries() -> QueryRegistryBuilder {
    QueryRegistry::builder()
        .with_query(Arc::new(RealizedPhysicalLinks))
        .with_query(Arc::new(InheritedSignals))
}

// ============================================================================
// PHYSICAL LINK
// ============================================================================

/// Physical links realized by a physical link.
///
/// Follows `ownedPhysicalLinkRealizations` then `targetElement`, keeping
/// only targets that are themselves physical links. Order is kept and
/// duplicates are not removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealizedPhysicalLinks;

impl Query for RealizedPhysicalLinks {
    fn name(&self) -> &str {
        REALIZED_PHYSICAL_LINKS
    }

    fn subject_kinds(&self) -> &[ElementKind] {
        &[ElementKind::PhysicalLink]
    }

    fn execute(
        &self,
        view: &dyn ModelGraphView,
        subject: &ElementId,
        _context: &QueryContext,
    ) -> Vec<ElementId> {
        if !view.is_variant(subject, ElementKind::PhysicalLink) {
            return Vec::new();
        }
        view.relation(subject, relations::OWNED_PHYSICAL_LINK_REALIZATIONS)
            .iter()
            .flat_map(|realization| view.relation(realization, relations::TARGET_ELEMENT))
            .filter(|target| view.is_variant(target, ElementKind::PhysicalLink))
            .collect()
    }
}

// ============================================================================
// SIGNAL
// ============================================================================

/// Signals in the inheritance hierarchy of a signal, excluding the signal itself.
///
/// Only answers for signals that resolve to a `SystemEngineering` root,
/// directly or through a shared package's reuse links.
#[derive(Clone, Copy, Debug, Default)]
pub struct InheritedSignals;

impl Query for InheritedSignals {
    fn name(&self) -> &str {
        INHERITED_SIGNALS
    }

    fn subject_kinds(&self) -> &[ElementKind] {
        &[ElementKind::Signal]
    }

    fn execute(
        &self,
        view: &dyn ModelGraphView,
        subject: &ElementId,
        _context: &QueryContext,
    ) -> Vec<ElementId> {
        if !view.is_variant(subject, ElementKind::Signal) {
            return Vec::new();
        }
        if resolve_system_engineering(view, subject).is_none() {
            tracing::trace!(%subject, "no system engineering root");
            return Vec::new();
        }
        let mut supers = distinct(view.relation(subject, relations::SUPER));
        // `super` may erroneously contain the signal itself
        supers.retain(|s| s != subject);
        supers
    }
}
