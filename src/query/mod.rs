//! Business queries over the model graph.
//!
//! A query is a stateless, side-effect-free walk that maps a subject element
//! to an ordered list of elements. Queries are looked up in a
//! [`QueryRegistry`] by the subject's kind and a query name:
//!
//! ```ignore
//! use capella::query::{capella_queries, QueryContext, INHERITED_SIGNALS};
//!
//! let registry = capella_queries().freeze();
//! let supers = registry.execute(&model, &signal, INHERITED_SIGNALS, &QueryContext::new())?;
//! ```
//!
//! Queries are permissive: a subject of the wrong kind, or one whose model
//! root cannot be found, yields an empty result rather than an error.

mod catalog;
mod context;
mod error;
mod registry;
pub mod roots;
mod traversal;

pub use catalog::{INHERITED_SIGNALS, InheritedSignals, REALIZED_PHYSICAL_LINKS, RealizedPhysicalLinks, capella_queries};
pub use context::{ContextValue, INCLUDE_GENERATED, QueryContext};
pub use error::QueryError;
pub use registry::{QueryKey, QueryRegistry, QueryRegistryBuilder};
pub use traversal::{Step, TraversalQuery};

use rustc_hash::FxHashSet;

use crate::model::{ElementId, ElementKind, ModelGraphView};

/// A named, read-only traversal from a subject element.
///
/// Implementations must not mutate the graph, must not keep references to
/// elements or to the context after `execute` returns, and must return an
/// empty list for subjects outside [`subject_kinds`](Query::subject_kinds).
pub trait Query: Send + Sync + std::fmt::Debug {
    /// Identifier the query is registered under by default.
    fn name(&self) -> &str;

    /// Kinds this query is meant for; used by `register_query`.
    fn subject_kinds(&self) -> &[ElementKind];

    fn execute(
        &self,
        view: &dyn ModelGraphView,
        subject: &ElementId,
        context: &QueryContext,
    ) -> Vec<ElementId>;
}

/// Remove repeated IDs, keeping the first occurrence of each.
pub fn distinct(ids: Vec<ElementId>) -> Vec<ElementId> {
    let mut seen = FxHashSet::default();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
