//! # capella-queries
//!
//! Typed query registry over Capella engineering models.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! search       → Find/replace preview and bulk rewrite of text attributes
//!   ↓
//! query        → Query trait, frozen registry, root resolver, catalog
//!   ↓
//! interchange  → JSON/YAML model documents (feature "interchange")
//!   ↓
//! model        → ElementId, ElementKind hierarchy, Model store, ModelGraphView
//! ```

// ============================================================================
// MODULES (dependency order: model → interchange → query → search)
// ============================================================================

/// Model graph: element kinds, relations, store, read-only view
pub mod model;

/// Model interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

/// Queries: registry, context, root resolution, built-in catalog
pub mod query;

/// Find/replace over names, summaries and descriptions
pub mod search;

// Re-export foundation types
pub use model::{Element, ElementId, ElementKind, Model, ModelError, ModelGraphView, ModelHost};

// Re-export the query surface
pub use query::{Query, QueryContext, QueryError, QueryRegistry, QueryRegistryBuilder, capella_queries};
