//! Query registration and most-specific-kind resolution.
//!
//! Registration happens once through a [`QueryRegistryBuilder`]; `freeze`
//! turns it into an immutable [`QueryRegistry`] that any number of threads
//! may resolve against without locking.
//!
//! ```text
//! builder.register(Signal, "X", q1)      ─┐
//! builder.register(Classifier, "X", q2)  ─┼─ freeze() ─▶ QueryRegistry
//!                                         │
//! resolve(Signal, "X")  → q1   (exact)
//! resolve(Class, "X")   → q2   (Class → Classifier)
//! resolve(Port, "X")    → NotFound
//! ```

use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::sync::Arc;

use super::{Query, QueryContext, QueryError};
use crate::model::{ElementId, ElementKind, ModelGraphView};

/// Registration key: the subject kind and the query name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: ElementKind,
    pub name: SmolStr,
}

// ============================================================================
// BUILDER
// ============================================================================

/// Mutable registration phase.
#[derive(Default, Debug)]
pub struct QueryRegistryBuilder {
    entries: IndexMap<QueryKey, Arc<dyn Query>>,
}

impl QueryRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `query` for subjects of `kind` under `name`.
    ///
    /// Registering the same (kind, name) again replaces the earlier query but
    /// keeps its original registration position: the last registration wins.
    pub fn register(
        &mut self,
        kind: ElementKind,
        name: impl Into<SmolStr>,
        query: Arc<dyn Query>,
    ) -> &mut Self {
        let key = QueryKey {
            kind,
            name: name.into(),
        };
        tracing::debug!(%kind, name = %key.name, "registering query");
        if self.entries.insert(key.clone(), query).is_some() {
            tracing::debug!(%kind, name = %key.name, "query registration overridden");
        }
        self
    }

    /// Register `query` under its own name for each of its subject kinds.
    pub fn register_query(&mut self, query: Arc<dyn Query>) -> &mut Self {
        let name = SmolStr::new(query.name());
        for kind in query.subject_kinds().to_vec() {
            self.register(kind, name.clone(), Arc::clone(&query));
        }
        self
    }

    /// By-value form of [`register`](Self::register).
    pub fn with(mut self, kind: ElementKind, name: impl Into<SmolStr>, query: Arc<dyn Query>) -> Self {
        self.register(kind, name, query);
        self
    }

    /// By-value form of [`register_query`](Self::register_query).
    pub fn with_query(mut self, query: Arc<dyn Query>) -> Self {
        self.register_query(query);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End the registration phase.
    pub fn freeze(self) -> QueryRegistry {
        let mut by_name: FxHashMap<SmolStr, FxHashMap<ElementKind, Arc<dyn Query>>> =
            FxHashMap::default();
        let mut order = Vec::with_capacity(self.entries.len());
        for (key, query) in self.entries {
            by_name
                .entry(key.name.clone())
                .or_default()
                .insert(key.kind, query);
            order.push(key);
        }
        tracing::debug!(count = order.len(), "query registry frozen");
        QueryRegistry { by_name, order }
    }
}

// ============================================================================
// FROZEN REGISTRY
// ============================================================================

/// Immutable, thread-safe query lookup table.
#[derive(Debug)]
pub struct QueryRegistry {
    by_name: FxHashMap<SmolStr, FxHashMap<ElementKind, Arc<dyn Query>>>,
    order: Vec<QueryKey>,
}

impl QueryRegistry {
    /// Start a registration phase.
    pub fn builder() -> QueryRegistryBuilder {
        QueryRegistryBuilder::new()
    }

    /// Find the query registered for `kind` or its nearest supertype.
    ///
    /// A miss is logged at `error` level and returned as
    /// [`QueryError::NotFound`]; it never panics, in any build profile.
    pub fn resolve(&self, kind: ElementKind, name: &str) -> Result<Arc<dyn Query>, QueryError> {
        let found = self.by_name.get(name).and_then(|by_kind| {
            kind.ancestry().find_map(|candidate| {
                let query = by_kind.get(&candidate)?;
                tracing::trace!(%kind, %candidate, name, "query resolved");
                Some(Arc::clone(query))
            })
        });
        found.ok_or_else(|| {
            tracing::error!(%kind, name, "no query registered");
            QueryError::not_found(kind, name)
        })
    }

    /// Resolve by the subject's kind and run the query.
    pub fn execute(
        &self,
        view: &dyn ModelGraphView,
        subject: &ElementId,
        name: &str,
        context: &QueryContext,
    ) -> Result<Vec<ElementId>, QueryError> {
        let kind = view
            .kind_of(subject)
            .ok_or_else(|| QueryError::UnknownElement(subject.clone()))?;
        let query = self.resolve(kind, name)?;
        Ok(query.execute(view, subject, context))
    }

    /// Run the same query for many subjects in parallel. Results follow
    /// the order of `subjects`.
    pub fn execute_batch(
        &self,
        view: &dyn ModelGraphView,
        subjects: &[ElementId],
        name: &str,
        context: &QueryContext,
    ) -> Vec<Result<Vec<ElementId>, QueryError>> {
        subjects
            .par_iter()
            .map(|subject| self.execute(view, subject, name, context))
            .collect()
    }

    /// Registered keys in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &QueryKey> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
