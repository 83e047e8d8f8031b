//! Declarative relation-walk queries.
//!
//! Many business queries are a fixed walk over named relations with a kind
//! filter at each hop. [`TraversalQuery`] describes such a walk as data so it
//! can be registered without writing a new `Query` type.
//!
//! ```ignore
//! let realized = TraversalQuery::new("RealizedLinks", [ElementKind::PhysicalLink])
//!     .step(relations::OWNED_PHYSICAL_LINK_REALIZATIONS)
//!     .step_filtered(relations::TARGET_ELEMENT, ElementKind::PhysicalLink);
//! ```

use smol_str::SmolStr;

use super::{Query, QueryContext, distinct};
use crate::model::{ElementId, ElementKind, ModelGraphView};

/// One hop of a traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub relation: SmolStr,
    /// Keep only targets of this kind (or a subtype).
    pub filter: Option<ElementKind>,
}

/// A query that follows a fixed sequence of relations from the subject.
#[derive(Clone, Debug)]
pub struct TraversalQuery {
    name: SmolStr,
    subject_kinds: Vec<ElementKind>,
    steps: Vec<Step>,
    distinct: bool,
    exclude_subject: bool,
}

impl TraversalQuery {
    pub fn new(name: impl Into<SmolStr>, subject_kinds: impl IntoIterator<Item = ElementKind>) -> Self {
        Self {
            name: name.into(),
            subject_kinds: subject_kinds.into_iter().collect(),
            steps: Vec::new(),
            distinct: false,
            exclude_subject: false,
        }
    }

    /// Follow `relation` from every current element.
    pub fn step(mut self, relation: impl Into<SmolStr>) -> Self {
        self.steps.push(Step {
            relation: relation.into(),
            filter: None,
        });
        self
    }

    /// Follow `relation` and keep only targets of `kind`.
    pub fn step_filtered(mut self, relation: impl Into<SmolStr>, kind: ElementKind) -> Self {
        self.steps.push(Step {
            relation: relation.into(),
            filter: Some(kind),
        });
        self
    }

    /// Drop repeated results, keeping the first occurrence.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Never return the subject itself.
    pub fn exclude_subject(mut self) -> Self {
        self.exclude_subject = true;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    fn accepts(&self, view: &dyn ModelGraphView, subject: &ElementId) -> bool {
        self.subject_kinds
            .iter()
            .any(|kind| view.is_variant(subject, *kind))
    }
}

impl Query for TraversalQuery {
    fn name(&self) -> &str {
        &self.name
    }

    fn subject_kinds(&self) -> &[ElementKind] {
        &self.subject_kinds
    }

    fn execute(
        &self,
        view: &dyn ModelGraphView,
        subject: &ElementId,
        _context: &QueryContext,
    ) -> Vec<ElementId> {
        if !self.accepts(view, subject) {
            return Vec::new();
        }
        let mut frontier = vec![subject.clone()];
        for step in &self.steps {
            frontier = frontier
                .iter()
                .flat_map(|id| view.relation(id, &step.relation))
                .filter(|target| step.filter.is_none_or(|kind| view.is_variant(target, kind)))
                .collect();
        }
        if self.distinct {
            frontier = distinct(frontier);
        }
        if self.exclude_subject {
            frontier.retain(|id| id != subject);
        }
        frontier
    }
}
