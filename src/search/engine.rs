//! Impact preview and bulk replacement.

use rustc_hash::FxHashSet;

use super::{Matcher, SearchError, SearchOptions, SearchScope};
use crate::model::{Attribute, ElementId, Model, ModelGraphView};
use crate::query::distinct;

/// Elements whose attributes match, per attribute, in scope order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactReport {
    pub names: Vec<ElementId>,
    pub summaries: Vec<ElementId>,
    pub descriptions: Vec<ElementId>,
}

impl ImpactReport {
    pub fn for_attribute(&self, attribute: Attribute) -> &[ElementId] {
        match attribute {
            Attribute::Name => &self.names,
            Attribute::Summary => &self.summaries,
            Attribute::Description => &self.descriptions,
        }
    }

    fn for_attribute_mut(&mut self, attribute: Attribute) -> &mut Vec<ElementId> {
        match attribute {
            Attribute::Name => &mut self.names,
            Attribute::Summary => &mut self.summaries,
            Attribute::Description => &mut self.descriptions,
        }
    }

    /// Union of all impacted elements, first occurrence order.
    pub fn impacted(&self) -> Vec<ElementId> {
        distinct(
            self.names
                .iter()
                .chain(&self.summaries)
                .chain(&self.descriptions)
                .cloned()
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.summaries.is_empty() && self.descriptions.is_empty()
    }
}

/// Every element covered by `scope`, pre-order, each at most once.
pub fn scope_elements(
    view: &dyn ModelGraphView,
    scope: &SearchScope,
) -> Result<Vec<ElementId>, SearchError> {
    let roots: &[ElementId] = match scope {
        SearchScope::WholeModel(root) => std::slice::from_ref(root),
        SearchScope::Selection(selected) => selected,
    };
    let mut seen = FxHashSet::default();
    let mut result = Vec::new();
    for root in roots {
        if view.kind_of(root).is_none() {
            return Err(SearchError::UnknownElement(root.clone()));
        }
        let mut stack = vec![root.clone()];
        while let Some(id) = stack.pop() {
            if !seen.insert(id.clone()) {
                continue;
            }
            stack.extend(view.contents(&id).into_iter().rev());
            result.push(id);
        }
    }
    Ok(result)
}

/// Compute which elements a replace-all would touch, without touching them.
pub fn preview(
    view: &dyn ModelGraphView,
    options: &SearchOptions,
) -> Result<ImpactReport, SearchError> {
    let matcher = Matcher::from_options(options)?;
    let elements = scope_elements(view, &options.scope)?;
    let mut report = ImpactReport::default();
    for attribute in options.fields.enabled() {
        let hits = report.for_attribute_mut(attribute);
        hits.extend(
            elements
                .iter()
                .filter(|id| matcher.matches(view.attribute(id, attribute).as_deref()))
                .cloned(),
        );
    }
    tracing::debug!(
        find = %options.find,
        names = report.names.len(),
        summaries = report.summaries.len(),
        descriptions = report.descriptions.len(),
        "search preview"
    );
    Ok(report)
}

/// Replace the find text in every matching attribute in scope.
///
/// Returns the same report [`preview`] would have produced.
pub fn replace_all(model: &mut Model, options: &SearchOptions) -> Result<ImpactReport, SearchError> {
    let matcher = Matcher::from_options(options)?;
    let report = preview(&*model, options)?;
    let mut rewritten = 0usize;
    for attribute in options.fields.enabled() {
        for id in report.for_attribute(attribute) {
            let Some(old) = model.attribute(id, attribute) else {
                continue;
            };
            let new = matcher.replace(&old, &options.replace);
            if *old != *new {
                tracing::debug!(element = %id, ?attribute, %old, %new, "replacing");
                model.set_attribute(id, attribute, Some(new))?;
                rewritten += 1;
            }
        }
    }
    tracing::info!(
        find = %options.find,
        impacted = report.impacted().len(),
        rewritten,
        "replace all"
    );
    Ok(report)
}
