//! Standalone in-memory model store.
//!
//! The store keeps elements by ID, with relations held on the source element
//! as named slots. Containment edges additionally set the child's `owner`,
//! which is what upward walks (root resolution, scope computation) follow.
//!
//! ```text
//! Model
//! └── elements: IndexMap<ElementId, Element>  (preserves insertion order)
//!     └── relations: IndexMap<name, RelationSlot { cardinality, role, targets }>
//! ```

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

use super::{Attribute, Cardinality, Element, ElementId, ElementKind, ModelError, RelationRole, RelationSlot};

/// A complete model graph owned in memory.
#[derive(Clone, Debug, Default)]
pub struct Model {
    elements: IndexMap<ElementId, Element>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction ────────────────────────────────────────────────

    /// Add a fresh root element with a generated ID.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::generate();
        self.elements.insert(id.clone(), Element::new(id.clone(), kind));
        id
    }

    /// Insert a prepared element as a root.
    ///
    /// The element's reference relations are kept as given. Its `owner` and
    /// the targets of its containment slots are cleared; containment is only
    /// established through [`Model::add_child`] and [`Model::attach`].
    pub fn insert(&mut self, mut element: Element) -> Result<ElementId, ModelError> {
        if self.elements.contains_key(&element.id) {
            return Err(ModelError::DuplicateElement(element.id));
        }
        element.owner = None;
        for slot in element.relations.values_mut() {
            if slot.is_containment() {
                slot.targets.clear();
            }
        }
        let id = element.id.clone();
        self.elements.insert(id.clone(), element);
        Ok(id)
    }

    /// Insert `child` and contain it in the many-valued relation `relation` of `owner`.
    pub fn add_child(
        &mut self,
        owner: &ElementId,
        relation: &str,
        child: Element,
    ) -> Result<ElementId, ModelError> {
        if !self.elements.contains_key(owner) {
            return Err(ModelError::unknown(owner));
        }
        let id = self.insert(child)?;
        if let Err(err) = self.attach(owner, relation, Cardinality::Many, &id) {
            self.elements.shift_remove(&id);
            return Err(err);
        }
        Ok(id)
    }

    /// Contain an existing root element under `owner`.
    ///
    /// For a single-valued relation, a previously contained child is removed
    /// together with its subtree.
    pub fn attach(
        &mut self,
        owner: &ElementId,
        relation: &str,
        cardinality: Cardinality,
        child: &ElementId,
    ) -> Result<(), ModelError> {
        let child_element = self.elements.get(child).ok_or_else(|| ModelError::unknown(child))?;
        if let Some(current) = &child_element.owner {
            return Err(ModelError::AlreadyContained {
                child: child.clone(),
                owner: current.clone(),
            });
        }
        if self.ancestors_inclusive(owner).any(|a| a == child) {
            return Err(ModelError::ContainmentCycle {
                owner: owner.clone(),
                child: child.clone(),
            });
        }

        let slot = self.slot_mut(owner, relation, cardinality, RelationRole::Containment)?;
        let replaced = match cardinality {
            Cardinality::Single => std::mem::replace(&mut slot.targets, vec![child.clone()]),
            Cardinality::Many => {
                slot.targets.push(child.clone());
                Vec::new()
            }
        };
        if let Some(child_element) = self.elements.get_mut(child) {
            child_element.owner = Some(owner.clone());
        }
        for old in replaced {
            if let Some(old_element) = self.elements.get_mut(&old) {
                old_element.owner = None;
            }
            self.remove(&old)?;
        }
        Ok(())
    }

    /// Append `target` to the many-valued reference `relation` of `source`.
    ///
    /// Duplicates and self references are stored as given.
    pub fn link(
        &mut self,
        source: &ElementId,
        relation: &str,
        target: &ElementId,
    ) -> Result<(), ModelError> {
        self.require(target)?;
        self.slot_mut(source, relation, Cardinality::Many, RelationRole::Reference)?
            .targets
            .push(target.clone());
        Ok(())
    }

    /// Set or clear the single-valued reference `relation` of `source`.
    pub fn set_reference(
        &mut self,
        source: &ElementId,
        relation: &str,
        target: Option<&ElementId>,
    ) -> Result<(), ModelError> {
        if let Some(target) = target {
            self.require(target)?;
        }
        let slot = self.slot_mut(source, relation, Cardinality::Single, RelationRole::Reference)?;
        slot.targets = target.cloned().into_iter().collect();
        Ok(())
    }

    /// Remove every occurrence of `target` from `relation` of `source`.
    ///
    /// Unlinking a contained child detaches it; it becomes a root.
    pub fn unlink(
        &mut self,
        source: &ElementId,
        relation: &str,
        target: &ElementId,
    ) -> Result<usize, ModelError> {
        let element = self
            .elements
            .get_mut(source)
            .ok_or_else(|| ModelError::unknown(source))?;
        let Some(slot) = element.relations.get_mut(relation) else {
            return Ok(0);
        };
        let before = slot.targets.len();
        slot.targets.retain(|t| t != target);
        let removed = before - slot.targets.len();
        let detach = removed > 0 && slot.is_containment();
        if detach {
            if let Some(child) = self.elements.get_mut(target) {
                child.owner = None;
            }
        }
        Ok(removed)
    }

    /// Overwrite a text attribute.
    pub fn set_attribute(
        &mut self,
        id: &ElementId,
        attribute: Attribute,
        value: Option<impl Into<Arc<str>>>,
    ) -> Result<(), ModelError> {
        let element = self.elements.get_mut(id).ok_or_else(|| ModelError::unknown(id))?;
        element.set_attribute(attribute, value.map(Into::into));
        Ok(())
    }

    /// Remove an element, its containment subtree, and every reference to
    /// any removed element. Returns the removed IDs in pre-order.
    pub fn remove(&mut self, id: &ElementId) -> Result<Vec<ElementId>, ModelError> {
        self.require(id)?;
        let removed = self.all_contents(id);
        let gone: FxHashSet<&ElementId> = removed.iter().collect();

        for element in self.elements.values_mut() {
            if gone.contains(&element.id) {
                continue;
            }
            for slot in element.relations.values_mut() {
                slot.targets.retain(|t| !gone.contains(t));
            }
        }
        for removed_id in &removed {
            self.elements.shift_remove(removed_id);
        }
        tracing::debug!(root = %id, count = removed.len(), "removed element subtree");
        Ok(removed)
    }

    // ── Access ───────────────────────────────────────────────────────

    /// Get an element by ID.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over all elements in insertion order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Iterate over elements without an owner.
    pub fn iter_roots(&self) -> impl Iterator<Item = &Element> {
        self.elements.values().filter(|e| e.owner.is_none())
    }

    /// Find elements by name.
    pub fn find_by_name(&self, name: &str) -> Vec<&Element> {
        self.elements
            .values()
            .filter(|e| e.name.as_deref() == Some(name))
            .collect()
    }

    /// Find all elements whose kind is `kind` or a subtype of it.
    pub fn find_by_kind(&self, kind: ElementKind) -> Vec<&Element> {
        self.elements.values().filter(|e| e.kind.is_a(kind)).collect()
    }

    /// The element and everything it transitively contains, in pre-order.
    pub fn all_contents(&self, id: &ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![id.clone()];
        let mut seen = FxHashSet::default();
        while let Some(current) = stack.pop() {
            let Some(element) = self.elements.get(&current) else {
                continue;
            };
            if !seen.insert(current.clone()) {
                continue;
            }
            let children: Vec<_> = element.contained().cloned().collect();
            stack.extend(children.into_iter().rev());
            result.push(current);
        }
        result
    }

    // ── Internals ───────────────────────────────────────────────────

    fn require(&self, id: &ElementId) -> Result<(), ModelError> {
        if self.elements.contains_key(id) {
            Ok(())
        } else {
            Err(ModelError::unknown(id))
        }
    }

    fn ancestors_inclusive<'a>(&'a self, id: &'a ElementId) -> impl Iterator<Item = &'a ElementId> {
        std::iter::successors(Some(id), move |current| {
            self.elements.get(*current).and_then(|e| e.owner.as_ref())
        })
    }

    fn slot_mut(
        &mut self,
        id: &ElementId,
        relation: &str,
        cardinality: Cardinality,
        role: RelationRole,
    ) -> Result<&mut RelationSlot, ModelError> {
        let element = self.elements.get_mut(id).ok_or_else(|| ModelError::unknown(id))?;
        let slot = element
            .relations
            .entry(relation.into())
            .or_insert_with(|| RelationSlot::new(cardinality, role));
        if slot.cardinality != cardinality || slot.role != role {
            return Err(ModelError::RelationMismatch {
                element: id.clone(),
                relation: relation.to_string(),
                expected_cardinality: cardinality,
                expected_role: role,
                actual_cardinality: slot.cardinality,
                actual_role: slot.role,
            });
        }
        Ok(slot)
    }
}
