//! Elements, relation slots, and text attributes.

use indexmap::IndexMap;
use smol_str::SmolStr;
use std::sync::Arc;

use super::{ElementId, ElementKind};

// ============================================================================
// RELATIONS
// ============================================================================

/// How many targets a relation slot may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum Cardinality {
    Single,
    Many,
}

/// Whether a relation owns its targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(rename_all = "lowercase"))]
pub enum RelationRole {
    /// The owner exclusively owns its targets; they are destroyed with it.
    Containment,
    /// A non-owning cross-reference.
    Reference,
}

/// The targets of one named relation on one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationSlot {
    pub cardinality: Cardinality,
    pub role: RelationRole,
    /// Targets in insertion order. Reference slots may repeat a target.
    pub targets: Vec<ElementId>,
}

impl RelationSlot {
    pub fn new(cardinality: Cardinality, role: RelationRole) -> Self {
        Self {
            cardinality,
            role,
            targets: Vec::new(),
        }
    }

    pub fn is_containment(&self) -> bool {
        self.role == RelationRole::Containment
    }
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

/// Text attributes searched and rewritten by find/replace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Summary,
    Description,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [Self::Name, Self::Summary, Self::Description];

    /// Whether elements of `kind` expose this attribute.
    pub fn applies_to(self, kind: ElementKind) -> bool {
        match self {
            Self::Name => kind.is_named(),
            Self::Summary | Self::Description => kind.is_capella_element(),
        }
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// A model element with its attributes and outgoing relations.
#[derive(Clone, Debug)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// The metaclass.
    pub kind: ElementKind,
    pub name: Option<Arc<str>>,
    pub summary: Option<Arc<str>>,
    pub description: Option<Arc<str>>,
    /// The owning element's ID (None for root elements). Maintained by the store.
    pub owner: Option<ElementId>,
    /// Outgoing relations by name, in first-use order.
    pub relations: IndexMap<SmolStr, RelationSlot>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            summary: None,
            description: None,
            owner: None,
            relations: IndexMap::new(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the summary.
    pub fn with_summary(mut self, summary: impl Into<Arc<str>>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<Arc<str>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Read a text attribute, ignoring kind gating.
    pub fn attribute(&self, attribute: Attribute) -> Option<&Arc<str>> {
        match attribute {
            Attribute::Name => self.name.as_ref(),
            Attribute::Summary => self.summary.as_ref(),
            Attribute::Description => self.description.as_ref(),
        }
    }

    /// Overwrite a text attribute.
    pub fn set_attribute(&mut self, attribute: Attribute, value: Option<Arc<str>>) {
        let slot = match attribute {
            Attribute::Name => &mut self.name,
            Attribute::Summary => &mut self.summary,
            Attribute::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Targets of a relation, empty when the relation was never set.
    pub fn targets(&self, relation: &str) -> &[ElementId] {
        self.relations
            .get(relation)
            .map_or(&[], |slot| slot.targets.as_slice())
    }

    /// Direct children over every containment relation, in relation order.
    pub fn contained(&self) -> impl Iterator<Item = &ElementId> {
        self.relations
            .values()
            .filter(|slot| slot.is_containment())
            .flat_map(|slot| slot.targets.iter())
    }
}
