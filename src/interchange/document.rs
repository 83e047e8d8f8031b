//! Serializable form of a [`Model`].
//!
//! A document is a flat list of element records in store order. Containment
//! is written as ordinary relation entries and replayed after every element
//! exists, so records may appear in any order relative to their owners.

use serde::{Deserialize, Serialize};

use super::InterchangeError;
use crate::model::{Cardinality, Element, ElementId, ElementKind, Model, RelationRole, RelationSlot};

/// A whole model as written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelDocument {
    pub elements: Vec<ElementRecord>,
}

/// One element and its outgoing relations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: ElementId,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationRecord>,
}

/// One named relation slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub name: String,
    pub cardinality: Cardinality,
    pub role: RelationRole,
    #[serde(default)]
    pub targets: Vec<ElementId>,
}

impl ModelDocument {
    /// Capture every element of `model`, in store order.
    pub fn from_model(model: &Model) -> Self {
        let elements = model
            .iter_elements()
            .map(|element| ElementRecord {
                id: element.id.clone(),
                kind: element.kind.name().to_string(),
                name: element.name.as_deref().map(str::to_string),
                summary: element.summary.as_deref().map(str::to_string),
                description: element.description.as_deref().map(str::to_string),
                owner: element.owner.clone(),
                relations: element
                    .relations
                    .iter()
                    .map(|(name, slot)| RelationRecord {
                        name: name.to_string(),
                        cardinality: slot.cardinality,
                        role: slot.role,
                        targets: slot.targets.clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { elements }
    }

    /// Rebuild a model store.
    ///
    /// Fails on unknown kinds, duplicate ids, dangling targets, single slots
    /// with several targets, and recorded owners that disagree with the
    /// containment edges.
    pub fn into_model(self) -> Result<Model, InterchangeError> {
        let mut model = Model::new();

        // ── Pass 1: elements and reference slots ──
        for record in &self.elements {
            let kind: ElementKind = record
                .kind
                .parse()
                .map_err(|_| InterchangeError::unknown_kind(record.id.as_str(), &record.kind))?;
            let mut element = Element::new(record.id.clone(), kind);
            element.name = record.name.as_deref().map(Into::into);
            element.summary = record.summary.as_deref().map(Into::into);
            element.description = record.description.as_deref().map(Into::into);
            for relation in &record.relations {
                if relation.cardinality == Cardinality::Single && relation.targets.len() > 1 {
                    return Err(InterchangeError::invalid(format!(
                        "single relation '{}' on {} has {} targets",
                        relation.name,
                        record.id,
                        relation.targets.len()
                    )));
                }
                let mut slot = RelationSlot::new(relation.cardinality, relation.role);
                slot.targets = relation.targets.clone();
                element.relations.insert(relation.name.as_str().into(), slot);
            }
            model.insert(element)?;
        }

        // ── Pass 2: containment edges and reference targets ──
        for record in &self.elements {
            for relation in &record.relations {
                match relation.role {
                    RelationRole::Containment => {
                        for child in &relation.targets {
                            model.attach(&record.id, &relation.name, relation.cardinality, child)?;
                        }
                    }
                    RelationRole::Reference => {
                        if let Some(missing) = relation.targets.iter().find(|t| !model.contains(t)) {
                            return Err(InterchangeError::invalid(format!(
                                "relation '{}' on {} targets unknown element {}",
                                relation.name, record.id, missing
                            )));
                        }
                    }
                }
            }
        }

        // ── Pass 3: recorded owners must agree ──
        for record in &self.elements {
            let actual = model.get(&record.id).and_then(|e| e.owner.as_ref());
            if actual != record.owner.as_ref() {
                return Err(InterchangeError::invalid(format!(
                    "element {} records owner {:?} but is contained by {:?}",
                    record.id,
                    record.owner.as_ref().map(ElementId::as_str),
                    actual.map(ElementId::as_str)
                )));
            }
        }

        tracing::debug!(elements = model.element_count(), "model document loaded");
        Ok(model)
    }
}
