//! Model store editing tests.

use crate::helpers::model_fixtures::*;
use capella::model::{Attribute, Cardinality, Element, ElementKind, ModelError, relations};
use capella::{ElementId, ModelGraphView};

// =============================================================================
// CONTAINMENT
// =============================================================================

#[test]
fn test_remove_package_drops_signals_and_references_to_them() {
    let mut fixture = signal_model();
    let outside = fixture.model.add_element(ElementKind::Signal);
    let a = fixture.a.clone();
    set_supers(&mut fixture.model, &outside, &[&a, &a]);

    let removed = fixture.model.remove(&fixture.pkg).unwrap();
    assert_eq!(removed.len(), 4);
    assert!(!fixture.model.contains(&fixture.s));
    assert!(fixture.model.relation(&outside, relations::SUPER).is_empty());
    assert!(fixture.model.contents(&fixture.se).is_empty());
}

#[test]
fn test_contents_and_owner_agree() {
    let fixture = signal_model();
    for child in fixture.model.contents(&fixture.pkg) {
        assert_eq!(fixture.model.owner(&child), Some(fixture.pkg.clone()));
    }
    assert_eq!(
        fixture.model.all_contents(&fixture.se),
        vec![
            fixture.se.clone(),
            fixture.pkg.clone(),
            fixture.s.clone(),
            fixture.a.clone(),
            fixture.b.clone()
        ]
    );
}

#[test]
fn test_moving_requires_detaching_first() {
    let mut fixture = signal_model();
    let other = fixture.model.add_element(ElementKind::DataPkg);
    let err = fixture
        .model
        .attach(&other, relations::OWNED_SIGNALS, Cardinality::Many, &fixture.s)
        .unwrap_err();
    assert!(matches!(err, ModelError::AlreadyContained { .. }));

    fixture.model.unlink(&fixture.pkg, relations::OWNED_SIGNALS, &fixture.s).unwrap();
    fixture
        .model
        .attach(&other, relations::OWNED_SIGNALS, Cardinality::Many, &fixture.s)
        .unwrap();
    assert_eq!(fixture.model.owner(&fixture.s), Some(other));
}

#[test]
fn test_owning_an_ancestor_is_a_cycle() {
    let mut fixture = signal_model();
    fixture.model.unlink(&fixture.se, relations::OWNED_DATA_PKGS, &fixture.pkg).unwrap();
    let err = fixture
        .model
        .attach(&fixture.s, relations::OWNED_DATA_PKGS, Cardinality::Many, &fixture.pkg)
        .unwrap_err();
    assert!(matches!(err, ModelError::ContainmentCycle { .. }));
}

// =============================================================================
// REFERENCES AND ATTRIBUTES
// =============================================================================

#[test]
fn test_relation_shape_cannot_change() {
    let mut fixture = signal_model();
    let (s, a) = (fixture.s.clone(), fixture.a.clone());
    set_supers(&mut fixture.model, &s, &[&a]);
    let err = fixture
        .model
        .set_reference(&s, relations::SUPER, Some(&a))
        .unwrap_err();
    assert!(matches!(err, ModelError::RelationMismatch { .. }));
}

#[test]
fn test_link_to_missing_target() {
    let mut fixture = signal_model();
    let err = fixture
        .model
        .link(&fixture.s, relations::SUPER, &ElementId::from("ghost"))
        .unwrap_err();
    assert_eq!(err, ModelError::UnknownElement(ElementId::from("ghost")));
}

#[test]
fn test_attributes_through_view() {
    let mut fixture = signal_model();
    fixture
        .model
        .set_attribute(&fixture.s, Attribute::Summary, Some("km/h"))
        .unwrap();
    assert_eq!(
        fixture.model.attribute(&fixture.s, Attribute::Summary).as_deref(),
        Some("km/h")
    );
    fixture
        .model
        .set_attribute(&fixture.s, Attribute::Summary, None::<&str>)
        .unwrap();
    assert_eq!(fixture.model.attribute(&fixture.s, Attribute::Summary), None);
}

#[test]
fn test_generated_ids_are_unique() {
    let mut model = capella::Model::new();
    let first = model.add_element(ElementKind::Class);
    let second = model.insert(Element::new(ElementId::generate(), ElementKind::Class)).unwrap();
    assert_ne!(first, second);
    assert_eq!(model.find_by_kind(ElementKind::Classifier).len(), 2);
}
