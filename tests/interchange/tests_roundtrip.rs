//! JSON and YAML round trips.

use crate::helpers::model_fixtures::*;
use crate::helpers::registry::CATALOG;
use capella::Model;
use capella::interchange::{Json, ModelFormat, Yaml, detect_format};
use capella::model::{Attribute, ModelGraphView, relations};
use capella::query::{INHERITED_SIGNALS, QueryContext, REALIZED_PHYSICAL_LINKS};
use rstest::rstest;

/// Everything observable through the view, in store order.
fn fingerprint(model: &Model) -> Vec<String> {
    model
        .iter_elements()
        .map(|e| {
            let relations: Vec<_> = e
                .relations
                .iter()
                .map(|(name, slot)| format!("{name}:{:?}:{:?}:{:?}", slot.cardinality, slot.role, slot.targets))
                .collect();
            format!(
                "{} {} owner={:?} name={:?} summary={:?} description={:?} {:?}",
                e.id,
                e.kind,
                e.owner,
                model.attribute(&e.id, Attribute::Name),
                model.attribute(&e.id, Attribute::Summary),
                model.attribute(&e.id, Attribute::Description),
                relations
            )
        })
        .collect()
}

fn sample() -> Model {
    let mut fixture = signal_model();
    let (s, a, b) = (fixture.s.clone(), fixture.a.clone(), fixture.b.clone());
    set_supers(&mut fixture.model, &s, &[&a, &b, &a, &s]);
    fixture
        .model
        .set_attribute(&s, Attribute::Description, Some("multi\nline: text"))
        .unwrap();

    let mut model = fixture.model;
    let pc = model
        .add_child(
            &fixture.se,
            relations::OWNED_COMPONENTS,
            capella::Element::new("pc", capella::ElementKind::PhysicalComponent),
        )
        .unwrap();
    let p1 = model
        .add_child(
            &pc,
            relations::OWNED_PHYSICAL_LINKS,
            capella::Element::new("P1", capella::ElementKind::PhysicalLink),
        )
        .unwrap();
    let l1 = model
        .add_child(
            &pc,
            relations::OWNED_PHYSICAL_LINKS,
            capella::Element::new("L1", capella::ElementKind::PhysicalLink),
        )
        .unwrap();
    add_realization(&mut model, &p1, "R1", &l1);
    add_realization(&mut model, &p1, "R2", &pc);
    model
}

#[rstest]
#[case("model.json")]
#[case("model.yaml")]
#[case("model.yml")]
fn test_file_roundtrip_preserves_model(#[case] file_name: &str) {
    let model = sample();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(file_name);
    let format = detect_format(&path).unwrap();

    format.write_path(&model, &path).unwrap();
    let loaded = format.read_path(&path).unwrap();
    assert_eq!(fingerprint(&loaded), fingerprint(&model));
}

#[test]
fn test_queries_agree_after_reload() {
    let model = sample();
    let loaded = Json.read(&Json.write(&model).unwrap()).unwrap();
    let context = QueryContext::new();
    for (subject, name) in [("S", INHERITED_SIGNALS), ("P1", REALIZED_PHYSICAL_LINKS)] {
        let subject = subject.into();
        assert_eq!(
            CATALOG.execute(&loaded, &subject, name, &context),
            CATALOG.execute(&model, &subject, name, &context)
        );
    }
}

#[test]
fn test_json_and_yaml_agree() {
    let model = sample();
    let from_json = Json.read(&Json.write(&model).unwrap()).unwrap();
    let from_yaml = Yaml.read(&Yaml.write(&model).unwrap()).unwrap();
    assert_eq!(fingerprint(&from_json), fingerprint(&from_yaml));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Yaml.read_path(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, capella::interchange::InterchangeError::Io(_)));
}
