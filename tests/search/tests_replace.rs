//! Find/replace over a model.

use crate::helpers::model_fixtures::*;
use capella::model::{Attribute, ModelGraphView};
use capella::search::{SearchError, SearchFields, SearchOptions, SearchScope, preview, replace_all};
use rstest::rstest;

fn described_model() -> SignalModel {
    let mut fixture = signal_model();
    fixture
        .model
        .set_attribute(&fixture.s, Attribute::Summary, Some("speed of the front wheel"))
        .unwrap();
    fixture
        .model
        .set_attribute(&fixture.a, Attribute::Description, Some("Signal base for front wheel sensors"))
        .unwrap();
    fixture
}

// =============================================================================
// PREVIEW
// =============================================================================

#[rstest]
#[case("signal", false, false, false, 3)]
#[case("Signal", true, false, false, 3)]
#[case("signal", true, false, false, 0)]
#[case("*Signal", false, true, false, 3)]
#[case("Base*", false, true, false, 1)]
#[case("Speed", false, true, false, 0)]
#[case("SpeedSignal", false, false, true, 1)]
fn test_name_hits(
    #[case] find: &str,
    #[case] case_sensitive: bool,
    #[case] wildcards: bool,
    #[case] whole_expression: bool,
    #[case] expected: usize,
) {
    let fixture = described_model();
    let options = SearchOptions::new(find, SearchScope::WholeModel(fixture.se.clone()))
        .case_sensitive(case_sensitive)
        .wildcards(wildcards)
        .whole_expression(whole_expression);
    assert_eq!(preview(&fixture.model, &options).unwrap().names.len(), expected);
}

#[test]
fn test_whole_expression_across_fields() {
    let fixture = described_model();
    let options = SearchOptions::new("front wheel", SearchScope::WholeModel(fixture.se.clone()))
        .whole_expression(true)
        .with_fields(SearchFields::all());
    let report = preview(&fixture.model, &options).unwrap();
    assert!(report.names.is_empty());
    assert_eq!(report.summaries, vec![fixture.s.clone()]);
    assert_eq!(report.descriptions, vec![fixture.a.clone()]);
    assert_eq!(report.impacted(), vec![fixture.s.clone(), fixture.a.clone()]);
}

#[test]
fn test_selection_scope_limits_hits() {
    let fixture = described_model();
    let options = SearchOptions::new("signal", SearchScope::Selection(vec![fixture.b.clone()]));
    let report = preview(&fixture.model, &options).unwrap();
    assert_eq!(report.names, vec![fixture.b.clone()]);
}

#[test]
fn test_preview_does_not_modify() {
    let fixture = described_model();
    let options = SearchOptions::new("signal", SearchScope::WholeModel(fixture.se.clone()))
        .with_replace("Message");
    preview(&fixture.model, &options).unwrap();
    assert_eq!(
        fixture.model.attribute(&fixture.s, Attribute::Name).as_deref(),
        Some("SpeedSignal")
    );
}

// =============================================================================
// REPLACE
// =============================================================================

#[test]
fn test_replace_literal_in_names() {
    let mut fixture = described_model();
    let options = SearchOptions::new("signal", SearchScope::WholeModel(fixture.se.clone()))
        .with_replace("Message");
    let report = replace_all(&mut fixture.model, &options).unwrap();
    assert_eq!(report.names.len(), 3);
    let names: Vec<_> = [&fixture.s, &fixture.a, &fixture.b]
        .iter()
        .map(|id| fixture.model.attribute(id, Attribute::Name).unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["SpeedMessage", "BaseMessage", "TimedMessage"]);
    // descriptions were not enabled
    assert_eq!(
        fixture.model.attribute(&fixture.a, Attribute::Description).as_deref(),
        Some("Signal base for front wheel sensors")
    );
}

#[test]
fn test_replace_wildcard_rewrites_whole_value() {
    let mut fixture = described_model();
    let options = SearchOptions::new("Base*", SearchScope::WholeModel(fixture.se.clone()))
        .wildcards(true)
        .with_replace("Root");
    replace_all(&mut fixture.model, &options).unwrap();
    assert_eq!(fixture.model.attribute(&fixture.a, Attribute::Name).as_deref(), Some("Root"));
    assert_eq!(
        fixture.model.attribute(&fixture.s, Attribute::Name).as_deref(),
        Some("SpeedSignal")
    );
}

#[test]
fn test_replace_whole_expression_in_descriptions() {
    let mut fixture = described_model();
    let options = SearchOptions::new("front wheel", SearchScope::WholeModel(fixture.se.clone()))
        .whole_expression(true)
        .with_fields(SearchFields {
            name: false,
            summary: false,
            description: true,
        })
        .with_replace("rear axle");
    replace_all(&mut fixture.model, &options).unwrap();
    assert_eq!(
        fixture.model.attribute(&fixture.a, Attribute::Description).as_deref(),
        Some("Signal base for rear axle sensors")
    );
    assert_eq!(
        fixture.model.attribute(&fixture.s, Attribute::Summary).as_deref(),
        Some("speed of the front wheel")
    );
}

#[test]
fn test_replace_unknown_scope_root() {
    let mut fixture = described_model();
    let options = SearchOptions::new("x", SearchScope::Selection(vec!["ghost".into()]));
    assert!(matches!(
        replace_all(&mut fixture.model, &options),
        Err(SearchError::UnknownElement(_))
    ));
}
