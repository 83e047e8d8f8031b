//! Inherited signal query tests.

use crate::helpers::model_fixtures::*;
use crate::helpers::registry::CATALOG;
use capella::model::{ElementId, ElementKind, relations};
use capella::query::{INHERITED_SIGNALS, InheritedSignals, Query, QueryContext, roots};

fn inherited(model: &capella::Model, signal: &ElementId) -> Vec<ElementId> {
    CATALOG
        .execute(model, signal, INHERITED_SIGNALS, &QueryContext::new())
        .unwrap()
}

// =============================================================================
// INHERITED SIGNALS - DIRECT ROOT
// =============================================================================

#[test]
fn test_dedup_and_self_removal() {
    let mut fixture = signal_model();
    let (s, a, b) = (fixture.s.clone(), fixture.a.clone(), fixture.b.clone());
    set_supers(&mut fixture.model, &s, &[&a, &b, &a, &s]);
    assert_eq!(inherited(&fixture.model, &s), vec![a, b]);
}

#[test]
fn test_self_edge_alone_gives_empty() {
    let mut fixture = signal_model();
    let s = fixture.s.clone();
    set_supers(&mut fixture.model, &s, &[&s]);
    assert!(inherited(&fixture.model, &s).is_empty());
}

#[test]
fn test_duplicate_kept_at_first_position() {
    let mut fixture = signal_model();
    let (s, a, b) = (fixture.s.clone(), fixture.a.clone(), fixture.b.clone());
    set_supers(&mut fixture.model, &s, &[&b, &a, &b]);
    assert_eq!(inherited(&fixture.model, &s), vec![b, a]);
}

#[test]
fn test_only_direct_supers() {
    let mut fixture = signal_model();
    let (s, a, b) = (fixture.s.clone(), fixture.a.clone(), fixture.b.clone());
    set_supers(&mut fixture.model, &s, &[&b]);
    set_supers(&mut fixture.model, &b, &[&a]);
    assert_eq!(inherited(&fixture.model, &s), vec![b]);
}

// =============================================================================
// INHERITED SIGNALS - ROOT RESOLUTION
// =============================================================================

#[test]
fn test_no_root_gives_empty_despite_supers() {
    let fixture = reuse_model();
    assert_eq!(roots::resolve_system_engineering(&fixture.model, &fixture.s), None);
    assert!(inherited(&fixture.model, &fixture.s).is_empty());
}

#[test]
fn test_root_through_reuse_link() {
    let mut fixture = reuse_model();
    reuse_shared(&mut fixture);
    assert_eq!(
        roots::resolve_system_engineering(&fixture.model, &fixture.s),
        Some(fixture.se.clone())
    );
    assert_eq!(inherited(&fixture.model, &fixture.s), vec![fixture.a.clone()]);
}

#[test]
fn test_reuse_links_that_resolve_nowhere() {
    let mut fixture = reuse_model();
    let stray = fixture.model.add_element(ElementKind::ReuseLink);
    fixture
        .model
        .link(&fixture.shared, relations::REUSE_LINKS, &stray)
        .unwrap();
    assert!(inherited(&fixture.model, &fixture.s).is_empty());
}

#[test]
fn test_orphan_signal_gives_empty() {
    let mut fixture = signal_model();
    let orphan = fixture.model.add_element(ElementKind::Signal);
    let a = fixture.a.clone();
    set_supers(&mut fixture.model, &orphan, &[&a]);
    assert!(InheritedSignals
        .execute(&fixture.model, &orphan, &QueryContext::new())
        .is_empty());
}

// =============================================================================
// PERMISSIVE SUBJECTS
// =============================================================================

#[test]
fn test_non_signal_subjects_are_empty() {
    let mut fixture = signal_model();
    let class = fixture
        .model
        .add_child(
            &fixture.pkg,
            relations::OWNED_CLASSES,
            capella::Element::new("C", ElementKind::Class),
        )
        .unwrap();
    let a = fixture.a.clone();
    set_supers(&mut fixture.model, &class, &[&a]);
    for subject in [&class, &fixture.pkg, &fixture.se] {
        assert!(InheritedSignals
            .execute(&fixture.model, subject, &QueryContext::new())
            .is_empty());
    }
}

#[test]
fn test_context_flags_do_not_change_results() {
    let mut fixture = signal_model();
    let (s, a) = (fixture.s.clone(), fixture.a.clone());
    set_supers(&mut fixture.model, &s, &[&a]);
    let context = QueryContext::new().with(capella::query::INCLUDE_GENERATED, true);
    assert_eq!(
        InheritedSignals.execute(&fixture.model, &s, &context),
        InheritedSignals.execute(&fixture.model, &s, &QueryContext::new())
    );
}
