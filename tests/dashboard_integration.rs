//! End-to-end flows over the public API: seed from a source, browse,
//! edit, and persist, the way the rendering collaborator drives it.

use std::fs;
use std::path::PathBuf;
use testdeck::form::{ScenarioDraft, ScenarioPatch, TestCaseDraft};
use testdeck::model::{NodeId, Priority};
use testdeck::source::{detect_source, FileSource, MockSource, ScenarioSource};
use testdeck::state::DashboardState;
use testdeck::view_state::{
    color_for_priority, color_for_tag, count_test_cases, BadgeColor, ScenarioSummary,
};

fn seeded_session() -> DashboardState {
    let mock = MockSource::new();
    let project = mock.fetch_project().expect("sample project");
    let scenarios = mock.fetch_scenarios().expect("sample scenarios").scenarios;
    DashboardState::with_scenarios(project, scenarios)
}

#[test]
fn seeding_from_the_mock_source_populates_the_tree() {
    let session = seeded_session();

    assert_eq!(session.project().name(), "E-Commerce Web App");
    assert_eq!(session.store().len(), 3);

    let registration = &session.store().scenarios()[0];
    assert_eq!(count_test_cases(registration), 2);
    assert_eq!(registration.priority(), Priority::High);
}

#[test]
fn browsing_expands_and_collapses_rows() {
    let mut session = seeded_session();
    let scenario_id = session.store().scenarios()[0].id().clone();
    let case_id = session.store().scenarios()[0].test_cases()[0].id().clone();

    assert!(session.toggle_scenario(&scenario_id).expect("live scenario"));
    assert!(session.toggle_test_case(&case_id).expect("live test case"));
    assert!(session.is_expanded(&NodeId::Scenario(scenario_id.clone())));

    session.collapse_all();
    assert!(!session.is_expanded(&NodeId::Scenario(scenario_id)));
}

#[test]
fn editing_flows_through_drafts_and_patches() {
    let mut session = seeded_session();

    let new_scenario_id = session
        .add_scenario(ScenarioDraft {
            name: "  Order Cancellation  ".to_string(),
            description: "Cancel before shipment".to_string(),
            priority: None,
        })
        .expect("valid draft")
        .id()
        .clone();

    session
        .add_test_case(
            &new_scenario_id,
            TestCaseDraft {
                name: "Cancel within the hour".to_string(),
                steps: vec!["Open order".to_string(), "".to_string(), "Click Cancel".to_string()],
                expected_result: "Order marked cancelled".to_string(),
                tags: vec!["Smoke".to_string(), "Smoke".to_string()],
            },
        )
        .expect("valid draft");

    session
        .update_scenario(
            &new_scenario_id,
            ScenarioPatch {
                priority: Some(Priority::Low),
                ..ScenarioPatch::default()
            },
        )
        .expect("scenario exists");

    let scenario = session.store().scenario(&new_scenario_id).expect("present");
    assert_eq!(scenario.name(), "Order Cancellation");
    assert_eq!(scenario.priority(), Priority::Low);
    assert_eq!(scenario.test_cases()[0].steps().len(), 2, "Blank step dropped");
    assert_eq!(scenario.test_cases()[0].tags(), ["Smoke"], "Duplicate tag dropped");
}

#[test]
fn duplicate_then_delete_keeps_view_state_consistent() {
    let mut session = seeded_session();
    let original_id = session.store().scenarios()[0].id().clone();

    let copy_id = session
        .duplicate_scenario(&original_id)
        .expect("source exists")
        .id()
        .clone();
    assert_eq!(session.store().len(), 4);

    session.toggle_scenario(&copy_id).expect("copy is live");
    let copy_case_id = session
        .store()
        .scenario(&copy_id)
        .expect("copy present")
        .test_cases()[0]
        .id()
        .clone();
    session.toggle_test_case(&copy_case_id).expect("copied case is live");
    assert_eq!(session.expansion().expanded_count(), 2);

    session.delete_scenario(&copy_id).expect("copy exists");

    assert_eq!(session.store().len(), 3);
    assert_eq!(
        session.expansion().expanded_count(),
        0,
        "Deleting the copy evicts its node and its descendants' nodes"
    );
    assert!(
        session.toggle_scenario(&copy_id).is_err(),
        "The deleted id is now a stale reference"
    );
}

#[test]
fn summaries_and_badges_render_from_the_seeded_tree() {
    let session = seeded_session();
    let registration = &session.store().scenarios()[0];

    let summary = ScenarioSummary::from_scenario(registration);
    assert_eq!(
        summary.display_line(),
        "User Registration Flow [High] v1.2 - 2 test cases (updated 2024-01-15)"
    );

    assert_eq!(color_for_priority(registration.priority()), BadgeColor::Red);
    let tags = registration.test_cases()[0].tags();
    assert_eq!(color_for_tag(&tags[0]), BadgeColor::Blue);
    assert_eq!(color_for_tag(&tags[1]), BadgeColor::Green);
}

#[test]
fn persist_and_reload_round_trips_through_a_file_source() {
    let dir = std::env::temp_dir().join("testdeck_integration_tests");
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("session-round-trip.json");
    let _ = fs::remove_file(&path);

    let mut session = seeded_session();
    session
        .add_scenario(ScenarioDraft {
            name: "Added before persist".to_string(),
            description: "Survives the round trip".to_string(),
            priority: Some(Priority::Low),
        })
        .expect("valid draft");

    let file = FileSource::new(&path);
    file.persist(session.project(), session.store().scenarios())
        .expect("persist succeeds");

    let reloaded_project = file.fetch_project().expect("reload project");
    let reloaded = file.fetch_scenarios().expect("reload scenarios");

    assert_eq!(&reloaded_project, session.project());
    assert_eq!(reloaded.scenarios, session.store().scenarios());
    assert!(reloaded.issues.is_empty());

    let _ = fs::remove_file(&path);
}

#[test]
fn detect_source_drives_the_same_flow_for_both_backends() {
    let mock_backed = detect_source(None);
    assert!(matches!(mock_backed, ScenarioSource::Mock(_)));
    let project = mock_backed.fetch_project().expect("mock project");
    let parsed = mock_backed.fetch_scenarios().expect("mock scenarios");
    let session = DashboardState::with_scenarios(project, parsed.scenarios);
    assert_eq!(session.store().len(), 3);

    let file_backed = detect_source(Some(PathBuf::from("/tmp/testdeck/project.json")));
    assert!(matches!(file_backed, ScenarioSource::File(_)));
}
