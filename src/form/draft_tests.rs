//! Unit tests for draft normalization.

use super::*;

fn raw_test_case() -> TestCaseDraft {
    TestCaseDraft {
        name: "  Login  ".to_string(),
        steps: vec!["".to_string(), "  Click".to_string(), " ".to_string()],
        expected_result: "ok".to_string(),
        tags: vec!["A".to_string(), "a".to_string(), "A".to_string()],
    }
}

// ===== Test case normalization =====

#[test]
fn test_case_draft_is_trimmed_and_compacted() {
    let draft = normalize_test_case_draft(raw_test_case()).expect("valid draft");

    assert_eq!(draft.name, "Login");
    assert_eq!(draft.steps, ["Click"], "Blank steps dropped, remaining trimmed");
    assert_eq!(draft.expected_result, "ok");
    assert_eq!(
        draft.tags,
        ["A", "a"],
        "Tags de-duplicate case-sensitively in first-seen order"
    );
}

#[test]
fn test_case_draft_with_nothing_usable_is_rejected() {
    let draft = TestCaseDraft {
        name: String::new(),
        steps: vec![],
        tags: vec![],
        expected_result: String::new(),
    };
    assert!(
        normalize_test_case_draft(draft).is_err(),
        "Fully empty draft must fail validation"
    );
}

#[test]
fn test_case_draft_empty_name_reports_the_name_field() {
    let mut draft = raw_test_case();
    draft.name = "   ".to_string();
    assert_eq!(
        normalize_test_case_draft(draft),
        Err(crate::model::ValidationError::EmptyName)
    );
}

#[test]
fn test_case_draft_empty_expected_result_reports_that_field() {
    let mut draft = raw_test_case();
    draft.expected_result = " ".to_string();
    assert_eq!(
        normalize_test_case_draft(draft),
        Err(crate::model::ValidationError::EmptyExpectedResult)
    );
}

#[test]
fn test_case_draft_all_blank_steps_reports_no_steps() {
    let mut draft = raw_test_case();
    draft.steps = vec!["  ".to_string(), "".to_string()];
    assert_eq!(
        normalize_test_case_draft(draft),
        Err(crate::model::ValidationError::NoSteps)
    );
}

#[test]
fn test_case_tags_are_trimmed_before_dedup() {
    let mut draft = raw_test_case();
    draft.tags = vec![" Smoke ".to_string(), "Smoke".to_string()];
    let normalized = normalize_test_case_draft(draft).expect("valid draft");
    assert_eq!(normalized.tags, ["Smoke"], "Trimmed duplicates collapse to one tag");
}

#[test]
fn test_case_normalization_is_idempotent() {
    let once = normalize_test_case_draft(raw_test_case()).expect("valid draft");
    let twice = normalize_test_case_draft(once.clone()).expect("still valid");
    assert_eq!(once, twice, "Normalizing a normalized draft must not change it");
}

// ===== Scenario normalization =====

#[test]
fn scenario_draft_is_trimmed() {
    let draft = normalize_scenario_draft(ScenarioDraft {
        name: "  Checkout  ".to_string(),
        description: " Cart to confirmation ".to_string(),
        priority: Some(crate::model::Priority::High),
    })
    .expect("valid draft");

    assert_eq!(draft.name, "Checkout");
    assert_eq!(draft.description, "Cart to confirmation");
    assert_eq!(draft.priority, Some(crate::model::Priority::High));
}

#[test]
fn scenario_draft_defaults_priority_to_medium() {
    let draft = normalize_scenario_draft(ScenarioDraft {
        name: "Checkout".to_string(),
        description: "Cart to confirmation".to_string(),
        priority: None,
    })
    .expect("valid draft");

    assert_eq!(draft.priority, Some(crate::model::Priority::Medium));
}

#[test]
fn scenario_draft_rejects_blank_name_and_description() {
    let blank_name = ScenarioDraft {
        name: " ".to_string(),
        description: "desc".to_string(),
        priority: None,
    };
    assert_eq!(
        normalize_scenario_draft(blank_name),
        Err(crate::model::ValidationError::EmptyName)
    );

    let blank_description = ScenarioDraft {
        name: "Checkout".to_string(),
        description: "".to_string(),
        priority: None,
    };
    assert_eq!(
        normalize_scenario_draft(blank_description),
        Err(crate::model::ValidationError::EmptyDescription)
    );
}

// ===== Data set normalization =====

#[test]
fn data_set_draft_trims_name_and_keeps_values() {
    let mut inputs = crate::model::ValueMap::new();
    inputs.insert("email".to_string(), crate::model::ScalarValue::Text("a@b.c".to_string()));

    let draft = normalize_data_set_draft(DataSetDraft {
        name: " Valid registration ".to_string(),
        input_values: inputs.clone(),
        expected_output: crate::model::ValueMap::new(),
    })
    .expect("valid draft");

    assert_eq!(draft.name, "Valid registration");
    assert_eq!(draft.input_values, inputs);
}

#[test]
fn data_set_draft_rejects_blank_name() {
    let draft = DataSetDraft {
        name: "".to_string(),
        input_values: crate::model::ValueMap::new(),
        expected_output: crate::model::ValueMap::new(),
    };
    assert_eq!(
        normalize_data_set_draft(draft),
        Err(crate::model::ValidationError::EmptyName)
    );
}
