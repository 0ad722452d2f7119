//! Summary rows for list rendering.
//!
//! Read-only snapshots computed on demand from the tree store. The
//! collapsed list view renders these; expanding a row is when the
//! rendering collaborator reaches into the full entity.

use crate::model::{Priority, Scenario, ScenarioId, TestCase, TestCaseId, ValueMap};
use chrono::{DateTime, Utc};

/// Number of test cases a scenario owns.
pub fn count_test_cases(scenario: &Scenario) -> usize {
    scenario.test_cases().len()
}

/// Number of data sets a test case owns.
pub fn count_data_sets(case: &TestCase) -> usize {
    case.data_sets().len()
}

/// Render a data-set mapping as `key: value, key: value` for table
/// cells and tooltips.
pub fn format_values(values: &ValueMap) -> String {
    values
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ===== ScenarioSummary =====

/// Summary metadata for a scenario row in the collapsed list.
#[derive(Debug, Clone)]
pub struct ScenarioSummary {
    id: ScenarioId,
    name: String,
    priority: Priority,
    version: String,
    last_updated: DateTime<Utc>,
    test_case_count: usize,
}

impl ScenarioSummary {
    /// Snapshot a scenario for display.
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id().clone(),
            name: scenario.name().to_string(),
            priority: scenario.priority(),
            version: scenario.version().to_string(),
            last_updated: scenario.last_updated(),
            test_case_count: count_test_cases(scenario),
        }
    }

    /// Scenario identifier.
    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Priority badge value.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Last-updated timestamp.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Number of owned test cases.
    pub fn test_case_count(&self) -> usize {
        self.test_case_count
    }

    /// One-line rendering for the list view.
    pub fn display_line(&self) -> String {
        format!(
            "{} [{}] {} - {} test cases (updated {})",
            self.name,
            self.priority,
            self.version,
            self.test_case_count,
            self.last_updated.format("%Y-%m-%d"),
        )
    }
}

// ===== TestCaseSummary =====

/// Summary metadata for a test case row in the collapsed list.
#[derive(Debug, Clone)]
pub struct TestCaseSummary {
    id: TestCaseId,
    name: String,
    step_count: usize,
    data_set_count: usize,
    tags: Vec<String>,
    version: String,
}

impl TestCaseSummary {
    /// Snapshot a test case for display.
    pub fn from_case(case: &TestCase) -> Self {
        Self {
            id: case.id().clone(),
            name: case.name().to_string(),
            step_count: case.steps().len(),
            data_set_count: count_data_sets(case),
            tags: case.tags().to_vec(),
            version: case.version().to_string(),
        }
    }

    /// Test case identifier.
    pub fn id(&self) -> &TestCaseId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of steps.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Number of owned data sets.
    pub fn data_set_count(&self) -> usize {
        self.data_set_count
    }

    /// Tags in display order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// One-line rendering for the list view.
    pub fn display_line(&self) -> String {
        let tags = if self.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", self.tags.join(", "))
        };
        format!(
            "{} {} - {} steps, {} data sets{}",
            self.name, self.version, self.step_count, self.data_set_count, tags,
        )
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataSetId, ScalarValue, TestDataSet};

    fn make_timestamp() -> DateTime<Utc> {
        "2024-01-15T09:30:00Z".parse().expect("valid timestamp")
    }

    fn make_scenario_with_cases(case_count: usize) -> Scenario {
        let mut scenario = Scenario::new(
            ScenarioId::new("scn-001").expect("valid ID"),
            "User Registration Flow",
            "Complete user registration process including email verification",
            Priority::High,
            "v1.2",
            make_timestamp(),
        )
        .expect("valid scenario");
        for i in 0..case_count {
            scenario.push_test_case(make_case(&format!("Case {i}")));
        }
        scenario
    }

    fn make_case(name: &str) -> TestCase {
        TestCase::new(
            TestCaseId::new(format!("tc-{name}")).expect("valid ID"),
            name,
            vec!["Open page".to_string(), "Submit".to_string()],
            "ok",
            vec!["Regression".to_string(), "Smoke".to_string()],
            "v1.2",
            make_timestamp(),
        )
        .expect("valid test case")
    }

    #[test]
    fn counts_follow_the_owned_collections() {
        let scenario = make_scenario_with_cases(8);
        assert_eq!(count_test_cases(&scenario), 8);

        let mut case = make_case("Register");
        assert_eq!(count_data_sets(&case), 0);
        case.push_data_set(
            TestDataSet::new(
                DataSetId::generate(),
                "Valid registration",
                ValueMap::new(),
                ValueMap::new(),
                "v1.0",
                make_timestamp(),
            )
            .expect("valid data set"),
        );
        assert_eq!(count_data_sets(&case), 1);
    }

    #[test]
    fn scenario_summary_snapshots_the_entity() {
        let scenario = make_scenario_with_cases(8);
        let summary = ScenarioSummary::from_scenario(&scenario);

        assert_eq!(summary.id(), scenario.id());
        assert_eq!(summary.name(), "User Registration Flow");
        assert_eq!(summary.priority(), Priority::High);
        assert_eq!(summary.test_case_count(), 8);
    }

    #[test]
    fn scenario_display_line_format() {
        let summary = ScenarioSummary::from_scenario(&make_scenario_with_cases(8));
        insta::assert_snapshot!(
            summary.display_line(),
            @"User Registration Flow [High] v1.2 - 8 test cases (updated 2024-01-15)"
        );
    }

    #[test]
    fn test_case_display_line_format() {
        let summary = TestCaseSummary::from_case(&make_case("Register with valid email"));
        insta::assert_snapshot!(
            summary.display_line(),
            @"Register with valid email v1.2 - 2 steps, 0 data sets [Regression, Smoke]"
        );
    }

    #[test]
    fn test_case_display_line_omits_empty_tag_list() {
        let case = TestCase::new(
            TestCaseId::generate(),
            "Untagged",
            vec!["Step".to_string()],
            "ok",
            vec![],
            "v1.0",
            make_timestamp(),
        )
        .expect("valid test case");
        let line = TestCaseSummary::from_case(&case).display_line();
        assert!(!line.contains('['), "No bracket block when there are no tags");
    }

    #[test]
    fn format_values_joins_sorted_pairs() {
        let mut values = ValueMap::new();
        values.insert("email".to_string(), ScalarValue::Text("user@example.com".to_string()));
        values.insert("amount".to_string(), ScalarValue::Float(99.99));
        assert_eq!(
            format_values(&values),
            "amount: 99.99, email: user@example.com",
            "Keys render in deterministic lexicographic order"
        );
    }

    #[test]
    fn format_values_empty_mapping_is_empty_string() {
        assert_eq!(format_values(&ValueMap::new()), "");
    }
}
