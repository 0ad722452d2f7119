//! JSON wire-format boundary.
//!
//! Converts the dashboard service's JSON documents into validated
//! domain types and back. Parsing is tolerant at element level: a
//! damaged scenario, test case, or data set is skipped (or repaired,
//! for priority/status/timestamp labels) and reported as a
//! [`ParseIssue`], so one bad element never poisons a load. Only a
//! syntactically invalid document fails outright.

use crate::model::{
    DataSetId, ParseError, Priority, Project, ProjectId, ProjectStatus, Scenario, ScenarioId,
    TestCase, TestCaseId, TestDataSet, ValueMap,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ===== Wire structs =====

#[derive(Debug, Serialize, Deserialize)]
struct RawDocument {
    project: RawProject,
    #[serde(default)]
    scenarios: Vec<RawScenario>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawProject {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "lastUpdated")]
    last_updated: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawScenario {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "lastUpdated")]
    last_updated: Option<String>,
    #[serde(default)]
    test_cases: Vec<RawTestCase>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawTestCase {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    expected_result: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "lastUpdated")]
    last_updated: Option<String>,
    #[serde(default)]
    data_sets: Vec<RawDataSet>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawDataSet {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    input_values: ValueMap,
    #[serde(default)]
    expected_output: ValueMap,
    #[serde(default)]
    version: Option<String>,
    #[serde(default, rename = "lastUpdated")]
    last_updated: Option<String>,
}

// ===== ParseIssue =====

/// Element-level damage found while loading a document.
///
/// Issues never fail the load; the caller surfaces them as non-fatal
/// notices. Skipping variants mean the element is absent from the
/// result; repairing variants mean it was kept with a substitute value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIssue {
    /// A scenario lacked a required field and was skipped.
    #[error("Scenario {index} is missing '{field}' and was skipped")]
    MissingScenarioField {
        /// Zero-based position in the scenario array.
        index: usize,
        /// The missing field name.
        field: &'static str,
    },

    /// A scenario failed domain validation and was skipped.
    #[error("Scenario {index} is invalid ({reason}) and was skipped")]
    InvalidScenario {
        /// Zero-based position in the scenario array.
        index: usize,
        /// Validation failure description.
        reason: String,
    },

    /// A test case was unusable and was skipped.
    #[error("Test case {case_index} in scenario {scenario_index} is invalid ({reason}) and was skipped")]
    InvalidTestCase {
        /// Zero-based position of the owning scenario.
        scenario_index: usize,
        /// Zero-based position within the scenario.
        case_index: usize,
        /// Validation failure description.
        reason: String,
    },

    /// A data set was unusable and was skipped.
    #[error("Data set {data_index} in test case {case_index} of scenario {scenario_index} is invalid ({reason}) and was skipped")]
    InvalidDataSet {
        /// Zero-based position of the owning scenario.
        scenario_index: usize,
        /// Zero-based position of the owning test case.
        case_index: usize,
        /// Zero-based position within the test case.
        data_index: usize,
        /// Validation failure description.
        reason: String,
    },

    /// A priority label was not one of High/Medium/Low; the entity was
    /// kept with Medium.
    #[error("Unknown priority '{raw}' in scenario {index}; defaulted to Medium")]
    UnknownPriority {
        /// Zero-based position in the scenario array.
        index: usize,
        /// The label as found on the wire.
        raw: String,
    },

    /// A project status label was unrecognized; the record was kept
    /// with draft status.
    #[error("Unknown project status '{raw}'; defaulted to draft")]
    UnknownStatus {
        /// The label as found on the wire.
        raw: String,
    },

    /// A timestamp failed to parse; the entity was kept with the load
    /// time instead.
    #[error("Invalid timestamp '{raw}'; replaced with load time")]
    InvalidTimestamp {
        /// The value as found on the wire.
        raw: String,
    },
}

// ===== Results =====

/// A parsed project record plus any issues found along the way.
#[derive(Debug)]
pub struct ParsedProject {
    /// The validated project record.
    pub project: Project,
    /// Non-fatal damage reports.
    pub issues: Vec<ParseIssue>,
}

/// A parsed scenario tree plus any issues found along the way.
#[derive(Debug)]
pub struct ParsedScenarios {
    /// The validated scenarios that survived, in document order.
    pub scenarios: Vec<Scenario>,
    /// Non-fatal damage reports.
    pub issues: Vec<ParseIssue>,
}

/// A parsed project document: the project record and its scenario tree.
#[derive(Debug)]
pub struct ParsedDocument {
    /// The validated project record.
    pub project: Project,
    /// The validated scenarios that survived, in document order.
    pub scenarios: Vec<Scenario>,
    /// Non-fatal damage reports.
    pub issues: Vec<ParseIssue>,
}

// ===== Parsing =====

/// Parse a standalone project record.
///
/// Fails only on invalid JSON or a record missing its identifier or
/// name; label damage (status, timestamp) is repaired and reported.
pub fn parse_project(input: &str) -> Result<ParsedProject, ParseError> {
    let raw: RawProject = serde_json::from_str(input).map_err(invalid_json)?;
    let mut issues = Vec::new();
    let project = project_from_raw(raw, &mut issues)?;
    Ok(ParsedProject { project, issues })
}

/// Parse a scenario array.
///
/// Fails only on invalid JSON. Damaged elements are skipped or
/// repaired and reported via [`ParsedScenarios::issues`].
pub fn parse_scenarios(input: &str) -> Result<ParsedScenarios, ParseError> {
    let raw: Vec<RawScenario> = serde_json::from_str(input).map_err(invalid_json)?;
    let (scenarios, issues) = scenarios_from_raw(raw);
    Ok(ParsedScenarios { scenarios, issues })
}

/// Parse a full project document (`{"project": ..., "scenarios": [...]}`).
pub fn parse_document(input: &str) -> Result<ParsedDocument, ParseError> {
    let raw: RawDocument = serde_json::from_str(input).map_err(invalid_json)?;
    let mut issues = Vec::new();
    let project = project_from_raw(raw.project, &mut issues)?;
    let (scenarios, mut scenario_issues) = scenarios_from_raw(raw.scenarios);
    issues.append(&mut scenario_issues);
    Ok(ParsedDocument {
        project,
        scenarios,
        issues,
    })
}

fn invalid_json(err: serde_json::Error) -> ParseError {
    ParseError::InvalidJson {
        message: err.to_string(),
    }
}

fn project_from_raw(raw: RawProject, issues: &mut Vec<ParseIssue>) -> Result<Project, ParseError> {
    let id = raw
        .id
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MissingField { field: "id" })?;
    let name = raw
        .name
        .filter(|s| !s.trim().is_empty())
        .ok_or(ParseError::MissingField { field: "name" })?;

    let status = match raw.status {
        None => ProjectStatus::default(),
        Some(label) => match ProjectStatus::parse(&label) {
            Some(status) => status,
            None => {
                warn!(raw = label, "unknown project status, defaulting to draft");
                issues.push(ParseIssue::UnknownStatus { raw: label });
                ProjectStatus::default()
            }
        },
    };
    let last_updated = resolve_timestamp(raw.last_updated, issues);

    let id = ProjectId::new(id).map_err(|_| ParseError::MissingField { field: "id" })?;
    Project::new(
        id,
        name,
        raw.description.unwrap_or_default(),
        raw.owner.unwrap_or_default(),
        status,
        raw.version.unwrap_or_else(|| "v1.0".to_string()),
        last_updated,
    )
    .map_err(|_| ParseError::MissingField { field: "name" })
}

fn scenarios_from_raw(raw: Vec<RawScenario>) -> (Vec<Scenario>, Vec<ParseIssue>) {
    let mut issues = Vec::new();
    let mut scenarios = Vec::new();

    for (index, raw_scenario) in raw.into_iter().enumerate() {
        if let Some(scenario) = scenario_from_raw(index, raw_scenario, &mut issues) {
            scenarios.push(scenario);
        }
    }

    if !issues.is_empty() {
        warn!(count = issues.len(), "scenario document loaded with issues");
    }
    (scenarios, issues)
}

fn scenario_from_raw(
    index: usize,
    raw: RawScenario,
    issues: &mut Vec<ParseIssue>,
) -> Option<Scenario> {
    let id = match raw.id.filter(|s| !s.is_empty()) {
        Some(id) => id,
        None => {
            issues.push(ParseIssue::MissingScenarioField { index, field: "id" });
            return None;
        }
    };
    let Ok(id) = ScenarioId::new(id) else {
        issues.push(ParseIssue::MissingScenarioField { index, field: "id" });
        return None;
    };

    let priority = match raw.priority {
        None => Priority::default(),
        Some(label) => match Priority::parse(&label) {
            Some(priority) => priority,
            None => {
                issues.push(ParseIssue::UnknownPriority { index, raw: label });
                Priority::default()
            }
        },
    };
    let last_updated = resolve_timestamp(raw.last_updated, issues);

    let mut scenario = match Scenario::new(
        id,
        raw.name.unwrap_or_default(),
        raw.description.unwrap_or_default(),
        priority,
        raw.version.unwrap_or_else(|| "v1.0".to_string()),
        last_updated,
    ) {
        Ok(scenario) => scenario,
        Err(err) => {
            issues.push(ParseIssue::InvalidScenario {
                index,
                reason: err.to_string(),
            });
            return None;
        }
    };

    for (case_index, raw_case) in raw.test_cases.into_iter().enumerate() {
        if let Some(case) = test_case_from_raw(index, case_index, raw_case, issues) {
            scenario.push_test_case(case);
        }
    }
    Some(scenario)
}

fn test_case_from_raw(
    scenario_index: usize,
    case_index: usize,
    raw: RawTestCase,
    issues: &mut Vec<ParseIssue>,
) -> Option<TestCase> {
    let skip = |reason: String, issues: &mut Vec<ParseIssue>| {
        issues.push(ParseIssue::InvalidTestCase {
            scenario_index,
            case_index,
            reason,
        });
    };

    let Some(Ok(id)) = raw.id.filter(|s| !s.is_empty()).map(TestCaseId::new) else {
        skip("missing id".to_string(), issues);
        return None;
    };
    let last_updated = resolve_timestamp(raw.last_updated, issues);

    let mut case = match TestCase::new(
        id,
        raw.name.unwrap_or_default(),
        raw.steps,
        raw.expected_result.unwrap_or_default(),
        raw.tags,
        raw.version.unwrap_or_else(|| "v1.0".to_string()),
        last_updated,
    ) {
        Ok(case) => case,
        Err(err) => {
            skip(err.to_string(), issues);
            return None;
        }
    };

    for (data_index, raw_data) in raw.data_sets.into_iter().enumerate() {
        match data_set_from_raw(raw_data, issues) {
            Ok(data_set) => {
                case.push_data_set(data_set);
            }
            Err(reason) => issues.push(ParseIssue::InvalidDataSet {
                scenario_index,
                case_index,
                data_index,
                reason,
            }),
        }
    }
    Some(case)
}

fn data_set_from_raw(
    raw: RawDataSet,
    issues: &mut Vec<ParseIssue>,
) -> Result<TestDataSet, String> {
    let Some(Ok(id)) = raw.id.filter(|s| !s.is_empty()).map(DataSetId::new) else {
        return Err("missing id".to_string());
    };
    let last_updated = resolve_timestamp(raw.last_updated, issues);
    TestDataSet::new(
        id,
        raw.name.unwrap_or_default(),
        raw.input_values,
        raw.expected_output,
        raw.version.unwrap_or_else(|| "v1.0".to_string()),
        last_updated,
    )
    .map_err(|err| err.to_string())
}

/// Parse a wire timestamp, accepting RFC 3339 or a bare `YYYY-MM-DD`
/// date. A missing field quietly becomes the load time; a present but
/// unparsable one is reported.
fn resolve_timestamp(raw: Option<String>, issues: &mut Vec<ParseIssue>) -> DateTime<Utc> {
    match raw {
        None => Utc::now(),
        Some(raw) => match parse_timestamp(&raw) {
            Some(ts) => ts,
            None => {
                issues.push(ParseIssue::InvalidTimestamp { raw });
                Utc::now()
            }
        },
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// ===== Serialization =====

/// Serialize a full project document for the persist path.
pub fn document_to_json(project: &Project, scenarios: &[Scenario]) -> Result<String, ParseError> {
    let raw = RawDocument {
        project: project_to_raw(project),
        scenarios: scenarios.iter().map(scenario_to_raw).collect(),
    };
    serde_json::to_string_pretty(&raw).map_err(|err| ParseError::Serialize {
        message: err.to_string(),
    })
}

/// Serialize a scenario array for the persist path.
pub fn scenarios_to_json(scenarios: &[Scenario]) -> Result<String, ParseError> {
    let raw: Vec<RawScenario> = scenarios.iter().map(scenario_to_raw).collect();
    serde_json::to_string_pretty(&raw).map_err(|err| ParseError::Serialize {
        message: err.to_string(),
    })
}

fn project_to_raw(project: &Project) -> RawProject {
    RawProject {
        id: Some(project.id().as_str().to_string()),
        name: Some(project.name().to_string()),
        description: Some(project.description().to_string()),
        owner: Some(project.owner().to_string()),
        status: Some(project.status().as_str().to_string()),
        version: Some(project.version().to_string()),
        last_updated: Some(project.last_updated().to_rfc3339()),
    }
}

fn scenario_to_raw(scenario: &Scenario) -> RawScenario {
    RawScenario {
        id: Some(scenario.id().as_str().to_string()),
        name: Some(scenario.name().to_string()),
        description: Some(scenario.description().to_string()),
        priority: Some(scenario.priority().as_str().to_string()),
        version: Some(scenario.version().to_string()),
        last_updated: Some(scenario.last_updated().to_rfc3339()),
        test_cases: scenario.test_cases().iter().map(test_case_to_raw).collect(),
    }
}

fn test_case_to_raw(case: &TestCase) -> RawTestCase {
    RawTestCase {
        id: Some(case.id().as_str().to_string()),
        name: Some(case.name().to_string()),
        steps: case.steps().to_vec(),
        expected_result: Some(case.expected_result().to_string()),
        tags: case.tags().to_vec(),
        version: Some(case.version().to_string()),
        last_updated: Some(case.last_updated().to_rfc3339()),
        data_sets: case.data_sets().iter().map(data_set_to_raw).collect(),
    }
}

fn data_set_to_raw(data_set: &TestDataSet) -> RawDataSet {
    RawDataSet {
        id: Some(data_set.id().as_str().to_string()),
        name: Some(data_set.name().to_string()),
        input_values: data_set.input_values().clone(),
        expected_output: data_set.expected_output().clone(),
        version: Some(data_set.version().to_string()),
        last_updated: Some(data_set.last_updated().to_rfc3339()),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
