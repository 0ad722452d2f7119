//! Scenarios: prioritized groupings of test cases for one user flow.

use crate::model::{ScenarioId, TestCase, TestCaseId, ValidationError};
use chrono::{DateTime, Utc};
use std::fmt;

// ===== Priority =====

/// Scenario priority as shown on the dashboard badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// Must-pass flows.
    High,
    /// Standard coverage. The default when a form leaves priority unset.
    #[default]
    Medium,
    /// Nice-to-have coverage.
    Low,
}

impl Priority {
    /// Canonical label, matching the wire format and badge text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a canonical label. Returns `None` for anything else;
    /// callers decide whether to fall back or report.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "High" => Some(Priority::High),
            "Medium" => Some(Priority::Medium),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Scenario =====

/// A named, prioritized grouping of related test cases representing one
/// user-facing flow. Owns its test cases; order is insertion order and
/// doubles as display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    id: ScenarioId,
    name: String,
    description: String,
    priority: Priority,
    version: String,
    last_updated: DateTime<Utc>,
    test_cases: Vec<TestCase>,
}

impl Scenario {
    /// Create a scenario with no test cases yet. Name and description
    /// are trimmed and must be non-empty.
    pub fn new(
        id: ScenarioId,
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        version: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let description = description.into().trim().to_string();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(Self {
            id,
            name,
            description,
            priority,
            version: version.into(),
            last_updated,
            test_cases: Vec::new(),
        })
    }

    // ===== Accessors (read-only) =====

    /// Scenario identifier.
    pub fn id(&self) -> &ScenarioId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
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

    /// Owned test cases in insertion order.
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Look up an owned test case by identifier.
    pub fn test_case(&self, id: &TestCaseId) -> Option<&TestCase> {
        self.test_cases.iter().find(|tc| tc.id() == id)
    }

    // ===== Mutators (store-internal) =====

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub(crate) fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub(crate) fn set_version(&mut self, version: String) {
        self.version = version;
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    pub(crate) fn push_test_case(&mut self, test_case: TestCase) -> &TestCase {
        self.test_cases.push(test_case);
        let idx = self.test_cases.len() - 1;
        &self.test_cases[idx]
    }

    pub(crate) fn test_cases_mut(&mut self) -> &mut Vec<TestCase> {
        &mut self.test_cases
    }

    /// Deep copy with freshly generated identifiers at every level and
    /// the given timestamp throughout. The scenario name is kept; the
    /// store appends the copy suffix to the top-level entity only.
    pub(crate) fn duplicate_deep(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: ScenarioId::generate(),
            name: self.name.clone(),
            description: self.description.clone(),
            priority: self.priority,
            version: self.version.clone(),
            last_updated: now,
            test_cases: self.test_cases.iter().map(|tc| tc.duplicate_deep(now)).collect(),
        }
    }
}

// ===== Tests =====
