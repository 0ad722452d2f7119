//! Test cases: steppable procedures with expected results and tags.

use crate::model::{TestCaseId, TestDataSet, ValidationError};
use chrono::{DateTime, Utc};

/// A concrete, steppable test procedure.
///
/// Invariants, enforced at construction and on every edit:
/// - at least one step, and every step is trimmed and non-empty;
/// - tags are unique case-sensitively, in first-seen order;
/// - name and expected result are trimmed and non-empty.
///
/// Owns an ordered sequence of [`TestDataSet`]s (order = insertion
/// order, which is also display order).
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    id: TestCaseId,
    name: String,
    steps: Vec<String>,
    expected_result: String,
    tags: Vec<String>,
    version: String,
    last_updated: DateTime<Utc>,
    data_sets: Vec<TestDataSet>,
}

impl TestCase {
    /// Create a test case, normalizing the textual fields.
    ///
    /// Steps are trimmed and blank entries dropped; duplicate tags are
    /// dropped keeping the first occurrence. Fails if the name or
    /// expected result is blank, or no non-blank step remains.
    pub fn new(
        id: TestCaseId,
        name: impl Into<String>,
        steps: Vec<String>,
        expected_result: impl Into<String>,
        tags: Vec<String>,
        version: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let expected_result = expected_result.into().trim().to_string();
        if expected_result.is_empty() {
            return Err(ValidationError::EmptyExpectedResult);
        }

        let steps = compact_steps(steps);
        if steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }

        Ok(Self {
            id,
            name,
            steps,
            expected_result,
            tags: dedup_tags(tags),
            version: version.into(),
            last_updated,
            data_sets: Vec::new(),
        })
    }

    // ===== Accessors (read-only) =====

    /// Test case identifier.
    pub fn id(&self) -> &TestCaseId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered, non-empty list of steps.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Expected result text.
    pub fn expected_result(&self) -> &str {
        &self.expected_result
    }

    /// Tags in first-seen order, no duplicates.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Last-updated timestamp.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Owned data sets in insertion order.
    pub fn data_sets(&self) -> &[TestDataSet] {
        &self.data_sets
    }

    /// Look up an owned data set by identifier.
    pub fn data_set(&self, id: &crate::model::DataSetId) -> Option<&TestDataSet> {
        self.data_sets.iter().find(|ds| ds.id() == id)
    }

    // ===== Mutators (store-internal) =====

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_steps(&mut self, steps: Vec<String>) {
        self.steps = steps;
    }

    pub(crate) fn set_expected_result(&mut self, expected_result: String) {
        self.expected_result = expected_result;
    }

    pub(crate) fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = dedup_tags(tags);
    }

    pub(crate) fn set_version(&mut self, version: String) {
        self.version = version;
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    pub(crate) fn push_data_set(&mut self, data_set: TestDataSet) -> &TestDataSet {
        self.data_sets.push(data_set);
        let idx = self.data_sets.len() - 1;
        &self.data_sets[idx]
    }

    pub(crate) fn data_sets_mut(&mut self) -> &mut Vec<TestDataSet> {
        &mut self.data_sets
    }

    /// Deep copy with freshly generated identifiers at every level and
    /// the given timestamp throughout. The name is kept verbatim; the
    /// caller renames the copy when the test case itself is the
    /// duplication target.
    pub(crate) fn duplicate_deep(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: TestCaseId::generate(),
            name: self.name.clone(),
            steps: self.steps.clone(),
            expected_result: self.expected_result.clone(),
            tags: self.tags.clone(),
            version: self.version.clone(),
            last_updated: now,
            data_sets: self.data_sets.iter().map(|ds| ds.duplicate_deep(now)).collect(),
        }
    }
}

/// Trim steps and drop the ones that are empty afterwards.
pub(crate) fn compact_steps(steps: Vec<String>) -> Vec<String> {
    steps
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Drop duplicate tags (case-sensitive), keeping first-seen order.
pub(crate) fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter().filter(|tag| seen.insert(tag.clone())).collect()
}

// ===== Tests =====
