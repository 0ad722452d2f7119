//! Draft and patch types plus their normalizers.
//!
//! A draft is candidate data for creating an entity; a patch is a
//! partial edit where `None` means "leave unchanged". Normalizers trim
//! text, compact step lists, de-duplicate tags, and reject drafts whose
//! required fields are empty after trimming. Normalization is
//! idempotent: normalizing an already-normalized draft is a no-op.

use crate::model::scenario::Priority;
use crate::model::test_case::{compact_steps, dedup_tags};
use crate::model::{ValidationError, ValueMap};

// ===== Scenario =====

/// Candidate data for creating a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioDraft {
    /// Display name. Required.
    pub name: String,
    /// Free-text description. Required.
    pub description: String,
    /// Priority selection; `None` defaults to [`Priority::Medium`].
    pub priority: Option<Priority>,
}

/// Partial edit of a scenario. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement version label.
    pub version: Option<String>,
}

/// Trim a scenario draft and apply the priority default.
///
/// Fails if name or description is empty after trimming.
pub fn normalize_scenario_draft(raw: ScenarioDraft) -> Result<ScenarioDraft, ValidationError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let description = raw.description.trim().to_string();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(ScenarioDraft {
        name,
        description,
        priority: Some(raw.priority.unwrap_or_default()),
    })
}

// ===== Test case =====

/// Candidate data for creating a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseDraft {
    /// Display name. Required.
    pub name: String,
    /// Step list as typed in the form; blank rows are dropped during
    /// normalization. At least one non-blank step is required.
    pub steps: Vec<String>,
    /// Expected result text. Required.
    pub expected_result: String,
    /// Tags as typed; duplicates are dropped case-sensitively, keeping
    /// first-seen order.
    pub tags: Vec<String>,
}

/// Partial edit of a test case. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestCasePatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement step list (normalized before applying).
    pub steps: Option<Vec<String>>,
    /// Replacement expected result.
    pub expected_result: Option<String>,
    /// Replacement tag set (de-duplicated before applying).
    pub tags: Option<Vec<String>>,
    /// Replacement version label.
    pub version: Option<String>,
}

/// Trim and compact a test case draft.
///
/// Steps are trimmed and blank entries removed; tags are trimmed and
/// de-duplicated (case-sensitive, first occurrence wins). Fails if the
/// name or expected result is empty after trimming, or if no step
/// survives compaction.
pub fn normalize_test_case_draft(raw: TestCaseDraft) -> Result<TestCaseDraft, ValidationError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let expected_result = raw.expected_result.trim().to_string();
    if expected_result.is_empty() {
        return Err(ValidationError::EmptyExpectedResult);
    }
    let steps = compact_steps(raw.steps);
    if steps.is_empty() {
        return Err(ValidationError::NoSteps);
    }
    let tags = dedup_tags(raw.tags.into_iter().map(|t| t.trim().to_string()).collect());
    Ok(TestCaseDraft {
        name,
        steps,
        expected_result,
        tags,
    })
}

// ===== Data set =====

/// Candidate data for creating a test data set.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSetDraft {
    /// Display name. Required.
    pub name: String,
    /// Input field values.
    pub input_values: ValueMap,
    /// Expected output field values.
    pub expected_output: ValueMap,
}

/// Partial edit of a data set. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataSetPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement input mapping.
    pub input_values: Option<ValueMap>,
    /// Replacement expected-output mapping.
    pub expected_output: Option<ValueMap>,
    /// Replacement version label.
    pub version: Option<String>,
}

/// Trim a data set draft. Fails if the name is empty after trimming.
pub fn normalize_data_set_draft(raw: DataSetDraft) -> Result<DataSetDraft, ValidationError> {
    let name = raw.name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(DataSetDraft {
        name,
        input_values: raw.input_values,
        expected_output: raw.expected_output,
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "draft_tests.rs"]
mod tests;
