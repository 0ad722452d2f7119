//! The tree store: sole owner of the in-memory scenario tree.
//!
//! Holds the ordered collection of scenarios, each owning its test
//! cases, each owning its data sets. All create/edit/duplicate/delete
//! operations go through here; callers only ever see shared references
//! into the tree.
//!
//! Contract notes:
//! - Validation runs before mutation. A failed operation leaves the
//!   tree exactly as it was.
//! - Every mutating call refreshes the last-updated timestamp of the
//!   touched entity and of the owning chain above it.
//! - Duplication deep-copies the subtree with fresh identifiers at
//!   every level and appends `" (Copy)"` to the duplicated entity's
//!   own name (nested children keep their names).
//! - Deletion cascades through the owned subtree and returns the
//!   removed entity so the caller can repair dependent UI state.
//! - No operation performs I/O; seeding and persistence belong to
//!   [`crate::source`].

use crate::form::{
    normalize_data_set_draft, normalize_scenario_draft, normalize_test_case_draft, DataSetDraft,
    DataSetPatch, ScenarioDraft, ScenarioPatch, TestCaseDraft, TestCasePatch,
};
use crate::model::test_case::{compact_steps, dedup_tags};
use crate::model::{
    DataSetId, NotFoundError, Scenario, ScenarioId, StoreError, TestCase, TestCaseId, TestDataSet,
    ValidationError,
};
use chrono::Utc;
use tracing::debug;

/// Version label assigned to entities created through the form path.
pub(crate) const INITIAL_VERSION: &str = "v1.0";

/// Suffix appended to the name of a duplicated entity.
const COPY_SUFFIX: &str = " (Copy)";

fn copy_name(original: &str) -> String {
    format!("{original}{COPY_SUFFIX}")
}

/// Owner of the scenario tree for one project.
///
/// Construct one per dashboard session and pass it to whoever renders;
/// there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct TreeStore {
    scenarios: Vec<Scenario>,
}

impl TreeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an already-built scenario tree.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Replace the whole tree with a freshly fetched one.
    pub fn replace_scenarios(&mut self, scenarios: Vec<Scenario>) {
        debug!(count = scenarios.len(), "replacing scenario tree");
        self.scenarios = scenarios;
    }

    // ===== Reads =====

    /// Scenarios in display order, with nested test cases and data sets.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Look up a scenario by identifier.
    pub fn scenario(&self, id: &ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id() == id)
    }

    /// Whether a scenario with this identifier exists.
    pub fn contains_scenario(&self, id: &ScenarioId) -> bool {
        self.scenario(id).is_some()
    }

    /// Find a test case anywhere in the tree, with its owning scenario.
    pub fn find_test_case(&self, id: &TestCaseId) -> Option<(&Scenario, &TestCase)> {
        self.scenarios
            .iter()
            .find_map(|s| s.test_case(id).map(|tc| (s, tc)))
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the tree holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    // ===== Scenario operations =====

    /// Create a scenario from a form draft and append it to the tree.
    ///
    /// Assigns a fresh identifier and the current timestamp. The draft
    /// is normalized first; a rejected draft leaves the tree untouched.
    pub fn add_scenario(&mut self, draft: ScenarioDraft) -> Result<&Scenario, ValidationError> {
        let draft = normalize_scenario_draft(draft)?;
        let scenario = Scenario::new(
            ScenarioId::generate(),
            draft.name,
            draft.description,
            draft.priority.unwrap_or_default(),
            INITIAL_VERSION,
            Utc::now(),
        )?;
        debug!(id = %scenario.id(), name = scenario.name(), "added scenario");
        self.scenarios.push(scenario);
        let idx = self.scenarios.len() - 1;
        Ok(&self.scenarios[idx])
    }

    /// Merge a patch into an existing scenario and refresh its
    /// timestamp. Patch fields are validated before anything is
    /// applied.
    pub fn update_scenario(
        &mut self,
        id: &ScenarioId,
        patch: ScenarioPatch,
    ) -> Result<&Scenario, StoreError> {
        let idx = self.scenario_index(id)?;

        let name = validate_replacement(patch.name, ValidationError::EmptyName)?;
        let description =
            validate_replacement(patch.description, ValidationError::EmptyDescription)?;

        let scenario = &mut self.scenarios[idx];
        if let Some(name) = name {
            scenario.set_name(name);
        }
        if let Some(description) = description {
            scenario.set_description(description);
        }
        if let Some(priority) = patch.priority {
            scenario.set_priority(priority);
        }
        if let Some(version) = patch.version {
            scenario.set_version(version);
        }
        scenario.touch(Utc::now());
        Ok(&self.scenarios[idx])
    }

    /// Remove a scenario and its whole subtree.
    ///
    /// Returns the removed scenario so the caller can evict its node
    /// identifiers from dependent UI state.
    pub fn delete_scenario(&mut self, id: &ScenarioId) -> Result<Scenario, NotFoundError> {
        let idx = self.scenario_index(id)?;
        let removed = self.scenarios.remove(idx);
        debug!(
            id = %removed.id(),
            test_cases = removed.test_cases().len(),
            "deleted scenario"
        );
        Ok(removed)
    }

    /// Deep-copy a scenario with fresh identifiers at every level and
    /// append the copy at the end of the tree. The copy's own name
    /// gets the `" (Copy)"` suffix; nested entities keep theirs.
    pub fn duplicate_scenario(&mut self, id: &ScenarioId) -> Result<&Scenario, NotFoundError> {
        let idx = self.scenario_index(id)?;
        let now = Utc::now();
        let mut copy = self.scenarios[idx].duplicate_deep(now);
        copy.set_name(copy_name(self.scenarios[idx].name()));
        debug!(source = %id, copy = %copy.id(), "duplicated scenario");
        self.scenarios.push(copy);
        let last = self.scenarios.len() - 1;
        Ok(&self.scenarios[last])
    }

    // ===== Test case operations =====

    /// Create a test case from a form draft under the given scenario.
    pub fn add_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        draft: TestCaseDraft,
    ) -> Result<&TestCase, StoreError> {
        let idx = self.scenario_index(scenario_id)?;
        let draft = normalize_test_case_draft(draft)?;
        let case = TestCase::new(
            TestCaseId::generate(),
            draft.name,
            draft.steps,
            draft.expected_result,
            draft.tags,
            INITIAL_VERSION,
            Utc::now(),
        )
        .map_err(StoreError::Validation)?;
        debug!(scenario = %scenario_id, id = %case.id(), "added test case");
        let scenario = &mut self.scenarios[idx];
        scenario.touch(Utc::now());
        Ok(scenario.push_test_case(case))
    }

    /// Merge a patch into an existing test case. Patched step lists
    /// and tag sets go through the same normalization as drafts.
    pub fn update_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        patch: TestCasePatch,
    ) -> Result<&TestCase, StoreError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;

        let name = validate_replacement(patch.name, ValidationError::EmptyName)?;
        let expected_result =
            validate_replacement(patch.expected_result, ValidationError::EmptyExpectedResult)?;
        let steps = match patch.steps {
            Some(raw) => {
                let steps = compact_steps(raw);
                if steps.is_empty() {
                    return Err(ValidationError::NoSteps.into());
                }
                Some(steps)
            }
            None => None,
        };
        let tags = patch
            .tags
            .map(|raw| dedup_tags(raw.into_iter().map(|t| t.trim().to_string()).collect()));

        let now = Utc::now();
        let scenario = &mut self.scenarios[sidx];
        scenario.touch(now);
        let case = &mut scenario.test_cases_mut()[cidx];
        if let Some(name) = name {
            case.set_name(name);
        }
        if let Some(steps) = steps {
            case.set_steps(steps);
        }
        if let Some(expected_result) = expected_result {
            case.set_expected_result(expected_result);
        }
        if let Some(tags) = tags {
            case.set_tags(tags);
        }
        if let Some(version) = patch.version {
            case.set_version(version);
        }
        case.touch(now);
        Ok(&self.scenarios[sidx].test_cases()[cidx])
    }

    /// Remove a test case and its data sets. Returns the removed case
    /// for dependent-state cleanup.
    pub fn delete_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
    ) -> Result<TestCase, NotFoundError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;
        let scenario = &mut self.scenarios[sidx];
        let removed = scenario.test_cases_mut().remove(cidx);
        scenario.touch(Utc::now());
        debug!(scenario = %scenario_id, id = %removed.id(), "deleted test case");
        Ok(removed)
    }

    /// Deep-copy a test case (data sets included) with fresh
    /// identifiers, appending the copy to the same scenario.
    pub fn duplicate_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
    ) -> Result<&TestCase, NotFoundError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;
        let now = Utc::now();
        let mut copy = self.scenarios[sidx].test_cases()[cidx].duplicate_deep(now);
        copy.set_name(copy_name(self.scenarios[sidx].test_cases()[cidx].name()));
        debug!(source = %case_id, copy = %copy.id(), "duplicated test case");
        let scenario = &mut self.scenarios[sidx];
        scenario.touch(now);
        Ok(scenario.push_test_case(copy))
    }

    // ===== Data set operations =====

    /// Create a data set from a form draft under the given test case.
    pub fn add_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        draft: DataSetDraft,
    ) -> Result<&TestDataSet, StoreError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;
        let draft = normalize_data_set_draft(draft)?;
        let data_set = TestDataSet::new(
            DataSetId::generate(),
            draft.name,
            draft.input_values,
            draft.expected_output,
            INITIAL_VERSION,
            Utc::now(),
        )
        .map_err(StoreError::Validation)?;

        let now = Utc::now();
        let scenario = &mut self.scenarios[sidx];
        scenario.touch(now);
        let case = &mut scenario.test_cases_mut()[cidx];
        case.touch(now);
        Ok(case.push_data_set(data_set))
    }

    /// Merge a patch into an existing data set.
    pub fn update_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        data_set_id: &DataSetId,
        patch: DataSetPatch,
    ) -> Result<&TestDataSet, StoreError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;
        let didx = data_set_index(&self.scenarios[sidx].test_cases()[cidx], data_set_id)?;

        let name = validate_replacement(patch.name, ValidationError::EmptyName)?;

        let now = Utc::now();
        let scenario = &mut self.scenarios[sidx];
        scenario.touch(now);
        let case = &mut scenario.test_cases_mut()[cidx];
        case.touch(now);
        let data_set = &mut case.data_sets_mut()[didx];
        if let Some(name) = name {
            data_set.set_name(name);
        }
        if let Some(values) = patch.input_values {
            data_set.set_input_values(values);
        }
        if let Some(values) = patch.expected_output {
            data_set.set_expected_output(values);
        }
        if let Some(version) = patch.version {
            data_set.set_version(version);
        }
        data_set.touch(now);
        Ok(&self.scenarios[sidx].test_cases()[cidx].data_sets()[didx])
    }

    /// Remove a data set from its test case.
    pub fn delete_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        data_set_id: &DataSetId,
    ) -> Result<TestDataSet, NotFoundError> {
        let sidx = self.scenario_index(scenario_id)?;
        let cidx = case_index(&self.scenarios[sidx], case_id)?;
        let didx = data_set_index(&self.scenarios[sidx].test_cases()[cidx], data_set_id)?;

        let now = Utc::now();
        let scenario = &mut self.scenarios[sidx];
        scenario.touch(now);
        let case = &mut scenario.test_cases_mut()[cidx];
        case.touch(now);
        Ok(case.data_sets_mut().remove(didx))
    }

    // ===== Internal =====

    fn scenario_index(&self, id: &ScenarioId) -> Result<usize, NotFoundError> {
        self.scenarios
            .iter()
            .position(|s| s.id() == id)
            .ok_or_else(|| NotFoundError::Scenario { id: id.clone() })
    }
}

fn case_index(scenario: &Scenario, id: &TestCaseId) -> Result<usize, NotFoundError> {
    scenario
        .test_cases()
        .iter()
        .position(|tc| tc.id() == id)
        .ok_or_else(|| NotFoundError::TestCase { id: id.clone() })
}

fn data_set_index(case: &TestCase, id: &DataSetId) -> Result<usize, NotFoundError> {
    case.data_sets()
        .iter()
        .position(|ds| ds.id() == id)
        .ok_or_else(|| NotFoundError::DataSet { id: id.clone() })
}

/// Trim an optional replacement string, rejecting blank replacements.
/// `None` (field untouched) passes through.
fn validate_replacement(
    value: Option<String>,
    on_empty: ValidationError,
) -> Result<Option<String>, ValidationError> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() {
                Err(on_empty)
            } else {
                Ok(Some(trimmed))
            }
        }
        None => Ok(None),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "tree_store_tests.rs"]
mod tests;
