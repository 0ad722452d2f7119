//! Root aggregate for one dashboard session.
//!
//! Owns the project context, the tree store, and the expansion
//! tracker, and keeps the two consistent: every delete path evicts the
//! deleted entity's node (and its descendants' nodes) from the
//! expansion set, and toggles only flip nodes whose entity is live.
//! Invariant: every expanded node identifier refers to a live entity.
//!
//! Construct one per session and hand it to the rendering collaborator;
//! there is no module-level instance anywhere in this crate.

use crate::form::{
    DataSetDraft, DataSetPatch, ScenarioDraft, ScenarioPatch, TestCaseDraft, TestCasePatch,
};
use crate::model::{
    DataSetId, NodeId, NotFoundError, Project, Scenario, ScenarioId, StoreError, TestCase,
    TestCaseId, TestDataSet, ValidationError,
};
use crate::state::ExpansionTracker;
use crate::store::TreeStore;
use tracing::info;

/// Project context plus tree store plus expansion state.
#[derive(Debug, Clone)]
pub struct DashboardState {
    project: Project,
    store: TreeStore,
    expansion: ExpansionTracker,
}

impl DashboardState {
    /// Create a session for a project with an empty scenario tree.
    pub fn new(project: Project) -> Self {
        Self {
            project,
            store: TreeStore::new(),
            expansion: ExpansionTracker::new(),
        }
    }

    /// Create a session seeded with a fetched scenario tree.
    pub fn with_scenarios(project: Project, scenarios: Vec<Scenario>) -> Self {
        Self {
            project,
            store: TreeStore::from_scenarios(scenarios),
            expansion: ExpansionTracker::new(),
        }
    }

    // ===== Accessors (read-only) =====

    /// The project this session is scoped to.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The scenario tree.
    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    /// The expand/collapse state.
    pub fn expansion(&self) -> &ExpansionTracker {
        &self.expansion
    }

    /// Whether a tree row is currently expanded.
    pub fn is_expanded(&self, node: &NodeId) -> bool {
        self.expansion.is_expanded(node)
    }

    // ===== Seeding =====

    /// Replace the tree with a freshly fetched one.
    ///
    /// Collapses everything: identifiers from the previous tree have no
    /// meaning against the new one.
    pub fn load_scenarios(&mut self, scenarios: Vec<Scenario>) {
        info!(project = %self.project.id(), count = scenarios.len(), "loading scenario tree");
        self.store.replace_scenarios(scenarios);
        self.expansion.collapse_all();
    }

    // ===== Scenario operations =====

    /// Create a scenario from a form draft.
    pub fn add_scenario(&mut self, draft: ScenarioDraft) -> Result<&Scenario, ValidationError> {
        self.store.add_scenario(draft)
    }

    /// Edit a scenario.
    pub fn update_scenario(
        &mut self,
        id: &ScenarioId,
        patch: ScenarioPatch,
    ) -> Result<&Scenario, StoreError> {
        self.store.update_scenario(id, patch)
    }

    /// Delete a scenario, its subtree, and every expansion entry that
    /// pointed into that subtree.
    pub fn delete_scenario(&mut self, id: &ScenarioId) -> Result<(), NotFoundError> {
        let removed = self.store.delete_scenario(id)?;
        self.expansion.evict(&NodeId::Scenario(removed.id().clone()));
        for case in removed.test_cases() {
            self.expansion.evict(&NodeId::TestCase(case.id().clone()));
        }
        Ok(())
    }

    /// Duplicate a scenario. The copy starts collapsed.
    pub fn duplicate_scenario(&mut self, id: &ScenarioId) -> Result<&Scenario, NotFoundError> {
        self.store.duplicate_scenario(id)
    }

    // ===== Test case operations =====

    /// Create a test case from a form draft.
    pub fn add_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        draft: TestCaseDraft,
    ) -> Result<&TestCase, StoreError> {
        self.store.add_test_case(scenario_id, draft)
    }

    /// Edit a test case.
    pub fn update_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        patch: TestCasePatch,
    ) -> Result<&TestCase, StoreError> {
        self.store.update_test_case(scenario_id, case_id, patch)
    }

    /// Delete a test case and evict its expansion entry.
    pub fn delete_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
    ) -> Result<(), NotFoundError> {
        let removed = self.store.delete_test_case(scenario_id, case_id)?;
        self.expansion.evict(&NodeId::TestCase(removed.id().clone()));
        Ok(())
    }

    /// Duplicate a test case within its scenario. The copy starts
    /// collapsed.
    pub fn duplicate_test_case(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
    ) -> Result<&TestCase, NotFoundError> {
        self.store.duplicate_test_case(scenario_id, case_id)
    }

    // ===== Data set operations =====

    /// Create a data set from a form draft.
    pub fn add_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        draft: DataSetDraft,
    ) -> Result<&TestDataSet, StoreError> {
        self.store.add_data_set(scenario_id, case_id, draft)
    }

    /// Edit a data set.
    pub fn update_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        data_set_id: &DataSetId,
        patch: DataSetPatch,
    ) -> Result<&TestDataSet, StoreError> {
        self.store.update_data_set(scenario_id, case_id, data_set_id, patch)
    }

    /// Delete a data set. Data sets have no expansion entry, so no
    /// eviction is needed.
    pub fn delete_data_set(
        &mut self,
        scenario_id: &ScenarioId,
        case_id: &TestCaseId,
        data_set_id: &DataSetId,
    ) -> Result<(), NotFoundError> {
        self.store.delete_data_set(scenario_id, case_id, data_set_id)?;
        Ok(())
    }

    // ===== Expansion operations =====

    /// Flip a scenario row. Fails if the scenario no longer exists,
    /// which keeps stale references out of the expanded set.
    pub fn toggle_scenario(&mut self, id: &ScenarioId) -> Result<bool, NotFoundError> {
        if !self.store.contains_scenario(id) {
            return Err(NotFoundError::Scenario { id: id.clone() });
        }
        Ok(self.expansion.toggle(NodeId::Scenario(id.clone())))
    }

    /// Flip a test case row. Fails if the test case no longer exists.
    pub fn toggle_test_case(&mut self, id: &TestCaseId) -> Result<bool, NotFoundError> {
        if self.store.find_test_case(id).is_none() {
            return Err(NotFoundError::TestCase { id: id.clone() });
        }
        Ok(self.expansion.toggle(NodeId::TestCase(id.clone())))
    }

    /// Expand every scenario and test case row.
    pub fn expand_all(&mut self) {
        let nodes: Vec<NodeId> = self
            .store
            .scenarios()
            .iter()
            .flat_map(|s| {
                std::iter::once(NodeId::Scenario(s.id().clone())).chain(
                    s.test_cases()
                        .iter()
                        .map(|tc| NodeId::TestCase(tc.id().clone())),
                )
            })
            .collect();
        self.expansion.expand_all(nodes);
    }

    /// Collapse every row.
    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "dashboard_state_tests.rs"]
mod tests;
