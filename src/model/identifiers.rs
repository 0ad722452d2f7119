//! Identifier newtypes with smart constructors.
//!
//! All identifiers validate non-empty strings at construction time.
//! Fresh identifiers come from [`ProjectId::generate`] and friends,
//! which mint random UUIDs; the raw tuple constructors are never
//! exported.

use std::fmt;

/// Identifier of a project, the parent context for a scenario tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    /// Smart constructor: validates a non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidProjectId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidProjectId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Mint a fresh, globally unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a scenario within a project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScenarioId(String);

impl ScenarioId {
    /// Smart constructor: validates a non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidScenarioId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidScenarioId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Mint a fresh, globally unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a test case within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestCaseId(String);

impl TestCaseId {
    /// Smart constructor: validates a non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidTestCaseId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidTestCaseId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Mint a fresh, globally unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestCaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a test data set within a test case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataSetId(String);

impl DataSetId {
    /// Smart constructor: validates a non-empty identifier.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDataSetId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidDataSetId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// Mint a fresh, globally unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== NodeId =====

/// Identifier of an expandable node in the tree view.
///
/// Scenarios and test cases are the collapsible levels of the
/// dashboard; data sets render flat and have no expansion state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// A scenario row.
    Scenario(ScenarioId),
    /// A test case row.
    TestCase(TestCaseId),
}

impl From<ScenarioId> for NodeId {
    fn from(id: ScenarioId) -> Self {
        NodeId::Scenario(id)
    }
}

impl From<TestCaseId> for NodeId {
    fn from(id: TestCaseId) -> Self {
        NodeId::TestCase(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Scenario(id) => write!(f, "scenario/{id}"),
            NodeId::TestCase(id) => write!(f, "test-case/{id}"),
        }
    }
}

// ===== Error Types =====

/// Rejection from the [`ProjectId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidProjectId {
    /// Empty identifier string.
    #[error("Project ID cannot be empty")]
    Empty,
}

/// Rejection from the [`ScenarioId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidScenarioId {
    /// Empty identifier string.
    #[error("Scenario ID cannot be empty")]
    Empty,
}

/// Rejection from the [`TestCaseId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidTestCaseId {
    /// Empty identifier string.
    #[error("Test case ID cannot be empty")]
    Empty,
}

/// Rejection from the [`DataSetId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidDataSetId {
    /// Empty identifier string.
    #[error("Data set ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_id_accepts_valid_string() {
        let id = ScenarioId::new("scn-001");
        assert!(id.is_ok(), "Valid scenario ID should be accepted");
    }

    #[test]
    fn scenario_id_rejects_empty_string() {
        let id = ScenarioId::new("");
        assert!(
            matches!(id, Err(InvalidScenarioId::Empty)),
            "Empty string should return InvalidScenarioId::Empty"
        );
    }

    #[test]
    fn scenario_id_as_str_returns_original() {
        let original = "scn-001";
        let id = ScenarioId::new(original).expect("valid scenario ID");
        assert_eq!(id.as_str(), original, "as_str() should return original value");
    }

    #[test]
    fn scenario_id_display_returns_inner_string() {
        let id = ScenarioId::new("scn-001").expect("valid scenario ID");
        assert_eq!(id.to_string(), "scn-001", "Display should output inner string");
    }

    #[test]
    fn project_id_rejects_empty_string() {
        assert!(matches!(ProjectId::new(""), Err(InvalidProjectId::Empty)));
    }

    #[test]
    fn test_case_id_rejects_empty_string() {
        assert!(matches!(TestCaseId::new(""), Err(InvalidTestCaseId::Empty)));
    }

    #[test]
    fn data_set_id_rejects_empty_string() {
        assert!(matches!(DataSetId::new(""), Err(InvalidDataSetId::Empty)));
    }

    #[test]
    fn generated_ids_are_non_empty() {
        assert!(!ProjectId::generate().as_str().is_empty());
        assert!(!ScenarioId::generate().as_str().is_empty());
        assert!(!TestCaseId::generate().as_str().is_empty());
        assert!(!DataSetId::generate().as_str().is_empty());
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = ScenarioId::generate();
        let b = ScenarioId::generate();
        assert_ne!(a, b, "Two generated IDs must never collide");
    }

    #[test]
    fn node_id_from_scenario_id() {
        let id = ScenarioId::new("scn-1").expect("valid scenario ID");
        let node: NodeId = id.clone().into();
        assert_eq!(node, NodeId::Scenario(id));
    }

    #[test]
    fn node_id_from_test_case_id() {
        let id = TestCaseId::new("tc-1").expect("valid test case ID");
        let node: NodeId = id.clone().into();
        assert_eq!(node, NodeId::TestCase(id));
    }

    #[test]
    fn node_ids_of_different_kinds_are_unequal() {
        let scenario = NodeId::Scenario(ScenarioId::new("x").expect("valid ID"));
        let case = NodeId::TestCase(TestCaseId::new("x").expect("valid ID"));
        assert_ne!(
            scenario, case,
            "Same raw string in different ID kinds must not collide"
        );
    }

    #[test]
    fn node_id_display_is_prefixed_by_kind() {
        let scenario = NodeId::Scenario(ScenarioId::new("scn-1").expect("valid ID"));
        assert_eq!(scenario.to_string(), "scenario/scn-1");
        let case = NodeId::TestCase(TestCaseId::new("tc-1").expect("valid ID"));
        assert_eq!(case.to_string(), "test-case/tc-1");
    }
}
