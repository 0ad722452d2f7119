//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.
//! Mutation goes through [`crate::store::TreeStore`]; these types only
//! expose read accessors publicly.

pub mod data_set;
pub mod error;
pub mod identifiers;
pub mod project;
pub mod scenario;
pub mod test_case;

// Re-export for convenience
pub use data_set::{ScalarValue, TestDataSet, ValueMap};
pub use error::{
    DashboardError, NotFoundError, ParseError, SourceError, StoreError, ValidationError,
};
pub use identifiers::{
    DataSetId, InvalidDataSetId, InvalidProjectId, InvalidScenarioId, InvalidTestCaseId, NodeId,
    ProjectId, ScenarioId, TestCaseId,
};
pub use project::{Project, ProjectStatus};
pub use scenario::{Priority, Scenario};
pub use test_case::TestCase;
