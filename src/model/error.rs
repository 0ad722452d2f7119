//! Error taxonomy for the dashboard state engine.
//!
//! Three failure domains, composed with `thiserror` and `From`
//! conversions so call sites propagate with `?`:
//!
//! - [`ValidationError`] - malformed or incomplete draft data. Recoverable;
//!   surfaced to the form as a field-level message. Never mutates the store.
//! - [`NotFoundError`] - an operation referenced a nonexistent identifier,
//!   which indicates a stale reference (a cached view or expansion entry
//!   pointing at a deleted entity). Surfaced as a non-fatal notice.
//! - [`SourceError`] - a data-source collaborator failed (missing file,
//!   I/O, malformed document). The store stays in its last-known-good
//!   state; nothing half-applied.
//!
//! Nothing in this crate is fatal to the host process. Every error is
//! local and recoverable by re-issuing a corrected operation.

use crate::model::{DataSetId, ScenarioId, TestCaseId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for dashboard operations.
///
/// Aggregates the domain-specific errors so callers that drive the whole
/// flow (seed from a source, mutate, persist) can use one `Result` type.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A draft or patch failed validation; the store was not touched.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An operation referenced an identifier that no longer exists.
    #[error("Stale reference: {0}")]
    NotFound(#[from] NotFoundError),

    /// A data-source collaborator failed.
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),
}

impl From<StoreError> for DashboardError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => DashboardError::Validation(e),
            StoreError::NotFound(e) => DashboardError::NotFound(e),
        }
    }
}

/// Error from a store mutation that validates a draft against an
/// existing entity: either the target is gone or the new data is bad.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The draft or patch content was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The addressed entity does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Rejection of user-supplied draft data.
///
/// Each variant names the offending field so the form can attach the
/// message to the right input. Validation always runs before any
/// mutation, so a rejected draft leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty (or whitespace-only) after trimming.
    #[error("Name must not be empty")]
    EmptyName,

    /// Description was empty (or whitespace-only) after trimming.
    #[error("Description must not be empty")]
    EmptyDescription,

    /// Expected result was empty (or whitespace-only) after trimming.
    #[error("Expected result must not be empty")]
    EmptyExpectedResult,

    /// Every supplied step was empty after trimming; a test case needs
    /// at least one actionable step.
    #[error("At least one non-empty step is required")]
    NoSteps,
}

/// A live operation addressed an entity that is no longer in the tree.
///
/// This is a stale-reference signal, not a corruption signal: the usual
/// cause is a view or expansion entry that outlived a delete. Callers
/// surface it as a notice and drop the stale reference; no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// No scenario with this identifier.
    #[error("Scenario not found: {id}")]
    Scenario {
        /// The identifier that failed to resolve.
        id: ScenarioId,
    },

    /// No test case with this identifier under the addressed scenario.
    #[error("Test case not found: {id}")]
    TestCase {
        /// The identifier that failed to resolve.
        id: TestCaseId,
    },

    /// No data set with this identifier under the addressed test case.
    #[error("Test data set not found: {id}")]
    DataSet {
        /// The identifier that failed to resolve.
        id: DataSetId,
    },
}

/// Failure at the document (de)serialization boundary.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not syntactically valid JSON. The whole load is
    /// rejected; element-level damage inside valid JSON is reported as
    /// [`crate::parser::ParseIssue`] instead and never fails the load.
    #[error("Invalid JSON document: {message}")]
    InvalidJson {
        /// Parser error message, extracted from `serde_json`.
        message: String,
    },

    /// The project record at the root of a document lacked a required
    /// field. Scenario-level damage is reported as an issue instead,
    /// but without a usable project there is nothing to scope a
    /// session to.
    #[error("Project record is missing required field '{field}'")]
    MissingField {
        /// The missing field name.
        field: &'static str,
    },

    /// The tree could not be serialized back to JSON (for example a
    /// non-finite float in a data-set value).
    #[error("Failed to serialize document: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
}

/// Failure of a data-source collaborator (file or service seam).
///
/// The engine itself never generates these during tree mutation; they
/// occur only while seeding or persisting. A failed fetch or persist
/// leaves the in-memory tree exactly as it was.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing data file does not exist at the given path.
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O failure reading or writing the data file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fetched document could not be parsed or re-serialized.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
