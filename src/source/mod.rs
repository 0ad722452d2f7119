//! Data-source collaborators.
//!
//! The dashboard seeds its tree from a backing service and persists
//! edits back to it. This module abstracts that seam behind a unified
//! source enum with two implementations:
//! - [`FileSource`]: a project document on disk in the JSON wire format
//! - [`MockSource`]: canned sample data, used when no backing store is
//!   configured (and handy in tests)
//!
//! Fetches replace the tree wholesale; persists take a full snapshot.
//! Either direction failing leaves the in-memory tree untouched.

use crate::model::{Project, Scenario, SourceError};
use crate::parser::ParsedScenarios;
use std::path::PathBuf;

pub mod file;
pub mod mock;

pub use file::FileSource;
pub use mock::MockSource;

/// Unified data source for project and scenario data.
///
/// Sum type enforces exactly one backing kind per session.
#[derive(Debug)]
pub enum ScenarioSource {
    /// JSON document on disk.
    File(FileSource),
    /// Built-in sample data.
    Mock(MockSource),
}

impl ScenarioSource {
    /// Fetch the project record that scopes the session.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the backing document is missing,
    /// unreadable, or has no usable project record.
    pub fn fetch_project(&self) -> Result<Project, SourceError> {
        match self {
            ScenarioSource::File(f) => f.fetch_project(),
            ScenarioSource::Mock(m) => m.fetch_project(),
        }
    }

    /// Fetch the scenario tree, with any element-level issues found
    /// while loading it.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` only for document-level failures; damaged
    /// elements are reported inside the result instead.
    pub fn fetch_scenarios(&self) -> Result<ParsedScenarios, SourceError> {
        match self {
            ScenarioSource::File(f) => f.fetch_scenarios(),
            ScenarioSource::Mock(m) => m.fetch_scenarios(),
        }
    }

    /// Persist a full snapshot of the session's tree.
    ///
    /// The mock source logs and succeeds; the file source rewrites its
    /// document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if serialization or the write fails. The
    /// in-memory tree is already committed either way; retrying is the
    /// caller's policy.
    pub fn persist(&self, project: &Project, scenarios: &[Scenario]) -> Result<(), SourceError> {
        match self {
            ScenarioSource::File(f) => f.persist(project, scenarios),
            ScenarioSource::Mock(m) => m.persist(project, scenarios),
        }
    }
}

/// Pick the source for a session: a file if a data path is configured,
/// the built-in sample data otherwise.
pub fn detect_source(data_file: Option<PathBuf>) -> ScenarioSource {
    match data_file {
        Some(path) => ScenarioSource::File(FileSource::new(path)),
        None => ScenarioSource::Mock(MockSource::new()),
    }
}

// ===== Tests =====
