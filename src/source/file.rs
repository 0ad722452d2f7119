//! File-backed project documents.
//!
//! Reads and writes the JSON wire format at a configured path. Loading
//! is read-once: every fetch re-reads the document so external edits
//! are picked up on the next reload.

use crate::model::{Project, Scenario, SourceError};
use crate::parser::{self, ParsedScenarios};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A project document on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given document path. The file is not
    /// touched until the first fetch or persist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch the project record from the document.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::FileNotFound` if the document is absent,
    /// `SourceError::Io` for read failures, and `SourceError::Parse`
    /// if the document or its project record is unusable.
    pub fn fetch_project(&self) -> Result<Project, SourceError> {
        let document = self.read_document()?;
        Ok(document.project)
    }

    /// Fetch the scenario tree from the document.
    ///
    /// Element-level issues are returned alongside the surviving
    /// scenarios, never as an error.
    ///
    /// # Errors
    ///
    /// Same document-level failures as [`FileSource::fetch_project`].
    pub fn fetch_scenarios(&self) -> Result<ParsedScenarios, SourceError> {
        let document = self.read_document()?;
        debug!(
            path = %self.path.display(),
            scenarios = document.scenarios.len(),
            issues = document.issues.len(),
            "loaded scenario tree from file"
        );
        Ok(ParsedScenarios {
            scenarios: document.scenarios,
            issues: document.issues,
        })
    }

    /// Write a full snapshot back to the document path, creating the
    /// parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Parse` if the tree cannot be serialized
    /// and `SourceError::Io` for write failures.
    pub fn persist(&self, project: &Project, scenarios: &[Scenario]) -> Result<(), SourceError> {
        let json = parser::document_to_json(project, scenarios)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), scenarios = scenarios.len(), "persisted project document");
        Ok(())
    }

    fn read_document(&self) -> Result<parser::ParsedDocument, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::FileNotFound {
                path: self.path.clone(),
            });
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(parser::parse_document(&contents)?)
    }
}

// ===== Tests =====
