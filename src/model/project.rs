//! Project records: the parent context a scenario tree belongs to.

use crate::model::{ProjectId, ValidationError};
use chrono::{DateTime, Utc};
use std::fmt;

// ===== ProjectStatus =====

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    /// Visible and actively worked on.
    Active,
    /// Created but not yet published to the team.
    #[default]
    Draft,
    /// Retired; kept for reference only.
    Archived,
}

impl ProjectStatus {
    /// Canonical wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Parse a canonical wire label. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(ProjectStatus::Active),
            "draft" => Some(ProjectStatus::Draft),
            "archived" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Project =====

/// The project a dashboard session is scoped to.
///
/// Project lifecycle (creation, document upload, archival) is owned by
/// the backing service; this crate only carries the record as parent
/// context for the scenario tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    owner: String,
    status: ProjectStatus,
    version: String,
    last_updated: DateTime<Utc>,
}

impl Project {
    /// Create a project record. The name is trimmed and must be
    /// non-empty; description and owner may be blank.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        owner: impl Into<String>,
        status: ProjectStatus,
        version: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            description: description.into().trim().to_string(),
            owner: owner.into().trim().to_string(),
            status,
            version: version.into(),
            last_updated,
        })
    }

    /// Project identifier.
    pub fn id(&self) -> &ProjectId {
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

    /// Owning user or team.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Lifecycle status.
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Last-updated timestamp.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

// ===== Tests =====
