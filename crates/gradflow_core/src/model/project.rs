//! Project model and board column definitions.
//!
//! # Responsibility
//! - Define the project record, status enum and ordered column definitions.
//! - Validate membership invariants before store writes.
//!
//! # Invariants
//! - `member_ids` always contains `leader_id`.
//! - `task_ids`/`milestone_ids` only hold ids that exist in the store
//!   dictionaries; the store enforces this on every mutation.
//! - `task_ids` ordering is the board ordering (most recently moved last).

use crate::model::ids::{MilestoneId, ProjectId, TaskId, UserId};
use crate::model::now_epoch_ms;
use crate::model::task::TaskStatus;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Proposed, waiting for approval.
    Pending,
    /// Approved and running.
    Active,
    /// Closed; read-only for the UI.
    Archived,
}

/// One board lane definition carried on the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Task status this lane renders.
    pub status: TaskStatus,
    /// Display title.
    pub title: String,
}

impl ColumnDef {
    /// The four fixed lanes in display order.
    pub fn defaults() -> Vec<ColumnDef> {
        vec![
            ColumnDef {
                status: TaskStatus::Backlog,
                title: "Backlog".to_string(),
            },
            ColumnDef {
                status: TaskStatus::InProgress,
                title: "In Progress".to_string(),
            },
            ColumnDef {
                status: TaskStatus::Review,
                title: "Review".to_string(),
            },
            ColumnDef {
                status: TaskStatus::Done,
                title: "Done".to_string(),
            },
        ]
    }
}

/// Validation failures for project records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Name is blank after trim.
    BlankName,
    /// `member_ids` does not contain `leader_id`.
    LeaderNotMember(UserId),
    /// Column definitions are empty or repeat a status.
    InvalidColumns,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "project name must not be blank"),
            Self::LeaderNotMember(id) => {
                write!(f, "project leader {id} must appear in member list")
            }
            Self::InvalidColumns => write!(f, "project columns must be non-empty and unique"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project id.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Markdown description body.
    pub description: String,
    /// Lifecycle status.
    pub status: ProjectStatus,
    /// Owning leader; always present in `member_ids`.
    pub leader_id: UserId,
    /// Ordered member references.
    pub member_ids: Vec<UserId>,
    /// Ordered board lane definitions.
    pub columns: Vec<ColumnDef>,
    /// Ordered task references; tail = most recently moved.
    pub task_ids: Vec<TaskId>,
    /// Ordered milestone references.
    pub milestone_ids: Vec<MilestoneId>,
    /// Initial proposal assets (URLs).
    pub asset_urls: Vec<String>,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms last-update timestamp.
    pub updated_at: i64,
}

impl Project {
    /// Creates a pending project owned by `leader_id`.
    ///
    /// # Invariants
    /// - Status starts as `Pending`.
    /// - `member_ids` starts as `[leader_id]`.
    /// - Columns start as the four fixed lanes.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        leader_id: UserId,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            status: ProjectStatus::Pending,
            leader_id,
            member_ids: vec![leader_id],
            columns: ColumnDef::defaults(),
            task_ids: Vec::new(),
            milestone_ids: Vec::new(),
            asset_urls: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns whether the given user is a project member.
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.member_ids.contains(&user_id)
    }

    /// Checks record invariants before the store accepts a write.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::BlankName);
        }
        if !self.has_member(self.leader_id) {
            return Err(ProjectValidationError::LeaderNotMember(self.leader_id));
        }
        let mut seen = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            if seen.contains(&column.status) {
                return Err(ProjectValidationError::InvalidColumns);
            }
            seen.push(column.status);
        }
        if seen.is_empty() {
            return Err(ProjectValidationError::InvalidColumns);
        }
        Ok(())
    }
}

/// Input shape for `create_project`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// When set, the store synthesizes an initial milestone with this
    /// deadline.
    pub due_date: Option<i64>,
    /// Proposal asset URLs attached at creation.
    pub assets: Vec<String>,
}

impl ProjectDraft {
    /// Creates a draft with name and description only.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnDef, Project, ProjectStatus, ProjectValidationError};
    use crate::model::task::TaskStatus;
    use uuid::Uuid;

    #[test]
    fn new_project_starts_pending_with_leader_as_member() {
        let leader = Uuid::new_v4();
        let project = Project::new("UX Research", "eye-tracking study", leader);

        assert_eq!(project.status, ProjectStatus::Pending);
        assert_eq!(project.member_ids, vec![leader]);
        assert_eq!(project.columns.len(), 4);
        assert!(project.task_ids.is_empty());
        assert_eq!(project.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_leader_missing_from_members() {
        let mut project = Project::new("p", "d", Uuid::new_v4());
        project.member_ids.clear();
        assert!(matches!(
            project.validate(),
            Err(ProjectValidationError::LeaderNotMember(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_columns() {
        let mut project = Project::new("p", "d", Uuid::new_v4());
        project.columns.push(ColumnDef {
            status: TaskStatus::Done,
            title: "Done again".to_string(),
        });
        assert_eq!(
            project.validate(),
            Err(ProjectValidationError::InvalidColumns)
        );
    }
}
