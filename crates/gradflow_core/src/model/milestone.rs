//! Milestone model and submission lifecycle.
//!
//! # Responsibility
//! - Define the milestone record and its review state machine.
//! - Expose the small transition predicates the store relies on.
//!
//! # Invariants
//! - `approved` and `graded` are terminal.
//! - Submissions are only accepted from `upcoming` or `changes_requested`;
//!   `changes_requested` is the retry loop back to `submitted`.

use crate::model::ids::{MilestoneId, ProjectId, SubmissionId};
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Milestone/submission review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Deadline ahead, nothing handed in yet.
    Upcoming,
    /// A submission is waiting for a reviewer.
    Submitted,
    /// A teacher is reviewing the latest submission.
    UnderReview,
    /// Reviewer requested changes; a new submission reopens the loop.
    ChangesRequested,
    /// Accepted. Terminal.
    Approved,
    /// Accepted and graded. Terminal.
    Graded,
}

impl MilestoneStatus {
    /// Returns whether this state accepts no further transitions via
    /// `submit_milestone`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::Graded)
    }

    /// Returns whether `submit_milestone` may run from this state.
    pub fn accepts_submission(self) -> bool {
        matches!(self, Self::Upcoming | Self::ChangesRequested)
    }
}

/// Canonical milestone record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Stable milestone id.
    pub id: MilestoneId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Checkpoint name.
    pub name: String,
    /// Markdown description body.
    pub description: String,
    /// Deadline in epoch milliseconds.
    pub deadline: i64,
    /// Review status.
    pub status: MilestoneStatus,
    /// Most recent submission, if any.
    pub latest_submission_id: Option<SubmissionId>,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms last-update timestamp.
    pub updated_at: i64,
}

impl Milestone {
    /// Creates an `upcoming` milestone for the given project.
    pub fn new(
        project_id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        deadline: i64,
    ) -> Self {
        let now = now_epoch_ms();
        Self {
            id: Uuid::new_v4(),
            project_id,
            name: name.into(),
            description: description.into(),
            deadline,
            status: MilestoneStatus::Upcoming,
            latest_submission_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input shape for `create_milestone`.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneDraft {
    pub name: String,
    pub description: String,
    /// Deadline in epoch milliseconds.
    pub deadline: i64,
}

impl MilestoneDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, deadline: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            deadline,
        }
    }
}
