//! Milestone submission model.
//!
//! # Responsibility
//! - Define the deliverable record produced by `submit_milestone`.
//!
//! # Invariants
//! - `status` mirrors the owning milestone's status at the time of the
//!   relevant transition; the store keeps both in step.
//! - `thread_ids` only hold ids that exist in the feedback dictionary.

use crate::model::ids::{MilestoneId, ProjectId, SubmissionId, ThreadId, UserId};
use crate::model::milestone::MilestoneStatus;
use crate::model::{normalize_attachments, now_epoch_ms};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Deliverable record handed in against a milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    /// Stable submission id.
    pub id: SubmissionId,
    /// Milestone this was handed in against.
    pub milestone_id: MilestoneId,
    /// Owning project, denormalized for cheap lookups.
    pub project_id: ProjectId,
    /// Member who handed it in.
    pub submitter_id: UserId,
    /// Epoch ms hand-in timestamp.
    pub submitted_at: i64,
    /// Review status; mirrors the milestone.
    pub status: MilestoneStatus,
    /// Summary text shown in the review panel.
    pub summary: String,
    /// Attachment URLs.
    pub attachments: Vec<String>,
    /// Ordered feedback thread references.
    pub thread_ids: Vec<ThreadId>,
    /// Numeric grade, set once the milestone reaches `graded`.
    pub grade: Option<f64>,
}

impl Submission {
    /// Creates a `submitted` deliverable from draft input.
    pub(crate) fn from_draft(
        milestone_id: MilestoneId,
        project_id: ProjectId,
        draft: SubmissionDraft,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            milestone_id,
            project_id,
            submitter_id: draft.submitter_id,
            submitted_at: now_epoch_ms(),
            status: MilestoneStatus::Submitted,
            summary: draft.summary,
            attachments: normalize_attachments(&draft.assets),
            thread_ids: Vec::new(),
            grade: None,
        }
    }
}

/// Input shape for `submit_milestone`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionDraft {
    /// Member handing in the deliverable.
    pub submitter_id: UserId,
    /// Summary text.
    pub summary: String,
    /// Uploaded asset URLs.
    pub assets: Vec<String>,
}

impl SubmissionDraft {
    pub fn new(submitter_id: UserId, summary: impl Into<String>) -> Self {
        Self {
            submitter_id,
            summary: summary.into(),
            assets: Vec::new(),
        }
    }
}
