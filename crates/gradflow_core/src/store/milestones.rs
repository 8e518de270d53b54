//! Milestone mutations and the submission hand-in path.
//!
//! # Responsibility
//! - Create milestones and drive the review state machine.
//! - Produce submission records and keep the milestone's
//!   `latest_submission_id` pointing at the newest one.
//!
//! # Invariants
//! - `submit_milestone` only runs from `upcoming` or `changes_requested`.
//! - A created submission's `milestone_id` matches its milestone, and the
//!   milestone's `latest_submission_id` equals the new submission id.
//! - `set_milestone_status` is an unchecked overwrite; reviewer tooling
//!   owns transition legality there.

use crate::model::ids::{MilestoneId, ProjectId, SubmissionId};
use crate::model::milestone::{Milestone, MilestoneDraft, MilestoneStatus};
use crate::model::now_epoch_ms;
use crate::model::submission::{Submission, SubmissionDraft};
use crate::store::{ProjectStore, StoreError, StoreResult};
use log::info;

impl ProjectStore {
    /// Creates an `upcoming` milestone in the given project.
    pub fn create_milestone(
        &mut self,
        project_id: ProjectId,
        draft: MilestoneDraft,
    ) -> StoreResult<MilestoneId> {
        if !self.projects.contains_key(&project_id) {
            return Err(StoreError::ProjectNotFound(project_id));
        }

        let milestone = Milestone::new(project_id, draft.name, draft.description, draft.deadline);
        let milestone_id = milestone.id;
        self.milestones.insert(milestone_id, milestone);

        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        project.milestone_ids.push(milestone_id);
        project.updated_at = now_epoch_ms();
        self.bump();
        info!(
            "event=milestone_created module=store status=ok project_id={project_id} milestone_id={milestone_id}"
        );
        Ok(milestone_id)
    }

    /// Hands in a deliverable against a milestone.
    ///
    /// Creates a `submitted` submission, links it as the milestone's
    /// `latest_submission_id` and moves the milestone to `submitted`.
    /// `changes_requested` milestones re-enter the loop the same way.
    pub fn submit_milestone(
        &mut self,
        milestone_id: MilestoneId,
        draft: SubmissionDraft,
    ) -> StoreResult<SubmissionId> {
        let milestone = self
            .milestones
            .get(&milestone_id)
            .ok_or(StoreError::MilestoneNotFound(milestone_id))?;
        if !milestone.status.accepts_submission() {
            return Err(StoreError::MilestoneNotSubmittable {
                id: milestone_id,
                status: milestone.status,
            });
        }

        let submission = Submission::from_draft(milestone_id, milestone.project_id, draft);
        let submission_id = submission.id;
        self.submissions.insert(submission_id, submission);

        let milestone = self
            .milestones
            .get_mut(&milestone_id)
            .ok_or(StoreError::MilestoneNotFound(milestone_id))?;
        milestone.latest_submission_id = Some(submission_id);
        milestone.status = MilestoneStatus::Submitted;
        milestone.updated_at = now_epoch_ms();
        self.bump();
        info!(
            "event=milestone_submitted module=store status=ok milestone_id={milestone_id} submission_id={submission_id}"
        );
        Ok(submission_id)
    }

    /// Overwrites a milestone's review status directly.
    ///
    /// The latest submission, when present, mirrors the new status so the
    /// review panel and the milestone list never disagree.
    pub fn set_milestone_status(
        &mut self,
        milestone_id: MilestoneId,
        status: MilestoneStatus,
    ) -> StoreResult<()> {
        let milestone = self
            .milestones
            .get_mut(&milestone_id)
            .ok_or(StoreError::MilestoneNotFound(milestone_id))?;
        milestone.status = status;
        milestone.updated_at = now_epoch_ms();

        if let Some(submission_id) = milestone.latest_submission_id {
            if let Some(submission) = self.submissions.get_mut(&submission_id) {
                submission.status = status;
            }
        }
        self.bump();
        info!(
            "event=milestone_status_set module=store status=ok milestone_id={milestone_id} value={status:?}"
        );
        Ok(())
    }
}
