//! Project mutations: create, approve, invite.
//!
//! # Responsibility
//! - Drive the project lifecycle (`pending → active`) and membership list.
//!
//! # Invariants
//! - `invite_member` is idempotent per user id.
//! - A project's leader is always present in `member_ids`.
//! - `create_project` with a due date synthesizes one initial milestone.

use crate::model::ids::ProjectId;
use crate::model::milestone::Milestone;
use crate::model::normalize_attachments;
use crate::model::now_epoch_ms;
use crate::model::project::{Project, ProjectDraft, ProjectStatus};
use crate::model::user::User;
use crate::store::{ProjectStore, StoreError, StoreResult};
use log::info;

const INITIAL_MILESTONE_NAME: &str = "Final delivery";

impl ProjectStore {
    /// Creates a pending project owned by `leader` and returns its id.
    ///
    /// Upserts the leader's user record. When `draft.due_date` is set, an
    /// initial milestone with that deadline is synthesized and linked.
    pub fn create_project(&mut self, leader: User, draft: ProjectDraft) -> StoreResult<ProjectId> {
        leader.validate()?;

        let mut project = Project::new(draft.name, draft.description, leader.id);
        project.asset_urls = normalize_attachments(&draft.assets);
        project.validate()?;

        let project_id = project.id;
        if let Some(deadline) = draft.due_date {
            let milestone = Milestone::new(
                project_id,
                INITIAL_MILESTONE_NAME,
                "Synthesized from the project due date",
                deadline,
            );
            project.milestone_ids.push(milestone.id);
            self.milestones.insert(milestone.id, milestone);
        }

        self.users.insert(leader.id, leader);
        self.projects.insert(project_id, project);
        self.bump();
        info!("event=project_created module=store status=ok project_id={project_id}");
        Ok(project_id)
    }

    /// Transitions a project `pending → active`.
    ///
    /// Re-approving an already active project is an accepted no-op;
    /// archived projects are rejected.
    pub fn approve_project(&mut self, project_id: ProjectId) -> StoreResult<()> {
        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;

        match project.status {
            ProjectStatus::Pending => {
                project.status = ProjectStatus::Active;
                project.updated_at = now_epoch_ms();
                self.bump();
                info!("event=project_approved module=store status=ok project_id={project_id}");
                Ok(())
            }
            ProjectStatus::Active => Ok(()),
            ProjectStatus::Archived => Err(StoreError::ProjectNotApprovable {
                id: project_id,
                status: ProjectStatus::Archived,
            }),
        }
    }

    /// Adds `user` to the project member list, upserting the user record.
    ///
    /// Idempotent: inviting the same user twice leaves their id in
    /// `member_ids` exactly once (the profile is still refreshed).
    pub fn invite_member(&mut self, project_id: ProjectId, user: User) -> StoreResult<()> {
        user.validate()?;

        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;

        if !project.member_ids.contains(&user.id) {
            project.member_ids.push(user.id);
        }
        project.updated_at = now_epoch_ms();
        let user_id = user.id;
        self.users.insert(user_id, user);
        self.bump();
        info!(
            "event=member_invited module=store status=ok project_id={project_id} user_id={user_id}"
        );
        Ok(())
    }
}
