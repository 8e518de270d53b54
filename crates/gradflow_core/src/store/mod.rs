//! In-memory entity store.
//!
//! # Responsibility
//! - Hold the normalized dictionaries for every entity kind.
//! - Expose the mutation API as the only write path into domain state.
//! - Keep cross-references (project `task_ids`, submission `thread_ids`)
//!   consistent on every mutation.
//!
//! # Invariants
//! - A failed mutation leaves the store unchanged.
//! - `revision` increases by exactly one per successful mutation, so UI
//!   layers can diff by counter instead of deep comparison.
//! - Entities are owned by exactly one dictionary; links are ids only.

mod feedback;
mod milestones;
mod projects;
mod tasks;

use crate::model::ids::{MilestoneId, ProjectId, SubmissionId, TaskId, ThreadId, UserId};
use crate::model::milestone::{Milestone, MilestoneStatus};
use crate::model::project::{Project, ProjectStatus, ProjectValidationError};
use crate::model::submission::Submission;
use crate::model::task::{Task, TaskValidationError};
use crate::model::user::{User, UserValidationError};
use crate::model::feedback::FeedbackThread;
use crate::selection::SelectionState;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by all store mutations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Typed failure surface for store mutations.
///
/// The source system silently ignored invalid-id mutations; this core
/// surfaces them instead and guarantees unchanged state on `Err`.
#[derive(Debug)]
pub enum StoreError {
    /// Target project does not exist.
    ProjectNotFound(ProjectId),
    /// Target task does not exist.
    TaskNotFound(TaskId),
    /// Target milestone does not exist.
    MilestoneNotFound(MilestoneId),
    /// Target submission does not exist.
    SubmissionNotFound(SubmissionId),
    /// Target feedback thread does not exist.
    ThreadNotFound(ThreadId),
    /// Project exists but its status blocks approval.
    ProjectNotApprovable {
        id: ProjectId,
        status: ProjectStatus,
    },
    /// Milestone status blocks `submit_milestone`.
    MilestoneNotSubmittable {
        id: MilestoneId,
        status: MilestoneStatus,
    },
    /// Project record failed validation.
    InvalidProject(ProjectValidationError),
    /// Task record failed validation.
    InvalidTask(TaskValidationError),
    /// User record failed validation.
    InvalidUser(UserValidationError),
    /// Thread subject is blank after trim.
    BlankSubject,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::MilestoneNotFound(id) => write!(f, "milestone not found: {id}"),
            Self::SubmissionNotFound(id) => write!(f, "submission not found: {id}"),
            Self::ThreadNotFound(id) => write!(f, "feedback thread not found: {id}"),
            Self::ProjectNotApprovable { id, status } => {
                write!(f, "project {id} cannot be approved from {status:?}")
            }
            Self::MilestoneNotSubmittable { id, status } => {
                write!(f, "milestone {id} does not accept submissions from {status:?}")
            }
            Self::InvalidProject(err) => write!(f, "{err}"),
            Self::InvalidTask(err) => write!(f, "{err}"),
            Self::InvalidUser(err) => write!(f, "{err}"),
            Self::BlankSubject => write!(f, "thread subject must not be blank"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProject(err) => Some(err),
            Self::InvalidTask(err) => Some(err),
            Self::InvalidUser(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProjectValidationError> for StoreError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidProject(value)
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::InvalidTask(value)
    }
}

impl From<UserValidationError> for StoreError {
    fn from(value: UserValidationError) -> Self {
        Self::InvalidUser(value)
    }
}

/// Single source of truth for session-local domain state.
///
/// Constructed once per session and passed explicitly to consumers; there
/// is no process-wide singleton. One logical writer mutates it at a time,
/// so no interior locking exists.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: HashMap<ProjectId, Project>,
    tasks: HashMap<TaskId, Task>,
    users: HashMap<UserId, User>,
    milestones: HashMap<MilestoneId, Milestone>,
    submissions: HashMap<SubmissionId, Submission>,
    threads: HashMap<ThreadId, FeedbackThread>,
    selection: SelectionState,
    revision: u64,
}

impl ProjectStore {
    /// Creates an empty store at revision zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic change counter; bumps once per successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn bump(&mut self) {
        self.revision += 1;
    }

    /// Looks up one project.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Looks up one task.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Looks up one user.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Looks up one milestone.
    pub fn milestone(&self, id: MilestoneId) -> Option<&Milestone> {
        self.milestones.get(&id)
    }

    /// Looks up one submission.
    pub fn submission(&self, id: SubmissionId) -> Option<&Submission> {
        self.submissions.get(&id)
    }

    /// Looks up one feedback thread.
    pub fn thread(&self, id: ThreadId) -> Option<&FeedbackThread> {
        self.threads.get(&id)
    }

    /// Lists a project's tasks in board order (`task_ids` order).
    ///
    /// Dangling ids are skipped; the mutation API never produces them.
    pub fn tasks_for_project(&self, project_id: ProjectId) -> StoreResult<Vec<&Task>> {
        let project = self
            .projects
            .get(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        Ok(project
            .task_ids
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id))
            .collect())
    }

    /// Lists a project's milestones in creation order.
    pub fn milestones_for_project(&self, project_id: ProjectId) -> StoreResult<Vec<&Milestone>> {
        let project = self
            .projects
            .get(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        Ok(project
            .milestone_ids
            .iter()
            .filter_map(|milestone_id| self.milestones.get(milestone_id))
            .collect())
    }

    /// Lists a project's members in invite order.
    pub fn members_for_project(&self, project_id: ProjectId) -> StoreResult<Vec<&User>> {
        let project = self
            .projects
            .get(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        Ok(project
            .member_ids
            .iter()
            .filter_map(|user_id| self.users.get(user_id))
            .collect())
    }

    /// Read access to UI selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Write access to UI selection state.
    ///
    /// Selection changes carry no entity invariants (existence checks are
    /// left to callers) and do not bump `revision`.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Sets or clears the active project.
    pub fn select_project(&mut self, project_id: Option<ProjectId>) {
        self.selection.select_project(project_id);
    }

    /// Sets or clears the active task.
    pub fn set_active_task(&mut self, task_id: Option<TaskId>) {
        self.selection.set_active_task(task_id);
    }

    /// Opens or closes one modal dialog.
    pub fn set_modal_state(&mut self, key: crate::selection::ModalKey, open: bool) {
        self.selection.set_modal_state(key, open);
    }
}
