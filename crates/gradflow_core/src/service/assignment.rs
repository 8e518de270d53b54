//! Task reassignment flow for the task-detail dialog.
//!
//! # Responsibility
//! - Load member options for a task from an external directory collaborator.
//! - Guard submission: no selection, unchanged assignee, or an in-flight
//!   request all keep the submit button disabled.
//! - Commit the reassignment through `ProjectStore::update_task`.
//!
//! # Invariants
//! - Only one request may be in flight per form; double submission is
//!   prevented by the in-flight flag, not by cancellation.
//! - A selection must come from the loaded member options.

use crate::model::ids::{ProjectId, TaskId, UserId};
use crate::model::task::TaskPatch;
use crate::model::user::User;
use crate::store::{ProjectStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by directory collaborators.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Failure surface of the external member directory.
#[derive(Debug)]
pub enum DirectoryError {
    /// Backend call failed; carries a best-effort message.
    Unavailable(String),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "member directory unavailable: {message}"),
        }
    }
}

impl Error for DirectoryError {}

/// External collaborator resolving project members.
///
/// Backed by the REST accounts service in the application shell; tests
/// stub it with fixed member lists.
pub trait MemberDirectory {
    /// Lists assignable members of one project.
    fn project_members(&self, project_id: ProjectId) -> DirectoryResult<Vec<User>>;
}

/// Errors from the reassignment flow.
#[derive(Debug)]
pub enum AssignmentError {
    /// Store-level failure (missing task/project, validation).
    Store(StoreError),
    /// Directory collaborator failure.
    Directory(DirectoryError),
    /// Selected user is not among the loaded member options.
    NotAProjectMember(UserId),
    /// Submit guard rejected the attempt.
    SubmitBlocked(SubmitBlockReason),
}

/// Why a submit attempt was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlockReason {
    /// Nothing selected yet.
    NoSelection,
    /// Selection equals the current assignee.
    UnchangedAssignee,
    /// A previous request has not completed.
    RequestInFlight,
}

impl Display for AssignmentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Directory(err) => write!(f, "{err}"),
            Self::NotAProjectMember(id) => {
                write!(f, "user {id} is not a member of this project")
            }
            Self::SubmitBlocked(reason) => match reason {
                SubmitBlockReason::NoSelection => write!(f, "no assignee selected"),
                SubmitBlockReason::UnchangedAssignee => {
                    write!(f, "selected assignee is unchanged")
                }
                SubmitBlockReason::RequestInFlight => {
                    write!(f, "a reassignment request is already in flight")
                }
            },
        }
    }
}

impl Error for AssignmentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Directory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for AssignmentError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<DirectoryError> for AssignmentError {
    fn from(value: DirectoryError) -> Self {
        Self::Directory(value)
    }
}

/// Dialog-local state for one reassignment.
///
/// Lifecycle: `open` → `select` → `begin_submit` → await the backend call
/// outside this crate → `commit` on success or `abort` on failure.
#[derive(Debug)]
pub struct AssignmentForm {
    task_id: TaskId,
    current_assignee: Option<UserId>,
    options: Vec<User>,
    selected: Option<UserId>,
    in_flight: bool,
}

impl AssignmentForm {
    /// Opens the form for one task, loading member options from the
    /// directory collaborator.
    pub fn open<D: MemberDirectory>(
        store: &ProjectStore,
        directory: &D,
        task_id: TaskId,
    ) -> Result<Self, AssignmentError> {
        let task = store
            .task(task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let options = directory.project_members(task.project_id)?;
        Ok(Self {
            task_id,
            current_assignee: task.assignee_id,
            options,
            selected: None,
            in_flight: false,
        })
    }

    /// Loaded member options, in directory order.
    pub fn options(&self) -> &[User] {
        &self.options
    }

    /// Current selection.
    pub fn selected(&self) -> Option<UserId> {
        self.selected
    }

    /// Selects a member option, or clears the selection with `None`.
    pub fn select(&mut self, user_id: Option<UserId>) -> Result<(), AssignmentError> {
        if let Some(user_id) = user_id {
            if !self.options.iter().any(|option| option.id == user_id) {
                return Err(AssignmentError::NotAProjectMember(user_id));
            }
        }
        self.selected = user_id;
        Ok(())
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.submit_block().is_none()
    }

    fn submit_block(&self) -> Option<SubmitBlockReason> {
        if self.in_flight {
            return Some(SubmitBlockReason::RequestInFlight);
        }
        match self.selected {
            None => Some(SubmitBlockReason::NoSelection),
            Some(selected) if Some(selected) == self.current_assignee => {
                Some(SubmitBlockReason::UnchangedAssignee)
            }
            Some(_) => None,
        }
    }

    /// Marks the backend request as started and returns the assignee to
    /// send.
    pub fn begin_submit(&mut self) -> Result<UserId, AssignmentError> {
        if let Some(reason) = self.submit_block() {
            return Err(AssignmentError::SubmitBlocked(reason));
        }
        match self.selected {
            Some(selected) => {
                self.in_flight = true;
                Ok(selected)
            }
            None => Err(AssignmentError::SubmitBlocked(SubmitBlockReason::NoSelection)),
        }
    }

    /// Commits a completed backend request into the store.
    pub fn commit(&mut self, store: &mut ProjectStore) -> Result<(), AssignmentError> {
        let selected = self.selected.ok_or(AssignmentError::SubmitBlocked(
            SubmitBlockReason::NoSelection,
        ))?;
        store.update_task(self.task_id, TaskPatch::assignee(Some(selected)))?;
        self.current_assignee = Some(selected);
        self.in_flight = false;
        Ok(())
    }

    /// Clears the in-flight flag after a failed backend request; the store
    /// is left untouched.
    pub fn abort(&mut self) {
        self.in_flight = false;
    }
}
