//! UI-facing selection state.
//!
//! # Responsibility
//! - Track which project/task is active and which modals are open.
//!
//! # Invariants
//! - Selection carries no entity invariants; existence checks are left to
//!   callers, and stale ids are harmless (lookups just return `None`).

use crate::model::ids::{ProjectId, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Modal dialogs the shell can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKey {
    TaskDetail,
    CreateTask,
    InviteMember,
    SubmitMilestone,
}

/// Active project/task and open-modal bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    active_project: Option<ProjectId>,
    active_task: Option<TaskId>,
    open_modals: BTreeSet<ModalKey>,
}

impl SelectionState {
    /// Sets or clears the active project.
    ///
    /// Clearing or switching projects also clears the active task.
    pub fn select_project(&mut self, project_id: Option<ProjectId>) {
        if project_id != self.active_project {
            self.active_task = None;
        }
        self.active_project = project_id;
    }

    /// Sets or clears the active task.
    pub fn set_active_task(&mut self, task_id: Option<TaskId>) {
        self.active_task = task_id;
    }

    /// Opens or closes one modal.
    pub fn set_modal_state(&mut self, key: ModalKey, open: bool) {
        if open {
            self.open_modals.insert(key);
        } else {
            self.open_modals.remove(&key);
        }
    }

    /// Currently active project.
    pub fn active_project(&self) -> Option<ProjectId> {
        self.active_project
    }

    /// Currently active task.
    pub fn active_task(&self) -> Option<TaskId> {
        self.active_task
    }

    /// Whether the given modal is open.
    pub fn is_modal_open(&self, key: ModalKey) -> bool {
        self.open_modals.contains(&key)
    }
}
