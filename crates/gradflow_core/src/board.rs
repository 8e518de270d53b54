//! Kanban board projection.
//!
//! # Responsibility
//! - Group one project's tasks into the four fixed columns for rendering.
//! - Apply derived filters (assignee, tag) before grouping.
//!
//! # Invariants
//! - Every matching task lands in exactly one lane.
//! - Lane ordering preserves the project's `task_ids` ordering, so the
//!   most recently moved task renders last within its column.
//! - Lanes follow the project's ordered column definitions.

use crate::model::ids::{ProjectId, UserId};
use crate::model::task::{Task, TaskStatus};
use crate::store::{ProjectStore, StoreResult};
use serde::Serialize;

/// Derived board filter options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardFilter {
    /// Keep only tasks assigned to this member.
    pub assignee_id: Option<UserId>,
    /// Keep only tasks carrying this (normalized, lowercase) tag.
    pub tag: Option<String>,
}

impl BoardFilter {
    fn matches(&self, task: &Task) -> bool {
        if let Some(assignee_id) = self.assignee_id {
            if task.assignee_id != Some(assignee_id) {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref() {
            if !task.tags.iter().any(|candidate| candidate == tag) {
                return false;
            }
        }
        true
    }
}

/// One rendered board lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLane {
    /// Status this lane renders.
    pub status: TaskStatus,
    /// Display title from the project's column definition.
    pub title: String,
    /// Ordered tasks, store ordering preserved.
    pub tasks: Vec<Task>,
}

/// Full board projection for one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// Projected project.
    pub project_id: ProjectId,
    /// Lanes in the project's column order.
    pub lanes: Vec<BoardLane>,
}

impl BoardView {
    /// Returns the lane rendering the given status, if the project defines
    /// a column for it.
    pub fn lane(&self, status: TaskStatus) -> Option<&BoardLane> {
        self.lanes.iter().find(|lane| lane.status == status)
    }
}

/// Projects one project's tasks into board lanes.
///
/// Tasks are cloned into the view: the board is a render snapshot, not a
/// live reference into the store.
pub fn project_board(
    store: &ProjectStore,
    project_id: ProjectId,
    filter: &BoardFilter,
) -> StoreResult<BoardView> {
    let project = store
        .project(project_id)
        .ok_or(crate::store::StoreError::ProjectNotFound(project_id))?;
    let ordered = store.tasks_for_project(project_id)?;

    let lanes = project
        .columns
        .iter()
        .map(|column| BoardLane {
            status: column.status,
            title: column.title.clone(),
            tasks: ordered
                .iter()
                .copied()
                .filter(|task| task.status == column.status && filter.matches(task))
                .cloned()
                .collect(),
        })
        .collect();

    Ok(BoardView { project_id, lanes })
}
