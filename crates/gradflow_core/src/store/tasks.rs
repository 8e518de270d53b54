//! Task mutations: create, patch, move across board columns.
//!
//! # Responsibility
//! - Keep `Project::task_ids` and the task dictionary in step.
//! - Maintain board ordering: a status move sends the task id to the tail
//!   of its project's `task_ids`, so each column shows most-recently-moved
//!   tasks last.
//!
//! # Invariants
//! - Every created task id appears exactly once in its project's `task_ids`.
//! - `update_task_status` with the current status is idempotent on the
//!   resulting board grouping (the task stays in exactly one column).

use crate::model::ids::{ProjectId, TaskId};
use crate::model::now_epoch_ms;
use crate::model::task::{TaskDraft, TaskPatch, TaskStatus};
use crate::store::{ProjectStore, StoreError, StoreResult};
use log::{debug, info};

impl ProjectStore {
    /// Creates a task in the given project and returns its id.
    ///
    /// Defaults unspecified draft fields: status `backlog`, priority
    /// `medium`, reporter = project leader.
    pub fn create_task(&mut self, project_id: ProjectId, draft: TaskDraft) -> StoreResult<TaskId> {
        let project = self
            .projects
            .get(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;

        let task = draft.into_task(project_id, project.leader_id);
        task.validate()?;

        let task_id = task.id;
        self.tasks.insert(task_id, task);
        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        project.task_ids.push(task_id);
        project.updated_at = now_epoch_ms();
        self.bump();
        info!("event=task_created module=store status=ok project_id={project_id} task_id={task_id}");
        Ok(task_id)
    }

    /// Shallow-merges patch fields into an existing task.
    ///
    /// `updated_at` is bumped even when the patch is empty; callers decide
    /// whether an empty patch is worth issuing.
    pub fn update_task(&mut self, task_id: TaskId, patch: TaskPatch) -> StoreResult<()> {
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;

        let mut merged = task.clone();
        patch.apply(&mut merged);
        merged.validate()?;
        *task = merged;
        self.bump();
        debug!("event=task_updated module=store status=ok task_id={task_id}");
        Ok(())
    }

    /// Moves a task to another board column.
    ///
    /// The task id is moved to the end of the owning project's `task_ids`
    /// ordering, which the board projector preserves per column.
    pub fn update_task_status(&mut self, task_id: TaskId, status: TaskStatus) -> StoreResult<()> {
        let task = self
            .tasks
            .get_mut(&task_id)
            .ok_or(StoreError::TaskNotFound(task_id))?;
        let project_id = task.project_id;

        // Resolve the project before touching the task so a dangling
        // project reference leaves the task untouched.
        if !self.projects.contains_key(&project_id) {
            return Err(StoreError::ProjectNotFound(project_id));
        }

        task.status = status;
        task.updated_at = now_epoch_ms();

        let project = self
            .projects
            .get_mut(&project_id)
            .ok_or(StoreError::ProjectNotFound(project_id))?;
        project.task_ids.retain(|id| *id != task_id);
        project.task_ids.push(task_id);
        project.updated_at = now_epoch_ms();
        self.bump();
        debug!("event=task_moved module=store status=ok task_id={task_id} column={status:?}");
        Ok(())
    }
}
