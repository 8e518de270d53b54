//! Task model and board column status.
//!
//! # Responsibility
//! - Define the task record, board status and priority enums.
//! - Provide draft/patch shapes for create and shallow-merge update flows.
//! - Normalize tag input (trim, lowercase, dedupe).
//!
//! # Invariants
//! - `project_id` must reference an existing project; the store keeps the
//!   task id present in that project's `task_ids` exactly once.
//! - `status` is always one of the four fixed board columns.

use crate::model::ids::{ProjectId, TaskId, UserId};
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Fixed board column a task currently sits in.
///
/// Transitions are unrestricted: a drag from `done` back to `backlog` is
/// legal and carries no guard logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Captured but not started.
    Backlog,
    /// Actively worked on.
    InProgress,
    /// Waiting for review.
    Review,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// All columns in board display order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];
}

/// Task priority shown on cards and used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// One checklist entry on a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Entry label.
    pub label: String,
    /// Completion flag.
    pub done: bool,
}

impl ChecklistItem {
    /// Creates an unchecked checklist entry.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }
}

/// Validation failures for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is blank after trim.
    BlankTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable task id.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Card title.
    pub title: String,
    /// Markdown description body.
    pub description: String,
    /// Current board column.
    pub status: TaskStatus,
    /// Assigned member, if any.
    pub assignee_id: Option<UserId>,
    /// Member who filed the task; defaults to the project leader.
    pub reporter_id: UserId,
    /// Priority tag.
    pub priority: TaskPriority,
    /// Normalized lowercase tags.
    pub tags: Vec<String>,
    /// Optional due date in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Ordered checklist entries.
    pub checklist: Vec<ChecklistItem>,
    /// Attachment URLs.
    pub attachments: Vec<String>,
    /// Epoch ms creation timestamp.
    pub created_at: i64,
    /// Epoch ms last-update timestamp.
    pub updated_at: i64,
}

impl Task {
    /// Checks record invariants before the store accepts a write.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }
}

/// Input shape for `create_task`.
///
/// Omitted fields fall back to store defaults: status `backlog`, priority
/// `medium`, reporter = project leader.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<UserId>,
    pub tags: Vec<String>,
    pub due_date: Option<i64>,
    pub checklist: Vec<ChecklistItem>,
    pub attachments: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with only a title; everything else defaulted.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn into_task(self, project_id: ProjectId, reporter_id: UserId) -> Task {
        let now = now_epoch_ms();
        Task {
            id: Uuid::new_v4(),
            project_id,
            title: self.title,
            description: self.description,
            status: self.status.unwrap_or(TaskStatus::Backlog),
            assignee_id: self.assignee_id,
            reporter_id,
            priority: self.priority.unwrap_or(TaskPriority::Medium),
            tags: normalize_tags(&self.tags),
            due_date: self.due_date,
            checklist: self.checklist,
            attachments: crate::model::normalize_attachments(&self.attachments),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Shallow-merge update shape for `update_task`.
///
/// `None` means "leave unchanged". Nested `Option` fields distinguish
/// "unchanged" from "explicitly cleared".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: Option<Option<UserId>>,
    pub tags: Option<Vec<String>>,
    pub due_date: Option<Option<i64>>,
    pub checklist: Option<Vec<ChecklistItem>>,
    pub attachments: Option<Vec<String>>,
}

impl TaskPatch {
    /// Convenience patch that only reassigns the task.
    pub fn assignee(assignee_id: Option<UserId>) -> Self {
        Self {
            assignee_id: Some(assignee_id),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee_id) = self.assignee_id {
            task.assignee_id = assignee_id;
        }
        if let Some(tags) = self.tags {
            task.tags = normalize_tags(&tags);
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(checklist) = self.checklist {
            task.checklist = checklist;
        }
        if let Some(attachments) = self.attachments {
            task.attachments = crate::model::normalize_attachments(&attachments);
        }
        task.updated_at = now_epoch_ms();
    }
}

/// Normalizes one tag value: trim + lowercase, blanks dropped.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes and deduplicates tag values; output is sorted.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}
