//! Typed entity identifiers.
//!
//! # Responsibility
//! - Give every entity kind a named id alias so signatures stay explicit.
//!
//! # Invariants
//! - Ids are v4 UUIDs generated once at entity creation and never reused.

use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;
/// Stable identifier for a task.
pub type TaskId = Uuid;
/// Stable identifier for a user account.
pub type UserId = Uuid;
/// Stable identifier for a milestone.
pub type MilestoneId = Uuid;
/// Stable identifier for a milestone submission.
pub type SubmissionId = Uuid;
/// Stable identifier for a feedback thread.
pub type ThreadId = Uuid;
/// Stable identifier for one message inside a feedback thread.
pub type MessageId = Uuid;
