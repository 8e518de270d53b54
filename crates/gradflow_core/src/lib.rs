//! Core domain logic for GradFlow, an academic capstone project manager.
//! This crate is the single source of truth for in-memory project state:
//! entities, mutations, board projection and selection state.

pub mod board;
pub mod logging;
pub mod model;
pub mod selection;
pub mod service;
pub mod store;

pub use board::{project_board, BoardFilter, BoardLane, BoardView};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::feedback::{FeedbackMessage, FeedbackThread, MessageDraft, Sentiment};
pub use model::ids::{
    MessageId, MilestoneId, ProjectId, SubmissionId, TaskId, ThreadId, UserId,
};
pub use model::milestone::{Milestone, MilestoneDraft, MilestoneStatus};
pub use model::project::{ColumnDef, Project, ProjectDraft, ProjectStatus};
pub use model::submission::{Submission, SubmissionDraft};
pub use model::task::{
    ChecklistItem, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus,
};
pub use model::user::{User, UserRole};
pub use selection::{ModalKey, SelectionState};
pub use service::assignment::{
    AssignmentError, AssignmentForm, DirectoryError, DirectoryResult, MemberDirectory,
    SubmitBlockReason,
};
pub use store::{ProjectStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
