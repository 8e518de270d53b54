//! Feedback thread and message models.
//!
//! # Responsibility
//! - Define the conversation records attached to a submission.
//!
//! # Invariants
//! - Messages are append-only and kept in post order.
//! - `resolved` is recomputed from the most recently appended message only:
//!   it becomes the negation of that message's `requires_action` flag.
//!   (Source-faithful; see the open question in DESIGN.md.)

use crate::model::ids::{MessageId, SubmissionId, ThreadId, UserId};
use crate::model::{normalize_attachments, now_epoch_ms};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reviewer sentiment tag on a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One message inside a feedback thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackMessage {
    /// Stable message id.
    pub id: MessageId,
    /// Posting user.
    pub author_id: UserId,
    /// Epoch ms post timestamp.
    pub posted_at: i64,
    /// Message body.
    pub content: String,
    /// Whether the author expects a follow-up action.
    pub requires_action: bool,
    /// Sentiment tag.
    pub sentiment: Sentiment,
    /// Attachment URLs.
    pub attachments: Vec<String>,
}

/// Input shape for `add_feedback_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub author_id: UserId,
    pub content: String,
    pub requires_action: bool,
    pub sentiment: Sentiment,
    pub attachments: Vec<String>,
}

impl MessageDraft {
    pub fn new(author_id: UserId, content: impl Into<String>) -> Self {
        Self {
            author_id,
            content: content.into(),
            requires_action: false,
            sentiment: Sentiment::Neutral,
            attachments: Vec::new(),
        }
    }

    pub(crate) fn into_message(self) -> FeedbackMessage {
        FeedbackMessage {
            id: Uuid::new_v4(),
            author_id: self.author_id,
            posted_at: now_epoch_ms(),
            content: self.content,
            requires_action: self.requires_action,
            sentiment: self.sentiment,
            attachments: normalize_attachments(&self.attachments),
        }
    }
}

/// Conversation attached to one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackThread {
    /// Stable thread id.
    pub id: ThreadId,
    /// Owning submission.
    pub submission_id: SubmissionId,
    /// Thread subject; upsert key together with `submission_id`.
    pub subject: String,
    /// Resolution flag; driven by the latest message only.
    pub resolved: bool,
    /// Ordered messages.
    pub messages: Vec<FeedbackMessage>,
}

impl FeedbackThread {
    /// Creates an empty, unresolved thread.
    pub fn new(submission_id: SubmissionId, subject: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission_id,
            subject: subject.into(),
            resolved: false,
            messages: Vec::new(),
        }
    }

    /// Appends a message and rewrites `resolved` from it.
    pub(crate) fn push_message(&mut self, message: FeedbackMessage) {
        self.resolved = !message.requires_action;
        self.messages.push(message);
    }
}
