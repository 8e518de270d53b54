//! Feedback thread mutations.
//!
//! # Responsibility
//! - Upsert threads keyed by `(submission_id, subject)` and register them
//!   on their submission.
//! - Append messages and rewrite thread resolution state.
//!
//! # Invariants
//! - `upsert_feedback_thread` is idempotent per `(submission_id, subject)`.
//! - `resolved` equals the negation of the newest message's
//!   `requires_action` flag (source-faithful; open question in DESIGN.md).

use crate::model::feedback::{FeedbackThread, MessageDraft};
use crate::model::ids::{MessageId, SubmissionId, ThreadId};
use crate::store::{ProjectStore, StoreError, StoreResult};
use log::{debug, info};

impl ProjectStore {
    /// Returns the thread for `(submission_id, subject)`, creating and
    /// registering it on the submission when none exists yet.
    ///
    /// Subjects are compared after trimming; the stored subject keeps the
    /// trimmed form.
    pub fn upsert_feedback_thread(
        &mut self,
        submission_id: SubmissionId,
        subject: &str,
    ) -> StoreResult<ThreadId> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(StoreError::BlankSubject);
        }

        let submission = self
            .submissions
            .get(&submission_id)
            .ok_or(StoreError::SubmissionNotFound(submission_id))?;

        if let Some(existing) = submission
            .thread_ids
            .iter()
            .filter_map(|thread_id| self.threads.get(thread_id))
            .find(|thread| thread.subject == subject)
        {
            return Ok(existing.id);
        }

        let thread = FeedbackThread::new(submission_id, subject);
        let thread_id = thread.id;
        self.threads.insert(thread_id, thread);

        let submission = self
            .submissions
            .get_mut(&submission_id)
            .ok_or(StoreError::SubmissionNotFound(submission_id))?;
        submission.thread_ids.push(thread_id);
        self.bump();
        info!(
            "event=thread_created module=store status=ok submission_id={submission_id} thread_id={thread_id}"
        );
        Ok(thread_id)
    }

    /// Appends a message to a thread.
    ///
    /// The thread's `resolved` flag becomes `!requires_action` of this
    /// message, regardless of earlier messages.
    pub fn add_feedback_message(
        &mut self,
        thread_id: ThreadId,
        draft: MessageDraft,
    ) -> StoreResult<MessageId> {
        let thread = self
            .threads
            .get_mut(&thread_id)
            .ok_or(StoreError::ThreadNotFound(thread_id))?;

        let message = draft.into_message();
        let message_id = message.id;
        thread.push_message(message);
        self.bump();
        debug!(
            "event=thread_message_added module=store status=ok thread_id={thread_id} message_id={message_id}"
        );
        Ok(message_id)
    }
}
