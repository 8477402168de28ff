//! Submission flow: user message, deferred reply, bot message.

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, warn};

use crate::chat::Message;
use crate::config::ChatConfig;
use crate::conversation::ConversationState;
use crate::ids::SubmissionId;
use crate::responder::{Responder, FALLBACK_REPLY};

/// A bot reply that has been scheduled but not yet appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Submission this reply answers.
    pub id: SubmissionId,
    /// Raw draft text as submitted.
    pub input: String,
    /// How long to wait before delivering.
    pub delay: Duration,
}

/// Defers a reply until its delay has elapsed.
///
/// Implementations hand the [`PendingReply`] back to
/// [`InteractionController::deliver_reply`] once `delay` has passed. Every
/// call schedules an independent reply; nothing is serialized.
pub trait ReplyScheduler {
    fn schedule(&self, pending: PendingReply);
}

/// Whether any submission is waiting for its reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyState {
    Idle,
    AwaitingReply { pending: usize },
}

/// Orchestrates the conversation on behalf of the view.
pub struct InteractionController<S> {
    state: ConversationState,
    responder: Responder,
    scheduler: S,
    reply_delay: Duration,
    pending: HashSet<SubmissionId>,
}

impl<S: ReplyScheduler> InteractionController<S> {
    /// Create a controller with an empty conversation.
    pub fn new(config: &ChatConfig, responder: Responder, scheduler: S) -> Self {
        Self {
            state: ConversationState::with_max_messages(config.max_messages),
            responder,
            scheduler,
            reply_delay: config.reply_delay,
            pending: HashSet::new(),
        }
    }

    /// Conversation log and draft.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Draft access for keystroke edits.
    pub fn state_mut(&mut self) -> &mut ConversationState {
        &mut self.state
    }

    /// Replace the draft text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Whether the send control is enabled.
    pub fn can_send(&self) -> bool {
        self.state.can_send()
    }

    /// Submit the current draft.
    ///
    /// A draft that is empty after trimming is ignored. Otherwise the
    /// untrimmed text is logged as a user message, the draft is cleared and
    /// a reply is scheduled.
    pub fn submit(&mut self) -> Option<SubmissionId> {
        if self.state.current_draft().trim().is_empty() {
            debug!("Ignoring empty submission");
            return None;
        }

        let input = self.state.current_draft().to_string();
        self.state.append_message(Message::user(input.clone()));
        self.state.draft_mut().clear();

        let id = SubmissionId::generate();
        self.pending.insert(id.clone());
        debug!(id = %id, pending = self.pending.len(), "Scheduling reply");

        self.scheduler.schedule(PendingReply {
            id: id.clone(),
            input,
            delay: self.reply_delay,
        });
        Some(id)
    }

    /// Append the bot reply for a submission whose delay has elapsed.
    ///
    /// The message is stamped now, not at submission time.
    pub fn deliver_reply(&mut self, pending: PendingReply) -> Message {
        if !self.pending.remove(&pending.id) {
            warn!(id = %pending.id, "Delivering reply for untracked submission");
        }

        let reply = self.responder.respond(&pending.input.to_lowercase());
        debug!(id = %pending.id, matched = reply != FALLBACK_REPLY, "Reply delivered");
        let message = Message::bot(reply);
        self.state.append_message(message.clone());
        message
    }

    /// Number of replies still waiting on their delay.
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Whether `id` is still waiting for its reply.
    pub fn is_pending(&self, id: &SubmissionId) -> bool {
        self.pending.contains(id)
    }

    pub fn reply_state(&self) -> ReplyState {
        match self.pending.len() {
            0 => ReplyState::Idle,
            pending => ReplyState::AwaitingReply { pending },
        }
    }
}
