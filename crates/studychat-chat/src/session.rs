use studychat_api::CompletionClient;

use crate::conversation::Conversation;

/// Fixed user-facing text for a failed completion call. Raw diagnostic detail
/// stays in the logs.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try asking again.";

/// Result of one submit cycle, as observed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Model turn appended with this text.
    Reply(String),
    /// Completion failed; error turn appended with the fixed message.
    Failed,
    /// Submission dropped client-side (blank input, or a request already in
    /// flight). The conversation is unchanged.
    Dropped,
}

/// One chat session: the conversation plus the submit state machine.
///
/// Per submission: `Idle -> Pending -> Idle`, resolving to either a model
/// turn or an error turn. The `pending` flag is the sole concurrency control:
/// at most one request is in flight, and a second submission while busy is
/// dropped, not queued.
pub struct ChatSession<C> {
    conversation: Conversation,
    client: C,
    pending: bool,
}

impl<C: CompletionClient> ChatSession<C> {
    pub fn new(client: C) -> Self {
        Self {
            conversation: Conversation::new(),
            client,
            pending: false,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[cfg(test)]
    pub(crate) fn force_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Run one submission cycle against the completion client.
    ///
    /// The context window is derived from the conversation before the new
    /// user turn is appended, so the unanswered question never appears in
    /// its own history. Exactly one turn is appended for the response side,
    /// whether the call succeeds or fails, and `pending` is cleared on both
    /// paths.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.pending {
            return SubmitOutcome::Dropped;
        }

        let context = self.conversation.derive_context();
        self.conversation.push_user(trimmed);
        self.pending = true;

        let result = self.client.complete(trimmed, &context).await;
        self.pending = false;

        match result {
            Ok(reply) => {
                self.conversation.push_model(reply.clone());
                SubmitOutcome::Reply(reply)
            }
            Err(_) => {
                self.conversation.push_error(CONNECTION_ERROR_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}
