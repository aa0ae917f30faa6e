use serde::{Deserialize, Serialize};

use crate::errors::InteractionError;

/// Status the edit endpoint answers with once the message is stored.
pub const EDIT_SUCCESS_STATUS: u16 = 204;

/// Dialog state for one edit interaction: which message is being edited and
/// the text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target_id: String,
    pub draft: String,
}

/// Body of the edit request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditMessageRequest {
    /// Empty when editing the thread's root message.
    pub reply_id: String,
    pub new_message: String,
}

impl EditMessageRequest {
    /// Build the payload for `session` within thread `thread_id`.
    #[must_use]
    pub fn for_session(thread_id: &str, session: &EditSession) -> Self {
        let reply_id = if session.target_id == thread_id {
            String::new()
        } else {
            session.target_id.clone()
        };
        Self {
            reply_id,
            new_message: session.draft.clone(),
        }
    }

    #[must_use]
    pub fn targets_root(&self) -> bool {
        self.reply_id.is_empty()
    }
}

/// Result of submitting an edit.
#[derive(Debug)]
pub enum EditOutcome {
    /// The server stored the message; the page now shows `content`.
    Saved { message_id: String, content: String },
    /// The server answered with something other than 204.
    Rejected { status: u16 },
    /// No response arrived.
    Failed(InteractionError),
}

impl EditOutcome {
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}
