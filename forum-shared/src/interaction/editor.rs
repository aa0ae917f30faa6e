use tracing::{info, warn};

use super::{ForumTransport, ThreadPage};
use crate::errors::Result;
use crate::models::{
    EDIT_SUCCESS_STATUS, EditMessageConfig, EditMessageRequest, EditOutcome, EditSession,
};

/// Open the edit dialog for `message_id`, pre-filled with the message's
/// current content. Any error left over from an earlier attempt is cleared.
///
/// # Errors
/// Fails when the message has no content container; the dialog stays closed.
pub fn open_edit_dialog<P: ThreadPage + ?Sized>(page: &P, message_id: &str) -> Result<EditSession> {
    let draft = page.message_content(message_id)?;
    page.set_edit_target(message_id);
    page.set_edit_draft(&draft);
    page.set_edit_error_visible(false);
    page.show_edit_dialog();
    Ok(EditSession {
        target_id: message_id.to_string(),
        draft,
    })
}

/// Sends the edit dialog's content to the forum for one thread.
#[derive(Debug, Clone)]
pub struct MessageEditor<T> {
    thread_id: String,
    config: EditMessageConfig,
    transport: T,
}

impl<T: ForumTransport> MessageEditor<T> {
    #[must_use]
    pub fn new(thread_id: impl Into<String>, config: EditMessageConfig, transport: T) -> Self {
        Self {
            thread_id: thread_id.into(),
            config,
            transport,
        }
    }

    #[must_use]
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    /// Submit whatever the dialog currently holds.
    ///
    /// On 204 the dialog closes and the displayed message takes the new
    /// content. Anything else keeps the dialog open with the error shown.
    pub async fn submit<P: ThreadPage + ?Sized>(&self, page: &P) -> EditOutcome {
        let session = EditSession {
            target_id: page.edit_target(),
            draft: page.edit_draft(),
        };
        let request = EditMessageRequest::for_session(&self.thread_id, &session);

        match self.transport.submit_edit(&self.config, &request).await {
            Ok(EDIT_SUCCESS_STATUS) => {
                page.hide_edit_dialog();
                if let Err(error) = page.set_message_content(&session.target_id, &session.draft) {
                    warn!(%error, message_id = %session.target_id, "edited message not on page");
                }
                info!(
                    thread_id = %self.thread_id,
                    message_id = %session.target_id,
                    "message edited"
                );
                EditOutcome::Saved {
                    message_id: session.target_id,
                    content: session.draft,
                }
            }
            Ok(status) => {
                page.set_edit_error_visible(true);
                warn!(status, url = %self.config.url, "edit rejected");
                EditOutcome::Rejected { status }
            }
            Err(error) => {
                page.set_edit_error_visible(true);
                warn!(%error, url = %self.config.url, "edit request failed");
                EditOutcome::Failed(error)
            }
        }
    }
}
