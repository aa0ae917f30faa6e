//! # Thread interaction
//!
//! The three page behaviors of the thread view, written against two seams:
//! [`ThreadPage`] for everything the behaviors read from or write to the page,
//! and [`ForumTransport`] for the forum endpoints. The browser crate provides
//! the real implementations; tests substitute mocks.

pub mod editor;
pub mod poller;
pub mod reply;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{EditMessageConfig, EditMessageRequest};

pub use editor::{MessageEditor, open_edit_dialog};
pub use poller::UpdatePoller;
pub use reply::set_reply_to;

/// Page state the behaviors depend on.
#[cfg_attr(test, mockall::automock)]
pub trait ThreadPage {
    /// Write the hidden reply-target field of the reply form.
    ///
    /// # Errors
    /// Fails when the field is not on the page.
    fn set_reply_target(&self, reply_id: &str) -> Result<()>;

    fn scroll_to_top(&self);

    /// Current displayed content of message `message_id`.
    ///
    /// # Errors
    /// Fails when no content container exists for the message.
    fn message_content(&self, message_id: &str) -> Result<String>;

    /// Replace the displayed content of message `message_id`.
    ///
    /// # Errors
    /// Fails when no content container exists for the message.
    fn set_message_content(&self, message_id: &str, content: &str) -> Result<()>;

    /// Identifier held in the edit dialog's tracking field.
    fn edit_target(&self) -> String;
    fn set_edit_target(&self, message_id: &str);
    /// Text held in the edit dialog's content field.
    fn edit_draft(&self) -> String;
    fn set_edit_draft(&self, draft: &str);
    fn set_edit_error_visible(&self, visible: bool);
    fn show_edit_dialog(&self);
    fn hide_edit_dialog(&self);

    /// Reveal the "thread was updated" notification.
    fn show_update_notice(&self);
}

/// Requests against the forum's thread endpoints.
#[async_trait(?Send)]
pub trait ForumTransport {
    /// GET the update-check URL and return the body of a 200 response.
    ///
    /// # Errors
    /// [`crate::errors::InteractionError::UnexpectedStatus`] for any other
    /// status, [`crate::errors::InteractionError::Transport`] when no
    /// response arrives.
    async fn fetch_update_stamp(&self, url: &str) -> Result<String>;

    /// POST an edit and return the response status.
    ///
    /// # Errors
    /// [`crate::errors::InteractionError::Transport`] when no response arrives.
    async fn submit_edit(&self, config: &EditMessageConfig, request: &EditMessageRequest)
    -> Result<u16>;
}
