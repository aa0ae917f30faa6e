use shared::errors::{InteractionError, Result};
use shared::interaction::ThreadPage;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};
use yewdux::Dispatch;

use crate::models::thread_state::{ThreadState, thread_dispatch};

/// Hidden input of the reply form carrying the replied-to message.
pub const REPLY_TARGET_ID: &str = "reply_to_id";
const MESSAGE_ID_PREFIX: &str = "message";

/// Id of the element holding the displayed content of a message.
pub fn message_element_id(message_id: &str) -> String {
    format!("{MESSAGE_ID_PREFIX}{message_id}")
}

/// [`ThreadPage`] over the live document. Server-rendered elements are
/// touched directly; dialog and notice state goes through the store.
pub struct DocumentPage {
    window: Window,
    document: Document,
    dispatch: Dispatch<ThreadState>,
}

impl DocumentPage {
    pub fn current() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| InteractionError::MissingElement("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| InteractionError::MissingElement("document".into()))?;
        Ok(Self {
            window,
            document,
            dispatch: thread_dispatch(),
        })
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| InteractionError::MissingElement(id.to_string()))
    }
}

impl ThreadPage for DocumentPage {
    fn set_reply_target(&self, reply_id: &str) -> Result<()> {
        let input: HtmlInputElement = self
            .element(REPLY_TARGET_ID)?
            .dyn_into()
            .map_err(|_| InteractionError::MissingElement(REPLY_TARGET_ID.to_string()))?;
        input.set_value(reply_id);
        Ok(())
    }

    fn scroll_to_top(&self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn message_content(&self, message_id: &str) -> Result<String> {
        Ok(self.element(&message_element_id(message_id))?.inner_html())
    }

    fn set_message_content(&self, message_id: &str, content: &str) -> Result<()> {
        self.element(&message_element_id(message_id))?.set_inner_html(content);
        Ok(())
    }

    fn edit_target(&self) -> String {
        self.dispatch.get().edit_target.clone()
    }

    fn set_edit_target(&self, message_id: &str) {
        let message_id = message_id.to_string();
        self.dispatch.reduce_mut(move |state| state.edit_target = message_id);
    }

    fn edit_draft(&self) -> String {
        self.dispatch.get().edit_draft.clone()
    }

    fn set_edit_draft(&self, draft: &str) {
        let draft = draft.to_string();
        self.dispatch.reduce_mut(move |state| state.edit_draft = draft);
    }

    fn set_edit_error_visible(&self, visible: bool) {
        self.dispatch.reduce_mut(|state| state.edit_error = visible);
    }

    fn show_edit_dialog(&self) {
        self.dispatch.reduce_mut(|state| state.edit_open = true);
    }

    fn hide_edit_dialog(&self) {
        self.dispatch.reduce_mut(|state| state.edit_open = false);
    }

    fn show_update_notice(&self) {
        self.dispatch.reduce_mut(|state| state.update_available = true);
    }
}
