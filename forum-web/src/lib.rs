//! Thread page interactions for the forum, compiled to WebAssembly.
//!
//! The server-rendered thread page calls `setReplyTo`, `showEditModal` and
//! `editMessage` from its buttons. Loading the module mounts the edit dialog
//! and update notice, and starts the update poller once the page has loaded.

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod models;
pub mod poller;

use std::cell::RefCell;
use std::rc::Rc;

use shared::errors::InteractionError;
use shared::interaction::{self, MessageEditor, ThreadPage, open_edit_dialog};
use shared::models::EditOutcome;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Renderer};

use crate::api::ForumClient;
use crate::components::{ThreadInteractions, ThreadInteractionsProps};
use crate::config::FrontendConfig;
use crate::dom::DocumentPage;
use crate::models::thread_state::thread_context;
use crate::poller::UpdateWatcher;

thread_local! {
    static UPDATE_WATCHER: RefCell<Option<UpdateWatcher<ForumClient>>> = const { RefCell::new(None) };
}

fn log_error(context: &str, error: &InteractionError) {
    web_sys::console::error_1(&format!("{context}: {error}").into());
}

fn install_panic_hook() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::error_1(&format!("Panic: {s}").into());
        } else {
            web_sys::console::error_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));
}

/// Identifiers arrive from templates either as strings or as numbers.
pub fn identifier(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.as_f64() {
        Some(number) if number.is_finite() && number.fract() == 0.0 => format!("{number:.0}"),
        Some(number) => number.to_string(),
        None => String::new(),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    install_panic_hook();
    web_sys::console::log_1(&"Starting forum thread interactions".into());

    let config = FrontendConfig::new();
    mount_components(&config);
    on_page_load(move || start_update_watch(&config));
}

fn mount_components(config: &FrontendConfig) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(&config.mount_id))
    else {
        log_error(
            "Edit dialog unavailable",
            &InteractionError::MissingElement(config.mount_id.clone()),
        );
        return;
    };

    let thread_id = root.get_attribute("data-thread-id").unwrap_or_default();
    let props = ThreadInteractionsProps {
        context: thread_context(),
        on_save: Callback::from(move |()| submit_edit(thread_id.clone())),
    };
    Renderer::<ThreadInteractions>::with_root_and_props(root, props).render();
}

fn on_page_load(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let loaded = window
        .document()
        .is_some_and(|document| document.ready_state() == "complete");
    if loaded {
        callback();
        return;
    }

    let listener = Closure::once_into_js(callback);
    if let Err(error) = window.add_event_listener_with_callback("load", listener.unchecked_ref()) {
        web_sys::console::error_2(&"Could not wait for page load:".into(), &error);
    }
}

/// Start the page's update poller. Only the first call has an effect, and a
/// page without an update-check descriptor is never polled.
pub fn start_update_watch(config: &FrontendConfig) {
    UPDATE_WATCHER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }

        let check = match config.check_update_config() {
            Ok(check) => check,
            Err(InteractionError::MissingDescriptor(_)) => return,
            Err(error) => {
                log_error("Update polling disabled", &error);
                return;
            }
        };
        let page = match DocumentPage::current() {
            Ok(page) => Rc::new(page),
            Err(error) => {
                log_error("Update polling disabled", &error);
                return;
            }
        };

        *slot.borrow_mut() = Some(UpdateWatcher::start(
            check,
            ForumClient::shared(),
            page,
            config.poll_interval_ms,
        ));
    });
}

/// Handles the "Reply" button of a thread's message.
#[wasm_bindgen(js_name = setReplyTo)]
pub fn set_reply_to(reply_id: &JsValue) {
    let reply_id = identifier(reply_id);
    if let Err(error) =
        DocumentPage::current().and_then(|page| interaction::set_reply_to(&page, &reply_id))
    {
        log_error("Reply targeting failed", &error);
    }
}

/// Shows the edit dialog for one of the thread's messages.
#[wasm_bindgen(js_name = showEditModal)]
pub fn show_edit_modal(message_id: &JsValue) {
    let message_id = identifier(message_id);
    if let Err(error) =
        DocumentPage::current().and_then(|page| open_edit_dialog(&page, &message_id).map(drop))
    {
        log_error("Edit dialog unavailable", &error);
    }
}

/// Submits the edit dialog for the thread `thread_id`.
#[wasm_bindgen(js_name = editMessage)]
pub fn edit_message(thread_id: &JsValue) {
    submit_edit(identifier(thread_id));
}

fn submit_edit(thread_id: String) {
    let page = match DocumentPage::current() {
        Ok(page) => page,
        Err(error) => {
            log_error("Edit failed", &error);
            return;
        }
    };
    let config = match FrontendConfig::new().edit_message_config(&thread_id) {
        Ok(config) => config,
        Err(error) => {
            log_error("Edit failed", &error);
            page.set_edit_error_visible(true);
            return;
        }
    };

    spawn_local(async move {
        let editor = MessageEditor::new(thread_id, config, ForumClient::shared());
        match editor.submit(&page).await {
            EditOutcome::Saved { .. } => {}
            EditOutcome::Rejected { status } => {
                web_sys::console::error_1(
                    &format!("Edit rejected with status {status}").into(),
                );
            }
            EditOutcome::Failed(error) => log_error("Edit failed", &error),
        }
    });
}
