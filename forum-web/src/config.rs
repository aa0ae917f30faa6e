//! Frontend configuration module
//!
//! Build-time settings for the thread page plus access to the descriptors the
//! server embeds into the page as `<script type="application/json">` blocks.

use shared::errors::{InteractionError, Result};
use shared::models::config::{CHECK_UPDATE_DESCRIPTOR_ID, EDIT_MESSAGE_DESCRIPTOR_ID};
use shared::models::{CheckUpdateConfig, EditMessageConfig};
use shared::routes::ForumRoutes;

use crate::api::read_cookie;

const DEFAULT_POLL_INTERVAL_MS: u32 = 60_000;
const DEFAULT_MOUNT_ID: &str = "thread-interactions";
const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Frontend configuration for the thread page
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Delay between two update checks
    pub poll_interval_ms: u32,
    /// Element the dialog and notice components are mounted into
    pub mount_id: String,
    /// Forum mount point used when the edit descriptor is absent
    pub routes: ForumRoutes,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: option_env!("FORUM_POLL_INTERVAL_MS")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            routes: ForumRoutes::new(option_env!("FORUM_BASE_PATH").unwrap_or("")),
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update-check descriptor of the current page.
    pub fn check_update_config(&self) -> Result<CheckUpdateConfig> {
        let raw = read_descriptor(CHECK_UPDATE_DESCRIPTOR_ID)?;
        CheckUpdateConfig::from_json(&raw)
    }

    /// Edit descriptor of the current page. Pages rendered without one fall
    /// back to the thread's edit route and the CSRF cookie.
    pub fn edit_message_config(&self, thread_id: &str) -> Result<EditMessageConfig> {
        match read_descriptor(EDIT_MESSAGE_DESCRIPTOR_ID) {
            Ok(raw) => EditMessageConfig::from_json(&raw),
            Err(InteractionError::MissingDescriptor(_)) => Ok(EditMessageConfig {
                url: self.routes.edit_message(thread_id),
                csrf_token: read_cookie(CSRF_COOKIE_NAME).unwrap_or_default(),
            }),
            Err(error) => Err(error),
        }
    }
}

fn read_descriptor(id: &str) -> Result<String> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.text_content())
        .ok_or_else(|| InteractionError::MissingDescriptor(id.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn embed(id: &str, json: &str) -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id(id);
        script.set_attribute("type", "application/json").unwrap();
        script.set_text_content(Some(json));
        document.body().unwrap().append_child(&script).unwrap();
        script
    }

    #[wasm_bindgen_test]
    fn test_reads_check_update_descriptor() {
        let script = embed(
            CHECK_UPDATE_DESCRIPTOR_ID,
            r#"{"url": "/thread/4/getupdated", "thread_page_time": 1700000000}"#,
        );
        let config = FrontendConfig::new().check_update_config().unwrap();
        assert_eq!(config.url, "/thread/4/getupdated");
        assert_eq!(config.thread_page_time.seconds(), 1_700_000_000);
        script.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_check_update_descriptor() {
        let error = FrontendConfig::new().check_update_config().unwrap_err();
        assert!(matches!(error, InteractionError::MissingDescriptor(_)));
    }

    #[wasm_bindgen_test]
    fn test_edit_descriptor_falls_back_to_route() {
        let config = FrontendConfig::new().edit_message_config("4").unwrap();
        assert!(config.url.ends_with("/thread/4/editmessage"));
    }

    #[wasm_bindgen_test]
    fn test_reads_edit_descriptor() {
        let script = embed(
            EDIT_MESSAGE_DESCRIPTOR_ID,
            r#"{"url": "/thread/4/editmessage", "csrf_token": "tok"}"#,
        );
        let config = FrontendConfig::new().edit_message_config("4").unwrap();
        assert_eq!(config.csrf_token, "tok");
        script.remove();
    }
}
