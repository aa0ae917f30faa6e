//! # Page descriptors
//!
//! The server embeds two small JSON records into every thread page. They are
//! decoded once into these structs and handed to the behaviors at construction.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::UpdateStamp;
use crate::errors::{InteractionError, Result};

/// Element id of the embedded update-check descriptor.
pub const CHECK_UPDATE_DESCRIPTOR_ID: &str = "check-update-data";
/// Element id of the embedded edit descriptor.
pub const EDIT_MESSAGE_DESCRIPTOR_ID: &str = "edit-message-data";

/// Where to poll for thread changes and the update time the page was rendered at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckUpdateConfig {
    pub url: String,
    pub thread_page_time: UpdateStamp,
}

/// Where to send message edits and the anti-forgery token to attach.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditMessageConfig {
    pub url: String,
    pub csrf_token: String,
}

fn parse_descriptor<T: DeserializeOwned>(id: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw.trim()).map_err(|source| InteractionError::InvalidDescriptor {
        id: id.to_string(),
        source,
    })
}

impl CheckUpdateConfig {
    /// Decode the `check-update-data` descriptor text.
    ///
    /// # Errors
    /// Returns [`InteractionError::InvalidDescriptor`] when the text is not a
    /// valid descriptor.
    pub fn from_json(raw: &str) -> Result<Self> {
        parse_descriptor(CHECK_UPDATE_DESCRIPTOR_ID, raw)
    }
}

impl EditMessageConfig {
    /// Decode the `edit-message-data` descriptor text.
    ///
    /// # Errors
    /// Returns [`InteractionError::InvalidDescriptor`] when the text is not a
    /// valid descriptor.
    pub fn from_json(raw: &str) -> Result<Self> {
        parse_descriptor(EDIT_MESSAGE_DESCRIPTOR_ID, raw)
    }
}
