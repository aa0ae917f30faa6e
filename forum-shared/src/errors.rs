//! Error types shared by the thread interaction behaviors.

use thiserror::Error;

/// Failures surfaced while reading page descriptors, touching the page, or
/// talking to the forum endpoints.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// The embedded JSON descriptor element is absent from the page.
    #[error("embedded descriptor `{0}` is missing")]
    MissingDescriptor(String),
    /// The embedded JSON descriptor could not be decoded.
    #[error("embedded descriptor `{id}` is invalid: {source}")]
    InvalidDescriptor {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    /// A page element the behaviors depend on could not be found.
    #[error("element `{0}` is missing from the page")]
    MissingElement(String),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a status the caller does not accept.
    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),
}

pub type Result<T> = std::result::Result<T, InteractionError>;
