//! Forum endpoint paths used when the page does not embed a descriptor.

/// Builds thread endpoint URLs relative to the forum mount point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumRoutes {
    base: String,
}

impl Default for ForumRoutes {
    fn default() -> Self {
        Self::new("")
    }
}

impl ForumRoutes {
    /// Create routes under the given base path, e.g. `/forum`.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn thread_url(&self, thread_id: &str, action: &str) -> String {
        format!("{}/thread/{}/{}", self.base, thread_id, action)
    }

    /// Endpoint replacing the content of the root message or one of its replies.
    #[must_use]
    pub fn edit_message(&self, thread_id: &str) -> String {
        self.thread_url(thread_id, "editmessage")
    }
}
