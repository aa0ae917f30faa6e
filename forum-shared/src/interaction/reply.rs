use tracing::debug;

use super::ThreadPage;
use crate::errors::Result;

/// Point the reply form at `reply_id` and bring the form into view.
///
/// # Errors
/// Fails when the reply-target field is missing; the viewport is left alone.
pub fn set_reply_to<P: ThreadPage + ?Sized>(page: &P, reply_id: &str) -> Result<()> {
    page.set_reply_target(reply_id)?;
    page.scroll_to_top();
    debug!(reply_id, "reply target set");
    Ok(())
}
