use std::cell::RefCell;

use tracing::{debug, info};

use super::{ForumTransport, ThreadPage};
use crate::models::{CheckUpdateConfig, PollDecision, PollState, UpdateWatch};

/// Checks the update endpoint once per tick until the thread changes.
///
/// Ticks are independent: a slow answer never holds up the next tick, and the
/// watch is only borrowed between awaits.
#[derive(Debug)]
pub struct UpdatePoller<T> {
    config: CheckUpdateConfig,
    transport: T,
    watch: RefCell<UpdateWatch>,
}

impl<T: ForumTransport> UpdatePoller<T> {
    #[must_use]
    pub fn new(config: CheckUpdateConfig, transport: T) -> Self {
        let watch = RefCell::new(UpdateWatch::new(config.thread_page_time));
        Self {
            config,
            transport,
            watch,
        }
    }

    #[must_use]
    pub fn state(&self) -> PollState {
        self.watch.borrow().state()
    }

    /// Run one poll tick. Returns the state after the tick; `Stopped` tells the
    /// scheduler to cancel its timer. Once stopped, no request is issued.
    pub async fn tick<P: ThreadPage + ?Sized>(&self, page: &P) -> PollState {
        if !self.watch.borrow().is_watching() {
            return PollState::Stopped;
        }

        let body = match self.transport.fetch_update_stamp(&self.config.url).await {
            Ok(body) => Some(body),
            Err(error) => {
                debug!(%error, url = %self.config.url, "update check failed");
                None
            }
        };

        let decision = self.watch.borrow_mut().observe(body.as_deref());
        match decision {
            PollDecision::Updated(stamp) => {
                info!(
                    %stamp,
                    baseline = %self.config.thread_page_time,
                    "thread updated since page load"
                );
                page.show_update_notice();
            }
            PollDecision::Unchanged => debug!(url = %self.config.url, "thread unchanged"),
            PollDecision::Ignored => {}
        }

        self.state()
    }
}
