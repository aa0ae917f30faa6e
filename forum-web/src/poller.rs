use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use shared::interaction::{ForumTransport, ThreadPage, UpdatePoller};
use shared::models::{CheckUpdateConfig, PollState};
use wasm_bindgen_futures::spawn_local;

type IntervalSlot = Rc<RefCell<Option<Interval>>>;

/// Handle to the page's single update-check timer. Dropping it cancels the
/// timer.
pub struct UpdateWatcher<T> {
    poller: Rc<UpdatePoller<T>>,
    interval: IntervalSlot,
}

impl<T: ForumTransport + 'static> UpdateWatcher<T> {
    /// Start ticking every `interval_ms`. Each tick runs as its own task, so a
    /// request that never answers does not delay the following ticks. The
    /// timer is cancelled by the first tick that sees a newer update.
    pub fn start<P>(config: CheckUpdateConfig, transport: T, page: Rc<P>, interval_ms: u32) -> Self
    where
        P: ThreadPage + 'static,
    {
        let poller = Rc::new(UpdatePoller::new(config, transport));
        let slot: IntervalSlot = Rc::new(RefCell::new(None));

        let interval = {
            let poller = poller.clone();
            let slot: Weak<RefCell<Option<Interval>>> = Rc::downgrade(&slot);
            Interval::new(interval_ms, move || {
                let poller = poller.clone();
                let page = page.clone();
                let slot = slot.clone();
                spawn_local(async move {
                    if poller.tick(page.as_ref()).await == PollState::Stopped
                        && let Some(slot) = slot.upgrade()
                        && let Some(interval) = slot.borrow_mut().take()
                    {
                        interval.cancel();
                    }
                });
            })
        };
        *slot.borrow_mut() = Some(interval);

        Self {
            poller,
            interval: slot,
        }
    }

    pub fn state(&self) -> PollState {
        self.poller.state()
    }

    pub fn is_timer_active(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

impl<T> Drop for UpdateWatcher<T> {
    fn drop(&mut self) {
        if let Some(interval) = self.interval.borrow_mut().take() {
            interval.cancel();
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use gloo_timers::future::TimeoutFuture;
    use shared::errors::Result;
    use shared::models::{EditMessageConfig, EditMessageRequest, UpdateStamp};
    use wasm_bindgen_test::*;

    use super::*;
    use crate::dom::DocumentPage;
    use crate::models::thread_state::thread_dispatch;

    wasm_bindgen_test_configure!(run_in_browser);

    struct CountingTransport {
        body: &'static str,
        requests: Rc<Cell<usize>>,
    }

    #[async_trait(?Send)]
    impl ForumTransport for CountingTransport {
        async fn fetch_update_stamp(&self, _: &str) -> Result<String> {
            self.requests.set(self.requests.get() + 1);
            Ok(self.body.to_string())
        }

        async fn submit_edit(&self, _: &EditMessageConfig, _: &EditMessageRequest) -> Result<u16> {
            Ok(204)
        }
    }

    fn config() -> CheckUpdateConfig {
        CheckUpdateConfig {
            url: "/thread/1/getupdated".to_string(),
            thread_page_time: UpdateStamp::new(100),
        }
    }

    #[wasm_bindgen_test]
    async fn test_timer_stops_after_update() {
        let requests = Rc::new(Cell::new(0));
        let transport = CountingTransport {
            body: "200",
            requests: requests.clone(),
        };
        let page = Rc::new(DocumentPage::current().unwrap());
        let watcher = UpdateWatcher::start(config(), transport, page, 10);

        TimeoutFuture::new(100).await;

        assert_eq!(watcher.state(), PollState::Stopped);
        assert!(!watcher.is_timer_active());
        assert!(thread_dispatch().get().update_available);
        let seen = requests.get();
        TimeoutFuture::new(50).await;
        assert_eq!(requests.get(), seen);
    }

    #[wasm_bindgen_test]
    async fn test_timer_keeps_running_without_update() {
        let requests = Rc::new(Cell::new(0));
        let transport = CountingTransport {
            body: "100",
            requests: requests.clone(),
        };
        let page = Rc::new(DocumentPage::current().unwrap());
        let watcher = UpdateWatcher::start(config(), transport, page, 10);

        TimeoutFuture::new(100).await;

        assert_eq!(watcher.state(), PollState::Watching);
        assert!(watcher.is_timer_active());
        assert!(requests.get() >= 2);
    }

    #[wasm_bindgen_test]
    async fn test_dropping_watcher_cancels_timer() {
        let requests = Rc::new(Cell::new(0));
        let transport = CountingTransport {
            body: "100",
            requests: requests.clone(),
        };
        let page = Rc::new(DocumentPage::current().unwrap());
        let watcher = UpdateWatcher::start(config(), transport, page, 10);

        TimeoutFuture::new(50).await;
        drop(watcher);
        TimeoutFuture::new(20).await;
        let seen = requests.get();
        TimeoutFuture::new(100).await;

        assert!(seen >= 1);
        assert_eq!(requests.get(), seen);
    }
}
