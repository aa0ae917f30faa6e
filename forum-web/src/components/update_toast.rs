use gloo_timers::callback::Timeout;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yewdux::prelude::use_store;

use crate::models::thread_state::ThreadState;

pub const UPDATE_TOAST_ID: &str = "updateToast";
const NOTICE_DURATION_MS: u32 = 10_000;

#[function_component(UpdateToast)]
pub fn update_toast() -> Html {
    let (state, dispatch) = use_store::<ThreadState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with(state.update_available, move |visible| {
            let timeout = (*visible).then(|| {
                Timeout::new(NOTICE_DURATION_MS, move || {
                    dispatch.reduce_mut(|state| state.update_available = false);
                })
            });
            move || drop(timeout)
        });
    }

    let on_reload = Callback::from(|_| {
        if let Some(window) = web_sys::window()
            && let Err(error) = window.location().reload()
        {
            web_sys::console::error_2(&"Could not reload the thread:".into(), &error);
        }
    });

    let on_dismiss = Callback::from(move |_| {
        dispatch.reduce_mut(|state| state.update_available = false);
    });

    html! {
        <div id={UPDATE_TOAST_ID} class="toast toast-end" role="status" hidden={!state.update_available}>
            <div class="alert alert-info">
                <span>{"This thread has been updated."}</span>
                <button class="btn btn-sm btn-primary" type="button" onclick={on_reload}>
                    {"Reload"}
                </button>
                <button class="btn btn-sm btn-ghost" type="button" aria-label="Close" onclick={on_dismiss}>
                    {"✕"}
                </button>
            </div>
        </div>
    }
}
