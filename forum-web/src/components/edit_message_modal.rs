use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};
use yewdux::prelude::use_store;

use crate::models::thread_state::ThreadState;

pub const EDIT_MODAL_ID: &str = "editMessageModal";
pub const EDIT_TARGET_FIELD_ID: &str = "editThreadIdField";
pub const EDIT_DRAFT_FIELD_ID: &str = "editMessageField";
pub const EDIT_ERROR_ID: &str = "editMessageError";

#[derive(Properties, PartialEq, Clone)]
pub struct EditMessageModalProps {
    pub on_save: Callback<()>,
}

#[function_component(EditMessageModal)]
pub fn edit_message_modal(props: &EditMessageModalProps) -> Html {
    let (state, dispatch) = use_store::<ThreadState>();

    let on_input = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            let draft = target.value();
            dispatch.reduce_mut(move |state| state.edit_draft = draft);
        })
    };

    let on_cancel = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| dispatch.reduce_mut(|state| state.edit_open = false))
    };

    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_save.emit(());
        })
    };

    html! {
        <div
            id={EDIT_MODAL_ID}
            class={classes!("modal", state.edit_open.then_some("modal-open"))}
            role="dialog"
            aria-hidden={(!state.edit_open).to_string()}
        >
            <form class="modal-box space-y-3" onsubmit={on_submit}>
                <h3 class="font-bold text-lg">{"Edit message"}</h3>
                <input type="hidden" id={EDIT_TARGET_FIELD_ID} value={state.edit_target.clone()} />
                <textarea
                    id={EDIT_DRAFT_FIELD_ID}
                    class={classes!("textarea", "textarea-bordered", "w-full", "min-h-[8rem]")}
                    value={state.edit_draft.clone()}
                    oninput={on_input}
                />
                <div id={EDIT_ERROR_ID} class="alert alert-error" hidden={!state.edit_error}>
                    {"The message could not be saved. Please try again."}
                </div>
                <div class="modal-action">
                    <button class="btn btn-ghost" type="button" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-primary" type="submit">
                        {"Save"}
                    </button>
                </div>
            </form>
        </div>
    }
}
