use yew::{Callback, ContextProvider, Html, Properties, function_component, html};
use yewdux::Context;

use super::{EditMessageModal, UpdateToast};

#[derive(Properties, PartialEq, Clone)]
pub struct ThreadInteractionsProps {
    /// Store context shared with the exported page functions
    pub context: Context,
    pub on_save: Callback<()>,
}

/// Root mounted into the thread page: the edit dialog and the update notice.
#[function_component(ThreadInteractions)]
pub fn thread_interactions(props: &ThreadInteractionsProps) -> Html {
    html! {
        <ContextProvider<Context> context={props.context.clone()}>
            <EditMessageModal on_save={props.on_save.clone()} />
            <UpdateToast />
        </ContextProvider<Context>>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::components::edit_message_modal::{EDIT_DRAFT_FIELD_ID, EDIT_ERROR_ID, EDIT_MODAL_ID};
    use crate::components::update_toast::UPDATE_TOAST_ID;
    use crate::models::thread_state::ThreadState;
    use wasm_bindgen_test::*;
    use yew::LocalServerRenderer;
    use yewdux::Dispatch;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn render(context: Context) -> String {
        LocalServerRenderer::<ThreadInteractions>::with_props(ThreadInteractionsProps {
            context,
            on_save: Callback::from(|()| ()),
        })
        .render()
        .await
    }

    #[wasm_bindgen_test]
    async fn test_renders_dialog_contract_ids() {
        let rendered = render(Context::new()).await;
        assert!(rendered.contains(EDIT_MODAL_ID));
        assert!(rendered.contains(EDIT_DRAFT_FIELD_ID));
        assert!(rendered.contains(EDIT_ERROR_ID));
        assert!(rendered.contains(UPDATE_TOAST_ID));
        assert!(!rendered.contains("modal-open"));
    }

    #[wasm_bindgen_test]
    async fn test_open_dialog_shows_draft() {
        let context = Context::new();
        Dispatch::<ThreadState>::new(&context).reduce_mut(|state| {
            state.edit_open = true;
            state.edit_target = "12".to_string();
            state.edit_draft = "Existing text".to_string();
        });

        let rendered = render(context).await;
        assert!(rendered.contains("modal-open"));
        assert!(rendered.contains(r#"aria-hidden="false""#));
    }

    #[wasm_bindgen_test]
    async fn test_update_notice_offers_reload() {
        let context = Context::new();
        Dispatch::<ThreadState>::new(&context).reduce_mut(|state| state.update_available = true);

        let rendered = render(context).await;
        assert!(rendered.contains("This thread has been updated."));
        assert!(rendered.contains("Reload"));
    }
}
