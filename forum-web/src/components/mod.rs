pub(crate) mod edit_message_modal;
pub(crate) mod thread_interactions;
pub(crate) mod update_toast;

pub use edit_message_modal::EditMessageModal;
pub use thread_interactions::{ThreadInteractions, ThreadInteractionsProps};
pub use update_toast::UpdateToast;
