use yewdux::{Context, Dispatch, Store};

/// Page-lifetime state of the edit dialog and the update notice.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct ThreadState {
    pub edit_open: bool,
    /// Identifier of the message being edited.
    pub edit_target: String,
    pub edit_draft: String,
    pub edit_error: bool,
    pub update_available: bool,
}

thread_local! {
    static THREAD_CONTEXT: Context = Context::new();
}

/// The store context shared by the mounted components and the exported
/// page functions.
pub fn thread_context() -> Context {
    THREAD_CONTEXT.with(Clone::clone)
}

pub fn thread_dispatch() -> Dispatch<ThreadState> {
    Dispatch::new(&thread_context())
}
