pub mod thread_state;
