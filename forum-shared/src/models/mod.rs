pub mod config;
pub mod edit;
pub mod update;

pub use config::{CheckUpdateConfig, EditMessageConfig};
pub use edit::{EDIT_SUCCESS_STATUS, EditMessageRequest, EditOutcome, EditSession};
pub use update::{PollDecision, PollState, UpdateStamp, UpdateWatch};
