//! Message handlers (Update in TEA pattern)

mod keys;
mod mouse;
mod update;

pub use update::{update, update_at};

use crate::message::Message;

/// Result of handling a message, optionally carrying a follow-up message
/// that the runner feeds back into `update`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self { message: None }
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
        }
    }
}
