//! Handler module - TEA update function and key handling
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Side effects the runner performs after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Put the copy command on the system clipboard
    CopyToClipboard { text: String },

    /// Write the install script to `path` and make it executable
    WriteScript { path: PathBuf, contents: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
