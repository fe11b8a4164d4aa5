//! Object shapes owned by the host chat framework.
//!
//! These are the payloads discommands consumes from the framework's event
//! streams and hands to registered command callbacks:
//!
//! ```text
//! EventKind::InteractionCreate ──▶ Interaction ──▶ AutocompleteCommand
//! EventKind::MessageCreate     ──▶ Message     ──▶ ReplyCommand (reply target)
//! EventKind::ThreadCreate      ──▶ Thread      ──▶ ThreadCommand
//! ```

pub mod app_command;
pub mod interaction;
pub mod message;
pub mod thread;

use serde::{Deserialize, Serialize};

pub use app_command::{AppCommand, AppCommandOption, Choice};
pub use interaction::{Interaction, InteractionType, InvokedCommand, Namespace};
pub use message::{Message, MessageReference, MessageType, ReplyTarget, ResolvedReference};
pub use thread::Thread;

/// Platform-wide unique identifier.
pub type Id = u64;

/// A user account, human or bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID.
    pub id: Id,
    /// Display name.
    pub name: String,
    /// Whether the account is a bot.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    /// Creates a human user.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bot: false,
        }
    }

    /// Creates a bot account.
    pub fn bot(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            bot: true,
        }
    }
}
