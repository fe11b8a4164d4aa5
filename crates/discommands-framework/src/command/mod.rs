//! Command value objects.
//!
//! A command is an immutable `name` + `callback` pair. There is one variant
//! per trigger:
//!
//! | variant                 | payload          | callback receives        |
//! |-------------------------|------------------|--------------------------|
//! | [`AutocompleteCommand`] | [`Interaction`]  | the interaction          |
//! | [`ReplyCommand`]        | [`Message`]      | the [`ReplyTarget`]      |
//! | [`ThreadCommand`]       | [`Thread`]       | the thread               |
//!
//! Construction trims the name and rejects empty names; invocation forwards
//! the payload to the callback and surfaces its error.
//!
//! [`Interaction`]: discommands_core::Interaction
//! [`Message`]: discommands_core::Message
//! [`ReplyTarget`]: discommands_core::ReplyTarget
//! [`Thread`]: discommands_core::Thread

mod autocomplete;
mod reply;
mod thread;

use std::fmt;

use async_trait::async_trait;

use crate::error::{CommandError, CommandResult};
use discommands_core::{BoxedEvent, Event};

pub use autocomplete::AutocompleteCommand;
pub use reply::ReplyCommand;
pub use thread::ThreadCommand;

/// The three registries a command can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Invoked through the synthetic autocomplete slash command.
    Autocomplete,
    /// Invoked by replying to a message with the prefixed name.
    Reply,
    /// Invoked by creating a thread with the prefixed name.
    Thread,
}

impl CommandKind {
    /// Returns the kind's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Autocomplete => "autocomplete",
            Self::Reply => "reply",
            Self::Thread => "thread",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common behaviour of the three command variants.
#[async_trait]
pub trait Command: Send + Sync + 'static {
    /// The registry this command belongs to.
    const KIND: CommandKind;

    /// The framework object that triggers this command.
    type Payload: Event + Clone;

    /// Returns the trimmed, non-empty command name.
    fn name(&self) -> &str;

    /// Invokes the command with its payload.
    async fn call(&self, payload: Self::Payload) -> CommandResult<()>;

    /// Invokes the command with a type-erased framework event.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::PayloadMismatch`] when `event` is not a
    /// [`Self::Payload`].
    async fn call_event(&self, event: &BoxedEvent) -> CommandResult<()> {
        let payload = event
            .downcast_ref::<Self::Payload>()
            .cloned()
            .ok_or_else(|| CommandError::PayloadMismatch {
                expected: std::any::type_name::<Self::Payload>(),
                got: event.type_name(),
            })?;
        self.call(payload).await
    }
}

/// Trims `name`, rejecting names that are empty afterwards.
pub(crate) fn validate_name(name: impl Into<String>) -> CommandResult<String> {
    let name = name.into();
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CommandError::EmptyName);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("  ping \n").unwrap(), "ping");
        assert_eq!(validate_name("a b").unwrap(), "a b");
    }

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(matches!(validate_name(""), Err(CommandError::EmptyName)));
        assert!(matches!(validate_name(" \t "), Err(CommandError::EmptyName)));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CommandKind::Reply.to_string(), "reply");
        assert_eq!(CommandKind::Autocomplete.as_str(), "autocomplete");
    }
}
