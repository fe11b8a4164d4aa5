//! Error types for command construction, registration and invocation.

use thiserror::Error;

use crate::callback::BoxError;
use crate::command::CommandKind;
use discommands_core::ApiError;

/// Errors raised synchronously to the caller of a command or manager
/// operation.
///
/// An unknown autocomplete command is not an error: the invoking user gets an
/// ephemeral notice instead. Unknown reply and thread commands are ignored.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command name is empty or whitespace-only.
    #[error("name: must not be an empty string")]
    EmptyName,

    /// No name was given and the callback has no identifier to default to.
    #[error("name: no name given and the callback has no identifier to default to")]
    Unnamed,

    /// The event handed to a command is not the command's payload type.
    #[error("payload type mismatch: expected '{expected}', got '{got}'")]
    PayloadMismatch {
        /// Expected payload type name.
        expected: &'static str,
        /// Actual event type name.
        got: &'static str,
    },

    /// The message handed to a reply command does not reference a message.
    #[error("message has no reply target")]
    MissingReplyTarget,

    /// A command with the same name already exists in that kind's registry.
    #[error("{kind} command '{name}' is already added to the command manager")]
    Duplicate {
        /// Registry the name collided in.
        kind: CommandKind,
        /// The duplicate name.
        name: String,
    },

    /// A call into the host framework failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The command's callback returned an error.
    #[error("command callback failed: {0}")]
    Callback(#[source] BoxError),
}

impl CommandError {
    /// Returns `true` for errors caused by bad arguments to a constructor or
    /// invocation entry point.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyName | Self::Unnamed | Self::PayloadMismatch { .. } | Self::MissingReplyTarget
        )
    }
}

/// Result type for command operations.
pub type CommandResult<T> = Result<T, CommandError>;
