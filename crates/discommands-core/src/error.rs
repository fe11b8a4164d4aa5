//! Error types for calls into the host framework.
//!
//! Command-level errors (like `CommandError`) are defined in
//! discommands-framework.

use thiserror::Error;

/// Error type for host API calls.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The bot is not connected.
    #[error("bot is not connected")]
    NotConnected,
    /// The command tree already contains a command with this name.
    #[error("application command '{name}' is already registered")]
    DuplicateAppCommand {
        /// The conflicting command name.
        name: String,
    },
    /// A message could not be delivered.
    #[error("failed to send message: {0}")]
    SendFailed(String),
    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type for host API calls.
pub type ApiResult<T> = Result<T, ApiError>;
