use std::fmt;

use async_trait::async_trait;

use super::{Command, CommandKind, validate_name};
use crate::callback::{BoxedCallback, Callback, into_callback};
use crate::error::{CommandError, CommandResult};
use discommands_core::Thread;

/// A command invoked by creating a thread with the prefixed name.
#[derive(Clone)]
pub struct ThreadCommand {
    name: String,
    callback: BoxedCallback<Thread>,
}

impl ThreadCommand {
    /// Creates a command named `name` (trimmed) invoking `callback`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyName`] if `name` is empty after trimming.
    pub fn new<F>(name: impl Into<String>, callback: F) -> CommandResult<Self>
    where
        F: Callback<Thread>,
    {
        Ok(Self {
            name: validate_name(name)?,
            callback: into_callback(callback),
        })
    }
}

#[async_trait]
impl Command for ThreadCommand {
    const KIND: CommandKind = CommandKind::Thread;
    type Payload = Thread;

    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, thread: Thread) -> CommandResult<()> {
        self.callback
            .invoke(thread)
            .await
            .map_err(CommandError::Callback)
    }
}

impl fmt::Debug for ThreadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
