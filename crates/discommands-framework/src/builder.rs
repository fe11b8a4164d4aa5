//! Builder-style registration helpers.
//!
//! [`CommandManager::autocomplete`], [`CommandManager::reply`] and
//! [`CommandManager::thread`] wrap a bare callback into the matching command
//! object and register it in one go:
//!
//! ```rust,ignore
//! async fn ping(interaction: Interaction) { /* ... */ }
//!
//! // Named after the function: "ping"
//! manager.autocomplete(ping).register()?;
//!
//! // Explicit name, required for closures
//! manager.reply(|target: ReplyTarget| async move { /* ... */ }).name("pin").register()?;
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::callback::{Callback, callback_name};
use crate::command::{AutocompleteCommand, ReplyCommand, ThreadCommand};
use crate::error::{CommandError, CommandResult};
use crate::manager::CommandManager;
use discommands_core::{Interaction, ReplyTarget, Thread};

/// A pending registration of callback `F` as a command of type `C`.
#[must_use = "call `.register()` to add the command to the manager"]
pub struct CommandBuilder<'m, C, F> {
    manager: &'m CommandManager,
    name: Option<String>,
    callback: F,
    _command: PhantomData<fn() -> C>,
}

impl<'m, C, F> CommandBuilder<'m, C, F> {
    pub(crate) fn new(manager: &'m CommandManager, callback: F) -> Self {
        Self {
            manager,
            name: None,
            callback,
            _command: PhantomData,
        }
    }

    /// Sets the command name instead of deriving it from the callback.
    ///
    /// An empty name falls back to the callback's identifier.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn resolve_name(&self) -> CommandResult<String> {
        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => Ok(name.to_string()),
            None => callback_name::<F>()
                .map(str::to_string)
                .ok_or(CommandError::Unnamed),
        }
    }
}

impl<F: Callback<Interaction>> CommandBuilder<'_, AutocompleteCommand, F> {
    /// Builds the command and registers it with the manager.
    pub fn register(self) -> CommandResult<Arc<AutocompleteCommand>> {
        let name = self.resolve_name()?;
        self.manager
            .add_autocomplete_command(AutocompleteCommand::new(name, self.callback)?)
    }
}

impl<F: Callback<ReplyTarget>> CommandBuilder<'_, ReplyCommand, F> {
    /// Builds the command and registers it with the manager.
    pub fn register(self) -> CommandResult<Arc<ReplyCommand>> {
        let name = self.resolve_name()?;
        self.manager
            .add_reply_command(ReplyCommand::new(name, self.callback)?)
    }
}

impl<F: Callback<Thread>> CommandBuilder<'_, ThreadCommand, F> {
    /// Builds the command and registers it with the manager.
    pub fn register(self) -> CommandResult<Arc<ThreadCommand>> {
        let name = self.resolve_name()?;
        self.manager
            .add_thread_command(ThreadCommand::new(name, self.callback)?)
    }
}
