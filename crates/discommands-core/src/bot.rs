//! Bot trait.
//!
//! This module defines the [`Bot`] trait, the seam between discommands and
//! the host chat framework. A framework adapter implements it once; the
//! command manager only ever talks to the host through it.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::event::{BoxedListener, EventKind};
use crate::model::{AppCommand, Choice, Interaction};

/// The host bot instance.
///
/// A Bot:
/// - Delivers events to subscribed listeners
/// - Owns the slash-command tree
/// - Sends responses back to users
///
/// # API Design
///
/// - `add_listener`: subscribe to one event stream; listeners of a stream are
///   awaited in subscription order
/// - `add_app_command`: register a command into the local command tree
/// - `send_ephemeral`: answer an interaction with a message only the invoking
///   user can see
/// - `send_choices`: answer an autocomplete interaction with suggestions
#[async_trait]
pub trait Bot: Send + Sync + 'static {
    /// Returns the bot's unique identifier.
    fn id(&self) -> &str;

    /// Returns the text command prefix currently configured on the bot.
    ///
    /// Read on every dispatch, so hosts may change it at runtime. It may be
    /// longer than one character; routing checks the whole prefix but only
    /// drops the first character of the text to form the command name.
    fn command_prefix(&self) -> String;

    /// Subscribes `listener` to the events of `kind`.
    fn add_listener(&self, kind: EventKind, listener: BoxedListener);

    /// Registers a command into the bot's command tree.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::DuplicateAppCommand`](crate::ApiError::DuplicateAppCommand)
    /// if the tree already holds a command with the same name.
    ///
    /// Called synchronously while a command manager registers its first
    /// autocomplete command. Implementations may inspect the manager but
    /// must not register autocomplete commands from here.
    fn add_app_command(&self, command: AppCommand) -> ApiResult<()>;

    /// Responds to `interaction` with a message visible only to its invoker.
    async fn send_ephemeral(&self, interaction: &Interaction, content: &str) -> ApiResult<()>;

    /// Responds to an autocomplete `interaction` with suggestions.
    async fn send_choices(&self, interaction: &Interaction, choices: Vec<Choice>) -> ApiResult<()>;

    /// Returns self as an `Arc<dyn Any>` for safe downcasting.
    ///
    /// Implementors should simply return `self`.
    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A shared Bot trait object.
pub type BoxedBot = Arc<dyn Bot>;
