//! Command manager.
//!
//! The [`CommandManager`] owns one registry per [`CommandKind`], subscribes to
//! the host bot's interaction, message and thread streams, and routes each
//! event to the matching command.
//!
//! # Routing
//!
//! | event              | condition                                               | command    |
//! |--------------------|---------------------------------------------------------|------------|
//! | interaction create | application command named like the synthetic command   | autocomplete |
//! | message create     | reply, human author, content starts with the prefix     | reply      |
//! | thread create      | thread name starts with the prefix                      | thread     |
//!
//! The prefix is read from the bot on every dispatch. For messages and
//! threads the candidate name is the text without its first character. Names
//! are matched exactly; suggestion matching is the only case-insensitive
//! comparison.
//!
//! # Example
//!
//! ```rust,ignore
//! let manager = CommandManager::new(bot);
//!
//! async fn ping(interaction: Interaction) { /* ... */ }
//! manager.autocomplete(ping).register()?;
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info, trace, warn};

use crate::builder::CommandBuilder;
use crate::callback::Callback;
use crate::command::{AutocompleteCommand, Command, CommandKind, ReplyCommand, ThreadCommand};
use crate::error::CommandResult;
use crate::options::{ManagerOptions, NAME_OPTION, PARAMETERS_OPTION};
use crate::registry::CommandRegistry;
use crate::suggestion::{command_name_choices, parameter_choices};
use discommands_core::{
    BoxedBot, BoxedEvent, Choice, EventKind, Interaction, InteractionType, Message, ReplyTarget,
    Thread, into_listener,
};

/// Registers commands and routes host events to them.
///
/// Created with [`CommandManager::new`], which subscribes the manager's
/// listeners on the bot. Listeners hold a weak reference, so dropping the last
/// `Arc<CommandManager>` turns them into no-ops.
pub struct CommandManager {
    bot: BoxedBot,
    options: ManagerOptions,
    registering: Mutex<()>,
    autocomplete_commands: RwLock<CommandRegistry<AutocompleteCommand>>,
    reply_commands: RwLock<CommandRegistry<ReplyCommand>>,
    thread_commands: RwLock<CommandRegistry<ThreadCommand>>,
}

impl CommandManager {
    /// Creates a manager for `bot` with default options and subscribes its
    /// listeners.
    pub fn new(bot: BoxedBot) -> Arc<Self> {
        Self::with_options(bot, ManagerOptions::default())
    }

    /// Creates a manager for `bot` with custom options and subscribes its
    /// listeners.
    pub fn with_options(bot: BoxedBot, options: ManagerOptions) -> Arc<Self> {
        let manager = Arc::new(Self {
            bot,
            options,
            registering: Mutex::new(()),
            autocomplete_commands: RwLock::new(CommandRegistry::new()),
            reply_commands: RwLock::new(CommandRegistry::new()),
            thread_commands: RwLock::new(CommandRegistry::new()),
        });

        manager.subscribe(EventKind::InteractionCreate, |manager, event| async move {
            manager.on_interaction(event).await
        });
        manager.subscribe(EventKind::MessageCreate, |manager, event| async move {
            manager.on_message(event).await
        });
        manager.subscribe(EventKind::ThreadCreate, |manager, event| async move {
            manager.on_thread(event).await
        });

        info!(bot = %manager.bot.id(), "Command manager attached");
        manager
    }

    fn subscribe<F, Fut>(self: &Arc<Self>, kind: EventKind, listener: F)
    where
        F: Fn(Arc<Self>, BoxedEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let manager = Arc::downgrade(self);
        self.bot.add_listener(
            kind,
            into_listener(move |event| {
                let call = Weak::upgrade(&manager).map(|manager| listener(manager, event));
                async move {
                    if let Some(call) = call {
                        call.await;
                    }
                }
            }),
        );
        debug!(event = %kind, "Listener subscribed");
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the bot this manager is attached to.
    pub fn bot(&self) -> &BoxedBot {
        &self.bot
    }

    /// Returns the manager's options.
    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }

    /// Returns the autocomplete commands in registration order.
    pub fn autocomplete_commands(&self) -> Vec<Arc<AutocompleteCommand>> {
        self.autocomplete_commands.read().commands()
    }

    /// Returns the reply commands in registration order.
    pub fn reply_commands(&self) -> Vec<Arc<ReplyCommand>> {
        self.reply_commands.read().commands()
    }

    /// Returns the thread commands in registration order.
    pub fn thread_commands(&self) -> Vec<Arc<ThreadCommand>> {
        self.thread_commands.read().commands()
    }

    // ------------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------------

    /// Registers an autocomplete command.
    ///
    /// The first successful registration also adds the synthetic slash
    /// command to the bot's command tree. The host may read the registries
    /// from [`Bot::add_app_command`](discommands_core::Bot::add_app_command)
    /// but must not register autocomplete commands from it.
    ///
    /// # Errors
    ///
    /// - [`CommandError::Duplicate`](crate::CommandError::Duplicate) if the
    ///   name is taken
    /// - [`CommandError::Api`](crate::CommandError::Api) if the slash command
    ///   could not be registered; the command is not stored
    pub fn add_autocomplete_command(
        &self,
        command: AutocompleteCommand,
    ) -> CommandResult<Arc<AutocompleteCommand>> {
        // Serializes autocomplete registrations so the slash command is added
        // once. No registry lock is held while the host runs.
        let _registering = self.registering.lock();

        let needs_slash_command = {
            let registry = self.autocomplete_commands.read();
            registry.check_vacant(command.name())?;
            registry.is_empty()
        };

        if needs_slash_command {
            debug!(
                command = %self.options.autocomplete_command,
                "Registering autocomplete slash command"
            );
            self.bot.add_app_command(self.options.slash_command())?;
        }

        let command = self.autocomplete_commands.write().insert(command)?;
        info!(kind = %CommandKind::Autocomplete, command = %command.name(), "Command registered");
        Ok(command)
    }

    /// Registers a reply command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Duplicate`](crate::CommandError::Duplicate) if
    /// the name is taken.
    pub fn add_reply_command(&self, command: ReplyCommand) -> CommandResult<Arc<ReplyCommand>> {
        let command = self.reply_commands.write().insert(command)?;
        info!(kind = %CommandKind::Reply, command = %command.name(), "Command registered");
        Ok(command)
    }

    /// Registers a thread command.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Duplicate`](crate::CommandError::Duplicate) if
    /// the name is taken.
    pub fn add_thread_command(&self, command: ThreadCommand) -> CommandResult<Arc<ThreadCommand>> {
        let command = self.thread_commands.write().insert(command)?;
        info!(kind = %CommandKind::Thread, command = %command.name(), "Command registered");
        Ok(command)
    }

    /// Builds and registers an autocomplete command in one call.
    pub fn add_autocomplete_fn<F>(
        &self,
        name: impl Into<String>,
        callback: F,
    ) -> CommandResult<Arc<AutocompleteCommand>>
    where
        F: Callback<Interaction>,
    {
        self.add_autocomplete_command(AutocompleteCommand::new(name, callback)?)
    }

    /// Builds and registers a reply command in one call.
    pub fn add_reply_fn<F>(&self, name: impl Into<String>, callback: F) -> CommandResult<Arc<ReplyCommand>>
    where
        F: Callback<ReplyTarget>,
    {
        self.add_reply_command(ReplyCommand::new(name, callback)?)
    }

    /// Builds and registers a thread command in one call.
    pub fn add_thread_fn<F>(&self, name: impl Into<String>, callback: F) -> CommandResult<Arc<ThreadCommand>>
    where
        F: Callback<Thread>,
    {
        self.add_thread_command(ThreadCommand::new(name, callback)?)
    }

    /// Starts registering `callback` as an autocomplete command.
    pub fn autocomplete<F>(&self, callback: F) -> CommandBuilder<'_, AutocompleteCommand, F>
    where
        F: Callback<Interaction>,
    {
        CommandBuilder::new(self, callback)
    }

    /// Starts registering `callback` as a reply command.
    pub fn reply<F>(&self, callback: F) -> CommandBuilder<'_, ReplyCommand, F>
    where
        F: Callback<ReplyTarget>,
    {
        CommandBuilder::new(self, callback)
    }

    /// Starts registering `callback` as a thread command.
    pub fn thread<F>(&self, callback: F) -> CommandBuilder<'_, ThreadCommand, F>
    where
        F: Callback<Thread>,
    {
        CommandBuilder::new(self, callback)
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// Routes an interaction.
    ///
    /// Application-command interactions for the synthetic command run the
    /// named autocomplete command; autocomplete interactions for it are
    /// answered with suggestions. Everything else is ignored.
    ///
    /// Returns `true` if a command was invoked.
    pub async fn handle_interaction(&self, interaction: &Interaction) -> CommandResult<bool> {
        if interaction.command_name() != Some(self.options.autocomplete_command.as_str()) {
            return Ok(false);
        }

        match interaction.kind {
            InteractionType::ApplicationCommand => {
                let name = interaction
                    .namespace
                    .get_str(NAME_OPTION)
                    .unwrap_or_default();
                let parameters = interaction.namespace.get_str(PARAMETERS_OPTION);
                self.dispatch_autocomplete(interaction, name, parameters)
                    .await
            }
            InteractionType::Autocomplete => {
                self.answer_suggestions(interaction).await?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Runs the autocomplete command `name` for `interaction`.
    ///
    /// Unknown names are answered with exactly one ephemeral not-found
    /// message. `parameters` is accepted but not forwarded to the command.
    ///
    /// Returns `true` if a command was invoked.
    pub async fn dispatch_autocomplete(
        &self,
        interaction: &Interaction,
        name: &str,
        parameters: Option<&str>,
    ) -> CommandResult<bool> {
        let command = self.autocomplete_commands.read().get(name);
        let Some(command) = command else {
            debug!(command = %name, "Unknown autocomplete command");
            self.bot
                .send_ephemeral(interaction, &self.options.not_found(name))
                .await?;
            return Ok(false);
        };

        trace!(command = %name, ?parameters, interaction = interaction.id, "Invoking autocomplete command");
        command.call(interaction.clone()).await?;
        Ok(true)
    }

    async fn answer_suggestions(&self, interaction: &Interaction) -> CommandResult<()> {
        let current = interaction.focused_value().unwrap_or_default();
        let choices = match interaction.focused.as_deref() {
            Some(NAME_OPTION) => self.suggest_command_names(current),
            _ => self.suggest_parameters(current),
        };
        trace!(current = %current, count = choices.len(), "Answering autocomplete");
        self.bot.send_choices(interaction, choices).await?;
        Ok(())
    }

    /// Routes a message.
    ///
    /// Only replies by non-bot authors whose content starts with the bot's
    /// prefix are considered; see [`Self::reply_command_for`].
    ///
    /// Returns `true` if a command was invoked.
    pub async fn handle_message(&self, message: &Message) -> CommandResult<bool> {
        let Some(command) = self.reply_command_for(message) else {
            return Ok(false);
        };
        trace!(command = %command.name(), message = message.id, "Invoking reply command");
        command.call(message.clone()).await?;
        Ok(true)
    }

    /// Routes a newly created thread; see [`Self::thread_command_for`].
    ///
    /// Returns `true` if a command was invoked.
    pub async fn handle_thread(&self, thread: &Thread) -> CommandResult<bool> {
        let Some(command) = self.thread_command_for(thread) else {
            return Ok(false);
        };
        trace!(command = %command.name(), thread = thread.id, "Invoking thread command");
        command.call(thread.clone()).await?;
        Ok(true)
    }

    /// Looks up the reply command `message` triggers.
    ///
    /// The message must be a reply by a non-bot author, and its content must
    /// start with the bot's prefix. The candidate name is the content without
    /// its first character.
    pub fn reply_command_for(&self, message: &Message) -> Option<Arc<ReplyCommand>> {
        if !message.is_reply() || message.author.bot || message.content.is_empty() {
            return None;
        }
        let name = strip_command_prefix(&message.content, &self.bot.command_prefix())?;
        let command = self.reply_commands.read().get(name);
        if command.is_none() {
            trace!(command = %name, "No reply command");
        }
        command
    }

    /// Looks up the thread command a thread named `thread.name` triggers.
    ///
    /// The name must start with the bot's prefix. The candidate name is the
    /// thread name without its first character.
    pub fn thread_command_for(&self, thread: &Thread) -> Option<Arc<ThreadCommand>> {
        let name = strip_command_prefix(&thread.name, &self.bot.command_prefix())?;
        let command = self.thread_commands.read().get(name);
        if command.is_none() {
            trace!(command = %name, "No thread command");
        }
        command
    }

    // ------------------------------------------------------------------------
    // Suggestions
    // ------------------------------------------------------------------------

    /// Suggests autocomplete command names containing `current`.
    ///
    /// Labels carry the bot's current prefix; values are the bare names.
    pub fn suggest_command_names(&self, current: &str) -> Vec<Choice> {
        let prefix = self.bot.command_prefix();
        let registry = self.autocomplete_commands.read();
        command_name_choices(
            registry.names(),
            &prefix,
            current,
            self.options.max_suggestions,
        )
    }

    /// Suggests values for the `parameters` option. Always empty.
    pub fn suggest_parameters(&self, current: &str) -> Vec<Choice> {
        parameter_choices(current)
    }

    // ------------------------------------------------------------------------
    // Listeners
    // ------------------------------------------------------------------------

    async fn on_interaction(&self, event: BoxedEvent) {
        let Some(interaction) = event.downcast_ref::<Interaction>() else {
            warn!(event = event.event_name(), "Unexpected event on interaction stream");
            return;
        };
        if let Err(e) = self.handle_interaction(interaction).await {
            error!(interaction = interaction.id, "Autocomplete command failed: {e}");
        }
    }

    async fn on_message(&self, event: BoxedEvent) {
        let Some(message) = event.downcast_ref::<Message>() else {
            warn!(event = event.event_name(), "Unexpected event on message stream");
            return;
        };
        let command = self.reply_command_for(message);
        if let Err(e) = invoke_event(command, &event).await {
            error!(message = message.id, "Reply command failed: {e}");
        }
    }

    async fn on_thread(&self, event: BoxedEvent) {
        let Some(thread) = event.downcast_ref::<Thread>() else {
            warn!(event = event.event_name(), "Unexpected event on thread stream");
            return;
        };
        let command = self.thread_command_for(thread);
        if let Err(e) = invoke_event(command, &event).await {
            error!(thread = thread.id, "Thread command failed: {e}");
        }
    }
}

/// Runs `command`, if any, with the event that selected it.
async fn invoke_event<C: Command>(command: Option<Arc<C>>, event: &BoxedEvent) -> CommandResult<()> {
    let Some(command) = command else {
        return Ok(());
    };
    trace!(kind = %C::KIND, command = %command.name(), "Invoking command");
    command.call_event(event).await
}

/// Returns `text` without its first character if it starts with `prefix`.
///
/// Only the first character is dropped, whatever the prefix length: with
/// prefix `"!!"`, `"!!pin"` yields `"!pin"`.
fn strip_command_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    if !text.starts_with(prefix) {
        return None;
    }
    let mut chars = text.chars();
    chars.next();
    Some(chars.as_str())
}

impl fmt::Debug for CommandManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandManager")
            .field("bot", &self.bot.id())
            .field("options", &self.options)
            .field("autocomplete_commands", &*self.autocomplete_commands.read())
            .field("reply_commands", &*self.reply_commands.read())
            .field("thread_commands", &*self.thread_commands.read())
            .finish()
    }
}
