//! In-process host bot.
//!
//! [`LocalBot`] implements [`Bot`] without any network transport: events are
//! injected with [`LocalBot::emit`] and every response lands in an in-memory
//! outbox. It backs the demos and the runtime's tests.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, trace};

use crate::config::BotSection;
use discommands_core::{
    ApiError, ApiResult, AppCommand, Bot, BoxedEvent, BoxedListener, Choice, Event, EventKind, Id,
    Interaction,
};

/// A response the bot sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    /// A message only the invoking user can see.
    Ephemeral {
        interaction_id: Id,
        user_id: Id,
        content: String,
    },
    /// Autocomplete suggestions.
    Choices {
        interaction_id: Id,
        choices: Vec<Choice>,
    },
}

/// An in-memory [`Bot`].
pub struct LocalBot {
    id: String,
    prefix: RwLock<String>,
    connected: AtomicBool,
    listeners: RwLock<HashMap<EventKind, Vec<BoxedListener>>>,
    tree: Mutex<Vec<AppCommand>>,
    outbox: Mutex<Vec<Outgoing>>,
}

impl LocalBot {
    /// Creates a connected bot.
    pub fn new(id: impl Into<String>, command_prefix: impl Into<String>) -> Arc<Self> {
        let bot = Arc::new(Self {
            id: id.into(),
            prefix: RwLock::new(command_prefix.into()),
            connected: AtomicBool::new(true),
            listeners: RwLock::new(HashMap::new()),
            tree: Mutex::new(Vec::new()),
            outbox: Mutex::new(Vec::new()),
        });
        info!(bot_id = %bot.id, prefix = %bot.prefix.read(), "Local bot created");
        bot
    }

    /// Creates a bot from its configuration section.
    pub fn from_config(config: &BotSection) -> Arc<Self> {
        Self::new(&config.id, &config.command_prefix)
    }

    /// Changes the command prefix; takes effect on the next dispatch.
    pub fn set_command_prefix(&self, prefix: impl Into<String>) {
        let prefix = prefix.into();
        debug!(bot_id = %self.id, prefix = %prefix, "Command prefix changed");
        *self.prefix.write() = prefix;
    }

    /// Delivers `event` to the listeners of its kind.
    ///
    /// Listeners run one after another in subscription order; the call
    /// returns once all of them have finished.
    pub async fn emit<E: Event>(&self, event: E) {
        let event = BoxedEvent::new(event);
        let listeners = self
            .listeners
            .read()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        trace!(
            bot_id = %self.id,
            event = event.event_name(),
            listeners = listeners.len(),
            "Emitting event"
        );
        for listener in listeners {
            listener(event.clone()).await;
        }
    }

    /// Returns the registered application commands.
    pub fn app_commands(&self) -> Vec<AppCommand> {
        self.tree.lock().clone()
    }

    /// Returns everything sent so far.
    pub fn outbox(&self) -> Vec<Outgoing> {
        self.outbox.lock().clone()
    }

    /// Drains the outbox.
    pub fn take_outbox(&self) -> Vec<Outgoing> {
        std::mem::take(&mut *self.outbox.lock())
    }

    /// Marks the bot as disconnected; later sends fail.
    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
        info!(bot_id = %self.id, "Local bot disconnected");
    }

    /// Returns whether the bot accepts sends.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn send(&self, outgoing: Outgoing) -> ApiResult<()> {
        if !self.is_connected() {
            return Err(ApiError::NotConnected);
        }
        trace!(bot_id = %self.id, ?outgoing, "Sending");
        self.outbox.lock().push(outgoing);
        Ok(())
    }
}

#[async_trait]
impl Bot for LocalBot {
    fn id(&self) -> &str {
        &self.id
    }

    fn command_prefix(&self) -> String {
        self.prefix.read().clone()
    }

    fn add_listener(&self, kind: EventKind, listener: BoxedListener) {
        self.listeners.write().entry(kind).or_default().push(listener);
    }

    fn add_app_command(&self, command: AppCommand) -> ApiResult<()> {
        let mut tree = self.tree.lock();
        if tree.iter().any(|c| c.name == command.name) {
            return Err(ApiError::DuplicateAppCommand { name: command.name });
        }
        debug!(bot_id = %self.id, command = %command.name, "Application command added");
        tree.push(command);
        Ok(())
    }

    async fn send_ephemeral(&self, interaction: &Interaction, content: &str) -> ApiResult<()> {
        self.send(Outgoing::Ephemeral {
            interaction_id: interaction.id,
            user_id: interaction.user.id,
            content: content.to_string(),
        })
    }

    async fn send_choices(&self, interaction: &Interaction, choices: Vec<Choice>) -> ApiResult<()> {
        self.send(Outgoing::Choices {
            interaction_id: interaction.id,
            choices,
        })
    }

    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl fmt::Debug for LocalBot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalBot")
            .field("id", &self.id)
            .field("prefix", &*self.prefix.read())
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discommands_core::{
        BoxedBot, Message, MessageReference, Namespace, ReplyTarget, Thread, User,
    };
    use discommands_framework::{CommandError, CommandManager};

    fn setup() -> (Arc<LocalBot>, Arc<CommandManager>) {
        let bot = LocalBot::from_config(&BotSection::default());
        let boxed: BoxedBot = bot.clone();
        (bot, CommandManager::new(boxed))
    }

    fn invoke(id: Id, name: &str) -> Interaction {
        Interaction::application_command(
            id,
            "autocomplete",
            Namespace::new().with("name", name),
            User::new(7, "alice"),
            1,
        )
    }

    #[tokio::test]
    async fn test_manager_subscribes_to_all_streams() {
        let (bot, _manager) = setup();
        let listeners = bot.listeners.read();
        for kind in EventKind::ALL {
            assert_eq!(listeners.get(&kind).map(Vec::len), Some(1), "{kind}");
        }
    }

    #[tokio::test]
    async fn test_duplicate_app_command() {
        let bot = LocalBot::new("local", "!");
        bot.add_app_command(AppCommand::new("autocomplete", "a")).unwrap();
        let err = bot
            .add_app_command(AppCommand::new("autocomplete", "b"))
            .unwrap_err();
        assert!(matches!(err, ApiError::DuplicateAppCommand { name } if name == "autocomplete"));
        assert_eq!(bot.app_commands().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_autocomplete_lands_in_outbox() {
        let (bot, manager) = setup();
        manager
            .add_autocomplete_fn("ping", |_: Interaction| async {})
            .unwrap();
        assert_eq!(bot.app_commands()[0].name, "autocomplete");

        bot.emit(invoke(10, "ping")).await;
        assert!(bot.outbox().is_empty());

        bot.emit(invoke(11, "pong")).await;
        assert_eq!(
            bot.take_outbox(),
            vec![Outgoing::Ephemeral {
                interaction_id: 11,
                user_id: 7,
                content: "No autocomplete command with name: ` pong `".to_string(),
            }]
        );
        assert!(bot.outbox().is_empty());
    }

    #[tokio::test]
    async fn test_events_are_handled_in_emission_order() {
        let (bot, manager) = setup();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        manager
            .add_thread_fn("build", move |thread: Thread| {
                let sink = sink.clone();
                async move { sink.lock().push(format!("thread {}", thread.id)) }
            })
            .unwrap();
        let sink = seen.clone();
        manager
            .add_reply_fn("pin", move |target: ReplyTarget| {
                let sink = sink.clone();
                async move { sink.lock().push(format!("reply {}", target.id())) }
            })
            .unwrap();

        let original = Message::new(40, 1, User::new(7, "alice"), "release notes");
        let reply = Message::new(41, 1, User::new(8, "bob"), "!pin")
            .replying_to(MessageReference::new(40, 1).with_cached(original));

        bot.emit(Thread::new(5, 1, "!build")).await;
        bot.emit(reply).await;
        bot.emit(Thread::new(6, 1, "!build")).await;

        assert_eq!(*seen.lock(), vec!["thread 5", "reply 40", "thread 6"]);
    }

    #[tokio::test]
    async fn test_prefix_change_applies_to_next_event() {
        let (bot, manager) = setup();
        let count = Arc::new(Mutex::new(0));
        let counter = count.clone();
        manager
            .add_thread_fn("build", move |_: Thread| {
                let counter = counter.clone();
                async move { *counter.lock() += 1 }
            })
            .unwrap();

        bot.set_command_prefix("?");
        bot.emit(Thread::new(5, 1, "!build")).await;
        bot.emit(Thread::new(6, 1, "?build")).await;
        assert_eq!(*count.lock(), 1);
    }

    #[tokio::test]
    async fn test_disconnected_bot_rejects_sends() {
        let (bot, manager) = setup();
        manager
            .add_autocomplete_fn("ping", |_: Interaction| async {})
            .unwrap();
        bot.disconnect();

        let err = manager
            .handle_interaction(&invoke(12, "pong"))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Api(ApiError::NotConnected)));
        assert!(bot.outbox().is_empty());
    }
}
