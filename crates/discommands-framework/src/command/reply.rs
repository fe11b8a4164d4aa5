use std::fmt;

use async_trait::async_trait;

use super::{Command, CommandKind, validate_name};
use crate::callback::{BoxedCallback, Callback, into_callback};
use crate::error::{CommandError, CommandResult};
use discommands_core::{Message, ReplyTarget};

/// A command invoked by replying to a message with the prefixed name.
///
/// The callback never sees the reply itself: it receives the message being
/// replied to, preferring the framework's cached copy over the resolved one.
#[derive(Clone)]
pub struct ReplyCommand {
    name: String,
    callback: BoxedCallback<ReplyTarget>,
}

impl ReplyCommand {
    /// Creates a command named `name` (trimmed) invoking `callback`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyName`] if `name` is empty after trimming.
    pub fn new<F>(name: impl Into<String>, callback: F) -> CommandResult<Self>
    where
        F: Callback<ReplyTarget>,
    {
        Ok(Self {
            name: validate_name(name)?,
            callback: into_callback(callback),
        })
    }
}

#[async_trait]
impl Command for ReplyCommand {
    const KIND: CommandKind = CommandKind::Reply;
    type Payload = Message;

    fn name(&self) -> &str {
        &self.name
    }

    /// # Errors
    ///
    /// Returns [`CommandError::MissingReplyTarget`] if `message` references
    /// nothing the framework could provide.
    async fn call(&self, message: Message) -> CommandResult<()> {
        let target = message
            .reference
            .as_ref()
            .and_then(|reference| reference.reply_target())
            .ok_or(CommandError::MissingReplyTarget)?;

        self.callback
            .invoke(target)
            .await
            .map_err(CommandError::Callback)
    }
}

impl fmt::Debug for ReplyCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discommands_core::{MessageReference, ResolvedReference, User};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn original(content: &str) -> Message {
        Message::new(10, 100, User::new(5, "bob"), content)
    }

    fn reply(reference: MessageReference) -> Message {
        Message::new(11, 100, User::new(6, "carol"), "!pin").replying_to(reference)
    }

    fn recording() -> (ReplyCommand, Arc<Mutex<Vec<ReplyTarget>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let command = ReplyCommand::new("pin", move |target: ReplyTarget| {
            let sink = Arc::clone(&sink);
            async move {
                sink.lock().push(target);
            }
        })
        .unwrap();
        (command, seen)
    }

    #[tokio::test]
    async fn test_delivers_cached_message() {
        let (command, seen) = recording();
        let reference = MessageReference::new(10, 100)
            .with_cached(original("cached"))
            .with_resolved(ResolvedReference::Message(Box::new(original("resolved"))));

        command.call(reply(reference)).await.unwrap();

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message().unwrap().content, "cached");
        assert_ne!(seen[0].id(), 11);
    }

    #[tokio::test]
    async fn test_delivers_resolved_message_without_cache() {
        let (command, seen) = recording();
        let reference = MessageReference::new(10, 100)
            .with_resolved(ResolvedReference::Message(Box::new(original("resolved"))));

        command.call(reply(reference)).await.unwrap();

        assert_eq!(seen.lock()[0].message().unwrap().content, "resolved");
    }

    #[tokio::test]
    async fn test_missing_reference_is_invalid_argument() {
        let (command, seen) = recording();
        let err = command.call(original("!pin")).await.unwrap_err();

        assert!(matches!(err, CommandError::MissingReplyTarget));
        assert!(seen.lock().is_empty());
    }

    #[tokio::test]
    async fn test_callback_error_is_surfaced() {
        let command = ReplyCommand::new("pin", |_: ReplyTarget| async {
            Err::<(), _>(std::io::Error::other("pin failed"))
        })
        .unwrap();
        let reference = MessageReference::new(10, 100).with_cached(original("x"));

        let err = command.call(reply(reference)).await.unwrap_err();
        assert!(matches!(err, CommandError::Callback(_)));
        assert!(err.to_string().contains("pin failed"));
    }
}
