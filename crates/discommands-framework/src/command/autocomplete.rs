use std::fmt;

use async_trait::async_trait;

use super::{Command, CommandKind, validate_name};
use crate::callback::{BoxedCallback, Callback, into_callback};
use crate::error::{CommandError, CommandResult};
use discommands_core::Interaction;

/// A command invoked through the synthetic autocomplete slash command.
///
/// The callback receives the invoking interaction unchanged.
#[derive(Clone)]
pub struct AutocompleteCommand {
    name: String,
    callback: BoxedCallback<Interaction>,
}

impl AutocompleteCommand {
    /// Creates a command named `name` (trimmed) invoking `callback`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyName`] if `name` is empty after trimming.
    pub fn new<F>(name: impl Into<String>, callback: F) -> CommandResult<Self>
    where
        F: Callback<Interaction>,
    {
        Ok(Self {
            name: validate_name(name)?,
            callback: into_callback(callback),
        })
    }
}

#[async_trait]
impl Command for AutocompleteCommand {
    const KIND: CommandKind = CommandKind::Autocomplete;
    type Payload = Interaction;

    fn name(&self) -> &str {
        &self.name
    }

    async fn call(&self, interaction: Interaction) -> CommandResult<()> {
        self.callback
            .invoke(interaction)
            .await
            .map_err(CommandError::Callback)
    }
}

impl fmt::Debug for AutocompleteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutocompleteCommand")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discommands_core::{BoxedEvent, Namespace, Thread, User};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn interaction() -> Interaction {
        Interaction::application_command(
            1,
            "autocomplete",
            Namespace::new().with("name", "ping"),
            User::new(7, "alice"),
            3,
        )
    }

    #[tokio::test]
    async fn test_forwards_interaction_unchanged() {
        let seen = Arc::new(parking_lot::Mutex::new(None));
        let sink = Arc::clone(&seen);
        let command = AutocompleteCommand::new(" ping ", move |i: Interaction| {
            let sink = Arc::clone(&sink);
            async move {
                *sink.lock() = Some(i);
            }
        })
        .unwrap();

        assert_eq!(command.name(), "ping");
        command.call(interaction()).await.unwrap();
        assert_eq!(seen.lock().as_ref(), Some(&interaction()));
    }

    #[tokio::test]
    async fn test_repeated_calls_reinvoke() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let command = AutocompleteCommand::new("ping", move |_: Interaction| {
            let c = Arc::clone(&counter);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
            }
        })
        .unwrap();

        command.call(interaction()).await.unwrap();
        command.call(interaction()).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_call_event_rejects_wrong_payload() {
        let command = AutocompleteCommand::new("ping", |_: Interaction| async {}).unwrap();
        let err = command
            .call_event(&BoxedEvent::new(Thread::new(1, 2, "!ping")))
            .await
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(matches!(err, CommandError::PayloadMismatch { .. }));
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = AutocompleteCommand::new("   ", |_: Interaction| async {}).unwrap_err();
        assert!(matches!(err, CommandError::EmptyName));
    }
}
