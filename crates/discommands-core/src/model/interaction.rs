//! Interaction payloads.

use std::any::Any;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Id, User};
use crate::event::{Event, EventKind};

/// What triggered an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Connectivity check.
    Ping,
    /// A slash command was invoked.
    ApplicationCommand,
    /// The user is typing into an autocompleted option.
    Autocomplete,
    /// A message component (button, select menu) was used.
    Component,
    /// A modal was submitted.
    ModalSubmit,
}

/// The application command an interaction invokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokedCommand {
    /// Command name as registered in the command tree.
    pub name: String,
}

/// The option values the user supplied, keyed by option name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(BTreeMap<String, Value>);

impl Namespace {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of an option.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the value of an option if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Sets an option value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Sets an option value (builder pattern).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the number of supplied options.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no options were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An interaction delivered on [`EventKind::InteractionCreate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    /// Interaction ID.
    pub id: Id,
    /// Interaction type.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The invoked command, for command and autocomplete interactions.
    #[serde(default)]
    pub command: Option<InvokedCommand>,
    /// Option values supplied by the user.
    #[serde(default)]
    pub namespace: Namespace,
    /// For autocomplete interactions, the option the user is typing into.
    #[serde(default)]
    pub focused: Option<String>,
    /// The invoking user.
    pub user: User,
    /// Channel the interaction happened in.
    pub channel_id: Id,
}

impl Interaction {
    /// Creates an application-command interaction invoking `command`.
    pub fn application_command(
        id: Id,
        command: impl Into<String>,
        namespace: Namespace,
        user: User,
        channel_id: Id,
    ) -> Self {
        Self {
            id,
            kind: InteractionType::ApplicationCommand,
            command: Some(InvokedCommand {
                name: command.into(),
            }),
            namespace,
            focused: None,
            user,
            channel_id,
        }
    }

    /// Creates an autocomplete interaction for `command` while the user is
    /// typing into the `focused` option.
    pub fn autocomplete(
        id: Id,
        command: impl Into<String>,
        namespace: Namespace,
        focused: impl Into<String>,
        user: User,
        channel_id: Id,
    ) -> Self {
        Self {
            kind: InteractionType::Autocomplete,
            focused: Some(focused.into()),
            ..Self::application_command(id, command, namespace, user, channel_id)
        }
    }

    /// Returns the text currently typed into the focused option.
    pub fn focused_value(&self) -> Option<&str> {
        self.focused
            .as_deref()
            .map(|name| self.namespace.get_str(name).unwrap_or_default())
    }

    /// Returns the invoked command's name, if any.
    pub fn command_name(&self) -> Option<&str> {
        self.command.as_ref().map(|c| c.name.as_str())
    }
}

impl Event for Interaction {
    fn event_name(&self) -> &'static str {
        "interaction"
    }

    fn kind(&self) -> EventKind {
        EventKind::InteractionCreate
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_application_command() {
        let raw = r#"{
            "id": 10,
            "type": "application_command",
            "command": { "name": "autocomplete" },
            "namespace": { "name": "ping", "parameters": "now" },
            "user": { "id": 7, "name": "alice" },
            "channel_id": 3
        }"#;

        let interaction: Interaction = serde_json::from_str(raw).unwrap();
        assert_eq!(interaction.kind, InteractionType::ApplicationCommand);
        assert_eq!(interaction.command_name(), Some("autocomplete"));
        assert_eq!(interaction.namespace.get_str("name"), Some("ping"));
        assert_eq!(interaction.namespace.get_str("parameters"), Some("now"));
        assert!(!interaction.user.bot);
        assert_eq!(interaction.focused_value(), None);
    }

    #[test]
    fn test_autocomplete_focused_value() {
        let interaction = Interaction::autocomplete(
            11,
            "autocomplete",
            Namespace::new().with("name", "pi"),
            "name",
            User::new(7, "alice"),
            3,
        );
        assert_eq!(interaction.kind, InteractionType::Autocomplete);
        assert_eq!(interaction.focused_value(), Some("pi"));

        let empty = Interaction::autocomplete(
            12,
            "autocomplete",
            Namespace::new(),
            "parameters",
            User::new(7, "alice"),
            3,
        );
        assert_eq!(empty.focused_value(), Some(""));
    }

    #[test]
    fn test_namespace_get_str_ignores_non_strings() {
        let ns = Namespace::new().with("count", 3).with("name", "ping");
        assert_eq!(ns.get_str("count"), None);
        assert_eq!(ns.get("count"), Some(&Value::from(3)));
        assert_eq!(ns.len(), 2);
    }
}
