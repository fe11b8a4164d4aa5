//! Application (slash) command descriptions.

use serde::{Deserialize, Serialize};

/// A slash command registered into the host's command tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCommand {
    /// Command name.
    pub name: String,
    /// Description shown in the client.
    pub description: String,
    /// Declared options, in display order.
    #[serde(default)]
    pub options: Vec<AppCommandOption>,
}

impl AppCommand {
    /// Creates a command without options.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option (builder pattern).
    pub fn option(mut self, option: AppCommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Looks up a declared option by name.
    pub fn get_option(&self, name: &str) -> Option<&AppCommandOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// A string option of an [`AppCommand`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppCommandOption {
    /// Option name.
    pub name: String,
    /// Description shown in the client.
    pub description: String,
    /// Whether the user must supply a value.
    #[serde(default)]
    pub required: bool,
    /// Whether values are suggested while the user types.
    #[serde(default)]
    pub autocomplete: bool,
}

impl AppCommandOption {
    /// Creates a required string option.
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required: true,
            autocomplete: false,
        }
    }

    /// Creates an optional string option.
    pub fn optional(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, description)
        }
    }

    /// Enables value suggestions for this option.
    pub fn with_autocomplete(mut self) -> Self {
        self.autocomplete = true;
        self
    }
}

/// One autocomplete suggestion: a display label and the value it inserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Label shown to the user.
    pub name: String,
    /// Value submitted when the suggestion is picked.
    pub value: String,
}

impl Choice {
    /// Creates a suggestion.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
