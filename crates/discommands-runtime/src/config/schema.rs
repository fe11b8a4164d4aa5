//! Configuration schema definitions.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use discommands_framework::ManagerOptions;
use serde::{Deserialize, Serialize};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscommandsConfig {
    /// Host bot settings.
    #[serde(default)]
    pub bot: BotSection,

    /// Command manager settings.
    #[serde(default)]
    pub commands: CommandsConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Bot
// =============================================================================

/// Host bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSection {
    /// Identifier reported by the bot.
    #[serde(default = "default_bot_id")]
    pub id: String,

    /// Prefix of reply and thread command names.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

impl Default for BotSection {
    fn default() -> Self {
        Self {
            id: default_bot_id(),
            command_prefix: default_command_prefix(),
        }
    }
}

fn default_bot_id() -> String {
    "local".to_string()
}

fn default_command_prefix() -> String {
    "!".to_string()
}

// =============================================================================
// Commands
// =============================================================================

/// Command manager configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Name of the synthetic autocomplete slash command.
    #[serde(default = "default_autocomplete_command")]
    pub autocomplete_command: String,

    /// Description of the synthetic autocomplete slash command.
    #[serde(default = "default_autocomplete_description")]
    pub autocomplete_description: String,

    /// Reply for unknown autocomplete names; `{name}` is substituted.
    #[serde(default = "default_not_found_message")]
    pub not_found_message: String,

    /// Maximum number of name suggestions. Unlimited when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<usize>,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        ManagerOptions::default().into()
    }
}

fn default_autocomplete_command() -> String {
    ManagerOptions::default().autocomplete_command
}

fn default_autocomplete_description() -> String {
    ManagerOptions::default().autocomplete_description
}

fn default_not_found_message() -> String {
    ManagerOptions::default().not_found_message
}

impl CommandsConfig {
    /// Converts to the manager's options.
    pub fn to_options(&self) -> ManagerOptions {
        ManagerOptions {
            autocomplete_command: self.autocomplete_command.clone(),
            autocomplete_description: self.autocomplete_description.clone(),
            not_found_message: self.not_found_message.clone(),
            max_suggestions: self.max_suggestions,
        }
    }
}

impl From<ManagerOptions> for CommandsConfig {
    fn from(options: ManagerOptions) -> Self {
        Self {
            autocomplete_command: options.autocomplete_command,
            autocomplete_description: options.autocomplete_description,
            not_found_message: options.not_found_message,
            max_suggestions: options.max_suggestions,
        }
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level.
    #[serde(default)]
    pub level: LogLevel,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Output destination.
    #[serde(default)]
    pub output: LogOutput,

    /// Log file, used when `output` is `file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Per-module level overrides, e.g. `discommands_framework = "trace"`.
    #[serde(default)]
    pub filters: HashMap<String, LogLevel>,

    /// Include thread IDs.
    #[serde(default)]
    pub thread_ids: bool,

    /// Include source file and line.
    #[serde(default)]
    pub file_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            output: LogOutput::default(),
            file_path: None,
            filters: HashMap::new(),
            thread_ids: false,
            file_location: false,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the lowercase level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Converts to a `tracing` level.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
    Pretty,
    /// Requires the `json-log` feature; falls back to `full` otherwise.
    Json,
}

/// Log destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stdout,
    Stderr,
    File,
}
