//! # discommands
//!
//! Command dispatch helpers for a chat-bot framework.
//!
//! ## Overview
//!
//! Three kinds of commands are supported, each with its own registry:
//!
//! - **Autocomplete commands** run through one synthetic slash command
//!   (`/autocomplete name:<command> [parameters:<text>]`) whose `name` option
//!   suggests registered command names as the user types
//! - **Reply commands** run when a user replies to a message with
//!   `{prefix}{name}`; the callback receives the message replied to
//! - **Thread commands** run when a thread named `{prefix}{name}` is created
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  events   ┌────────────────┐  lookup  ┌──────────────────┐
//! │   Host bot   │──────────▶│ CommandManager │─────────▶│ per-kind registry│──▶ callback
//! │  (impl Bot)  │◀──────────│                │          └──────────────────┘
//! └──────────────┘ responses └────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use discommands::prelude::*;
//!
//! async fn pin(target: ReplyTarget) {
//!     println!("pinning message {}", target.id());
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::new().load()?;
//!     let bot = LocalBot::from_config(&config.bot);
//!     let manager = CommandManager::with_options(bot.clone(), config.commands.to_options());
//!
//!     manager.reply(pin).register()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config`: load `discommands.toml` files (default)
//! - `json-log`: enable the JSON log format

pub use discommands_core as core;
pub use discommands_framework as framework;
pub use discommands_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use discommands::prelude::*;
/// ```
pub mod prelude {
    // Manager and registration
    pub use discommands_framework::{
        AutocompleteCommand, CommandError, CommandKind, CommandManager, CommandResult,
        ManagerOptions, ReplyCommand, ThreadCommand,
    };

    // Host model
    pub use discommands_core::{
        Bot, BoxedBot, Choice, EventKind, Interaction, Message, ReplyTarget, Thread, User,
    };

    // Runtime
    pub use discommands_runtime::{ConfigLoader, DiscommandsConfig, LocalBot, logging};
}
