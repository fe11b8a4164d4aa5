//! # Discommands Framework
//!
//! Command dispatch on top of a host chat framework.
//!
//! This layer provides:
//! - Command value objects for autocomplete, reply and thread commands
//! - Per-kind registries with unique names
//! - [`CommandManager`], which subscribes to the host bot's events and routes
//!   them to registered commands
//! - A synthetic autocomplete slash command with name suggestions
//!
//! # Example
//!
//! ```rust,ignore
//! use discommands_framework::CommandManager;
//!
//! let manager = CommandManager::new(bot);
//!
//! async fn build(thread: Thread) {
//!     println!("building in {}", thread.name);
//! }
//!
//! // Runs whenever a thread named "!build" is created
//! manager.thread(build).register()?;
//! ```

pub mod builder;
pub mod callback;
pub mod command;
pub mod error;
pub mod manager;
pub mod options;
pub mod registry;
pub mod suggestion;

pub use builder::CommandBuilder;
pub use callback::{
    BoxError, BoxedCallback, Callback, CallbackOutput, callback_name, into_callback,
};
pub use command::{AutocompleteCommand, Command, CommandKind, ReplyCommand, ThreadCommand};
pub use error::{CommandError, CommandResult};
pub use manager::CommandManager;
pub use options::{ManagerOptions, NAME_OPTION, PARAMETERS_OPTION};
pub use registry::CommandRegistry;
