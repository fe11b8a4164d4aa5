//! discommands runtime.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`, `DiscommandsConfig`)
//! - Logging setup (`LoggingBuilder`)
//! - An in-process host bot (`LocalBot`) for demos and tests
//!
//! ```ignore
//! use discommands_runtime::{ConfigLoader, LocalBot, logging};
//! use discommands_framework::CommandManager;
//!
//! let config = ConfigLoader::new().load()?;
//! logging::init_from_config(&config.logging);
//!
//! let bot = LocalBot::from_config(&config.bot);
//! let manager = CommandManager::with_options(bot.clone(), config.commands.to_options());
//! ```

pub mod config;
pub mod local;
pub mod logging;

// Re-exports
pub use config::{
    BotSection, CommandsConfig, ConfigError, ConfigLoader, ConfigResult, DiscommandsConfig,
    LoggingConfig,
};
pub use local::{LocalBot, Outgoing};
pub use logging::LoggingBuilder;

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// This provides all the commonly used logging macros:
/// - `trace!`, `debug!`, `info!`, `warn!`, `error!`
/// - `instrument` attribute
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, trace, warn};
}
