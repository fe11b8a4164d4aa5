//! Configuration module for the discommands runtime.
//!
//! TOML files, environment variables and programmatic overrides are layered
//! with figment into a [`DiscommandsConfig`], then validated.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    BotSection, CommandsConfig, DiscommandsConfig, LogFormat, LogLevel, LogOutput, LoggingConfig,
};
pub use validation::validate_config;
