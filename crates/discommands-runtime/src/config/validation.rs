//! Configuration validation utilities.

use super::error::{ConfigError, ConfigResult};
use super::schema::{BotSection, CommandsConfig, DiscommandsConfig, LogOutput, LoggingConfig};

/// Longest name the host accepts for a slash command.
const MAX_COMMAND_NAME_LEN: usize = 32;

/// Validates the entire configuration.
pub fn validate_config(config: &DiscommandsConfig) -> ConfigResult<()> {
    validate_bot_config(&config.bot)?;
    validate_commands_config(&config.commands)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validates the host bot settings.
fn validate_bot_config(bot: &BotSection) -> ConfigResult<()> {
    if bot.id.is_empty() {
        return Err(ConfigError::missing_field("bot.id"));
    }

    if bot.command_prefix.is_empty() {
        return Err(ConfigError::missing_field("bot.command_prefix"));
    }

    if bot.command_prefix.chars().any(char::is_whitespace) {
        return Err(ConfigError::validation(
            "Command prefix cannot contain whitespace",
        ));
    }

    Ok(())
}

/// Validates the command manager settings.
fn validate_commands_config(commands: &CommandsConfig) -> ConfigResult<()> {
    let name = &commands.autocomplete_command;
    if name.is_empty() {
        return Err(ConfigError::missing_field("commands.autocomplete_command"));
    }

    if name.chars().count() > MAX_COMMAND_NAME_LEN {
        return Err(ConfigError::validation(format!(
            "Autocomplete command name must be at most {MAX_COMMAND_NAME_LEN} characters"
        )));
    }

    if name.chars().any(char::is_whitespace) || name.to_lowercase() != *name {
        return Err(ConfigError::validation(format!(
            "Autocomplete command name must be lowercase without spaces: {name}"
        )));
    }

    if !commands.not_found_message.contains("{name}") {
        return Err(ConfigError::validation(
            "Not-found message must contain the {name} placeholder",
        ));
    }

    if commands.max_suggestions == Some(0) {
        return Err(ConfigError::validation(
            "Max suggestions must be greater than 0",
        ));
    }

    Ok(())
}

/// Validates the logging settings.
fn validate_logging_config(logging: &LoggingConfig) -> ConfigResult<()> {
    if logging.output == LogOutput::File && logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&DiscommandsConfig::default()).is_ok());
    }

    #[test]
    fn test_validate_prefix() {
        let mut config = DiscommandsConfig::default();
        config.bot.command_prefix = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { .. })
        ));

        config.bot.command_prefix = "! ".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));

        config.bot.command_prefix = "bot.".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_autocomplete_command_name() {
        let long = "a".repeat(33);
        for bad in ["", "Autocomplete", "auto complete", long.as_str()] {
            let mut config = DiscommandsConfig::default();
            config.commands.autocomplete_command = bad.to_string();
            assert!(validate_config(&config).is_err(), "accepted {bad:?}");
        }

        let mut config = DiscommandsConfig::default();
        config.commands.autocomplete_command = "run-command".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_not_found_template() {
        let mut config = DiscommandsConfig::default();
        config.commands.not_found_message = "Unknown command".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_max_suggestions() {
        let mut config = DiscommandsConfig::default();
        config.commands.max_suggestions = Some(0);
        assert!(validate_config(&config).is_err());

        config.commands.max_suggestions = Some(1);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_file_output_needs_path() {
        let mut config = DiscommandsConfig::default();
        config.logging.output = LogOutput::File;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { .. })
        ));

        config.logging.file_path = Some("bot.log".into());
        assert!(validate_config(&config).is_ok());
    }
}
