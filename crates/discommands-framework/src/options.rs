//! Tunables of a [`CommandManager`](crate::CommandManager).

use discommands_core::{AppCommand, AppCommandOption};

/// Option name carrying the command to run.
pub const NAME_OPTION: &str = "name";
/// Option name carrying the free-form command parameters.
pub const PARAMETERS_OPTION: &str = "parameters";

/// Settings of the synthetic autocomplete slash command and its replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerOptions {
    /// Name of the synthetic slash command.
    pub autocomplete_command: String,
    /// Description of the synthetic slash command.
    pub autocomplete_description: String,
    /// Ephemeral reply for unknown names; `{name}` is replaced by the name.
    pub not_found_message: String,
    /// Maximum number of name suggestions; `None` means unlimited.
    pub max_suggestions: Option<usize>,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            autocomplete_command: "autocomplete".to_string(),
            autocomplete_description: "Autocomplete command".to_string(),
            not_found_message: "No autocomplete command with name: ` {name} `".to_string(),
            max_suggestions: None,
        }
    }
}

impl ManagerOptions {
    /// Renders the not-found notice for `name`.
    pub fn not_found(&self, name: &str) -> String {
        self.not_found_message.replace("{name}", name)
    }

    /// Describes the synthetic slash command registered into the host's
    /// command tree.
    pub fn slash_command(&self) -> AppCommand {
        AppCommand::new(&self.autocomplete_command, &self.autocomplete_description)
            .option(AppCommandOption::required(NAME_OPTION, "Command name").with_autocomplete())
            .option(
                AppCommandOption::optional(PARAMETERS_OPTION, "Command parameters, if any")
                    .with_autocomplete(),
            )
    }
}
