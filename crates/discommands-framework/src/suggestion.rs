//! Autocomplete suggestions for the synthetic command's options.

use discommands_core::Choice;

/// Builds the `name` option suggestions.
///
/// Every name containing `current` (trimmed, case-insensitive) is suggested,
/// in the order `names` yields them. The label is the prefixed display form,
/// the value the bare name. `limit` caps the number of suggestions.
pub fn command_name_choices<'a>(
    names: impl IntoIterator<Item = &'a str>,
    prefix: &str,
    current: &str,
    limit: Option<usize>,
) -> Vec<Choice> {
    let needle = current.trim().to_lowercase();
    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(limit.unwrap_or(usize::MAX))
        .map(|name| Choice::new(format!("{prefix}{name}"), name))
        .collect()
}

/// Builds the `parameters` option suggestions.
///
/// Parameters are free-form, so nothing is suggested.
pub fn parameter_choices(_current: &str) -> Vec<Choice> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["ping", "pingall", "status"];

    fn values(choices: &[Choice]) -> Vec<&str> {
        choices.iter().map(|c| c.value.as_str()).collect()
    }

    #[test]
    fn test_substring_match_in_order() {
        let choices = command_name_choices(NAMES, "!", "ping", None);
        assert_eq!(values(&choices), vec!["ping", "pingall"]);
        assert_eq!(choices[0], Choice::new("!ping", "ping"));
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let choices = command_name_choices(NAMES, "!", "  ALL ", None);
        assert_eq!(values(&choices), vec!["pingall"]);

        let choices = command_name_choices(["PingAll"], "?", "pinga", None);
        assert_eq!(choices, vec![Choice::new("?PingAll", "PingAll")]);
    }

    #[test]
    fn test_empty_input_matches_everything() {
        assert_eq!(command_name_choices(NAMES, "!", "", None).len(), 3);
    }

    #[test]
    fn test_limit() {
        let choices = command_name_choices(NAMES, "!", "", Some(2));
        assert_eq!(values(&choices), vec!["ping", "pingall"]);
    }

    #[test]
    fn test_parameters_never_suggested() {
        assert!(parameter_choices("anything").is_empty());
    }
}
