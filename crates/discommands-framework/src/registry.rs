//! Per-kind command registries.
//!
//! A [`CommandRegistry`] maps command names to command objects. Keys are
//! unique, iteration follows registration order, and entries are never
//! removed or replaced once inserted.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::command::Command;
use crate::error::{CommandError, CommandResult};

/// Name → command mapping for one [`CommandKind`](crate::CommandKind).
pub struct CommandRegistry<C> {
    commands: Vec<Arc<C>>,
    index: HashMap<String, usize>,
}

impl<C: Command> CommandRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Stores `command` under its name.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Duplicate`] if the name is taken; the registry
    /// is left untouched.
    pub fn insert(&mut self, command: C) -> CommandResult<Arc<C>> {
        self.check_vacant(command.name())?;
        let command = Arc::new(command);
        self.index
            .insert(command.name().to_string(), self.commands.len());
        self.commands.push(Arc::clone(&command));
        Ok(command)
    }

    /// Fails with [`CommandError::Duplicate`] if `name` is taken.
    pub fn check_vacant(&self, name: &str) -> CommandResult<()> {
        if self.contains(name) {
            return Err(CommandError::Duplicate {
                kind: C::KIND,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Looks up a command by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<C>> {
        self.index
            .get(name)
            .map(|&position| Arc::clone(&self.commands[position]))
    }

    /// Returns `true` if a command named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }

    /// Returns the registered commands in registration order.
    pub fn commands(&self) -> Vec<Arc<C>> {
        self.commands.clone()
    }
}

impl<C: Command> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> fmt::Debug for CommandRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("kind", &C::KIND)
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandKind, ThreadCommand};
    use discommands_core::Thread;

    fn command(name: &str) -> ThreadCommand {
        ThreadCommand::new(name, |_: Thread| async {}).unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = CommandRegistry::new();
        let stored = registry.insert(command("build")).unwrap();

        assert_eq!(stored.name(), "build");
        assert!(Arc::ptr_eq(&registry.get("build").unwrap(), &stored));
        assert!(registry.get("deploy").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut registry = CommandRegistry::new();
        let first = registry.insert(command("build")).unwrap();
        let err = registry.insert(command(" build ")).unwrap_err();

        match err {
            CommandError::Duplicate { kind, name } => {
                assert_eq!(kind, CommandKind::Thread);
                assert_eq!(name, "build");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(registry.len(), 1);
        assert!(Arc::ptr_eq(&registry.get("build").unwrap(), &first));
    }

    #[test]
    fn test_names_follow_registration_order() {
        let mut registry = CommandRegistry::new();
        for name in ["status", "ping", "pingall"] {
            registry.insert(command(name)).unwrap();
        }

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["status", "ping", "pingall"]);
        assert_eq!(registry.commands()[1].name(), "ping");
    }
}
