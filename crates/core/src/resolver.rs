// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name → runnable command resolution.

use crate::alias::AliasRegistry;
use crate::command::{Command, CommandContext};
use crate::error::ShellError;
use crate::registry::CommandRegistry;
use serde_json::Value;

/// Resolves command names against the alias and command registries.
///
/// Aliases are consulted first, so an alias shadows a command of the same
/// name. Nothing is cached: every call sees the registries as they are now.
#[derive(Clone, Debug)]
pub struct CommandResolver {
    aliases: AliasRegistry,
    commands: CommandRegistry,
}

impl CommandResolver {
    pub fn new(aliases: AliasRegistry, commands: CommandRegistry) -> Self {
        Self { aliases, commands }
    }

    /// A fresh instance to run for `name`.
    ///
    /// 1. alias → an [`AliasCommand`] that re-enters the shell with the target
    /// 2. command → a copy of the registered prototype
    /// 3. otherwise [`ShellError::CommandNotFound`]
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Command>, ShellError> {
        if name.is_empty() {
            return Err(ShellError::CommandNotFound {
                name: String::new(),
            });
        }
        if let Ok(target) = self.aliases.get(name) {
            tracing::debug!(name, target = %target, "resolved alias");
            return Ok(Box::new(AliasCommand::new(name, target)));
        }
        match self.commands.get(name) {
            Ok(prototype) => {
                tracing::debug!(name, "resolved command");
                Ok(prototype.copy())
            }
            Err(ShellError::CommandNotFound { .. }) => Err(ShellError::CommandNotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Runs an alias target with the invocation's arguments appended.
///
/// The expanded line is `target` alone without arguments, otherwise `target`
/// and the arguments joined by single spaces. It is parsed again, so an
/// argument containing whitespace splits into several words.
#[derive(Debug, Clone)]
pub struct AliasCommand {
    name: String,
    target: String,
    description: String,
}

impl AliasCommand {
    pub fn new(name: &str, target: String) -> Self {
        Self {
            name: name.to_string(),
            description: format!("alias for '{target}'"),
            target,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// The line this alias runs for `args`.
    pub fn expand(&self, args: &[String]) -> String {
        if args.is_empty() {
            self.target.clone()
        } else {
            format!("{} {}", self.target, args.join(" "))
        }
    }
}

impl Command for AliasCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let line = self.expand(&ctx.args);
        ctx.shell.execute_alias(&self.name, &line)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
