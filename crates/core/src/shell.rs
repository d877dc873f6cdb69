// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shell session: state shared by every command of one session.

use crate::alias::AliasRegistry;
use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::event_manager::EventManager;
use crate::exec::ExecutingVisitor;
use crate::executor::{CommandExecutor, DefaultCommandExecutor};
use crate::history::History;
use crate::io::Io;
use crate::registry::CommandRegistry;
use crate::resolver::CommandResolver;
use crate::variables::Variables;
use gsh_syntax::Parser;
use serde_json::Value;
use std::sync::Arc;

/// One interactive session.
///
/// The alias and command registries and the event manager are shared handles:
/// clones of them (for example held by a plugin loader) see and make the same
/// changes. Variables, history and I/O belong to this session alone.
///
/// ```ignore
/// use gsh_core::{FnCommand, Shell, Value};
///
/// let mut shell = Shell::new();
/// shell.commands().register(Box::new(FnCommand::new("id", "echo args", |ctx| {
///     Ok(Value::String(ctx.args.join(" ")))
/// })))?;
/// shell.aliases().register("hi", "id hi")?;
/// assert_eq!(shell.execute("hi there")?, Value::String("hi there".into()));
/// # Ok::<(), gsh_core::ShellError>(())
/// ```
pub struct Shell {
    variables: Variables,
    io: Io,
    events: EventManager,
    aliases: AliasRegistry,
    commands: CommandRegistry,
    resolver: CommandResolver,
    executor: Arc<dyn CommandExecutor>,
    history: History,
    config: ShellConfig,
    /// Aliases currently expanding, outermost first.
    alias_stack: Vec<String>,
}

impl Shell {
    /// Session with empty registries, default configuration and silent I/O.
    pub fn new() -> Self {
        ShellBuilder::default().assemble()
    }

    pub fn builder() -> ShellBuilder {
        ShellBuilder::default()
    }

    /// Parse and run `line`, returning the value of its last expression.
    ///
    /// Top-level lines are recorded in history; lines run by alias expansion
    /// are not.
    pub fn execute(&mut self, line: &str) -> Result<Value, ShellError> {
        if self.alias_stack.is_empty() {
            self.history.record(line);
        }
        let ast = Parser::parse(line).map_err(|source| ShellError::Parse {
            line: line.to_string(),
            source,
        })?;
        if ast.is_empty() {
            return Ok(Value::Null);
        }
        tracing::debug!(
            expressions = ast.count_expressions(),
            depth = self.alias_stack.len(),
            "running line"
        );
        let executor = Arc::clone(&self.executor);
        ExecutingVisitor::new(self, executor.as_ref()).execute(&ast)
    }

    /// Run the expansion of alias `alias`.
    ///
    /// Fails with [`ShellError::AliasCycle`] when `alias` is already expanding
    /// or the configured maximum nesting depth is reached.
    pub fn execute_alias(&mut self, alias: &str, line: &str) -> Result<Value, ShellError> {
        let cycle = self.alias_stack.iter().any(|a| a == alias);
        if cycle || self.alias_stack.len() >= self.config.max_alias_depth {
            let mut chain = self.alias_stack.clone();
            chain.push(alias.to_string());
            tracing::debug!(chain = ?chain, "alias expansion stopped");
            return Err(ShellError::AliasCycle { chain });
        }

        self.alias_stack.push(alias.to_string());
        let result = self.execute(line);
        self.alias_stack.pop();
        result
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    pub fn io(&self) -> &Io {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut Io {
        &mut self.io
    }

    /// Swap in new streams, returning the old ones.
    pub fn replace_io(&mut self, io: Io) -> Io {
        std::mem::replace(&mut self.io, io)
    }

    pub fn events(&self) -> &EventManager {
        &self.events
    }

    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn resolver(&self) -> &CommandResolver {
        &self.resolver
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Number of alias expansions currently in progress.
    pub fn alias_depth(&self) -> usize {
        self.alias_stack.len()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("variables", &self.variables)
            .field("aliases", &self.aliases)
            .field("commands", &self.commands)
            .field("alias_stack", &self.alias_stack)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Shell`].
///
/// Registries not supplied are created on the builder's event manager.
#[derive(Default)]
pub struct ShellBuilder {
    config: ShellConfig,
    io: Option<Io>,
    events: Option<EventManager>,
    aliases: Option<AliasRegistry>,
    commands: Option<CommandRegistry>,
    executor: Option<Arc<dyn CommandExecutor>>,
    variables: Option<Variables>,
}

impl ShellBuilder {
    pub fn config(mut self, config: ShellConfig) -> Self {
        self.config = config;
        self
    }

    pub fn io(mut self, io: Io) -> Self {
        self.io = Some(io);
        self
    }

    pub fn events(mut self, events: EventManager) -> Self {
        self.events = Some(events);
        self
    }

    pub fn aliases(mut self, aliases: AliasRegistry) -> Self {
        self.aliases = Some(aliases);
        self
    }

    pub fn commands(mut self, commands: CommandRegistry) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Build the shell, defining the configured aliases and variables.
    pub fn build(self) -> Result<Shell, ShellError> {
        let mut shell = self.assemble();
        let aliases = shell.config.aliases.clone();
        for (name, target) in &aliases {
            shell.aliases.register(name, target)?;
        }
        let variables = shell.config.variables.clone();
        for (name, value) in variables {
            shell.variables.set(&name, value)?;
        }
        Ok(shell)
    }

    fn assemble(self) -> Shell {
        let events = self.events.unwrap_or_default();
        let aliases = self
            .aliases
            .unwrap_or_else(|| AliasRegistry::new(events.clone()));
        let commands = self
            .commands
            .unwrap_or_else(|| CommandRegistry::new(events.clone()));
        Shell {
            variables: self.variables.unwrap_or_default(),
            io: self.io.unwrap_or_default(),
            resolver: CommandResolver::new(aliases.clone(), commands.clone()),
            aliases,
            commands,
            events,
            executor: self
                .executor
                .unwrap_or_else(|| Arc::new(DefaultCommandExecutor)),
            history: History::new(self.config.history_capacity),
            config: self.config,
            alias_stack: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
