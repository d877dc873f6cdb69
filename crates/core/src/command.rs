// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command contract.

use crate::error::ShellError;
use crate::shell::Shell;
use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

/// An executable command.
///
/// Registries hold one prototype per name. Every invocation runs on a fresh
/// [`copy`](Command::copy), so `execute` may freely mutate per-invocation
/// state such as parsed options.
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    /// One-line summary shown by `help`.
    fn description(&self) -> &str {
        ""
    }

    /// A new instance for one invocation, free of any state from earlier runs.
    fn copy(&self) -> Box<dyn Command>;

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError>;
}

/// Everything a running command may touch.
pub struct CommandContext<'a> {
    pub shell: &'a mut Shell,
    /// Name the command was invoked as (an alias name for alias wrappers).
    pub name: &'a str,
    /// Evaluated arguments, command name excluded.
    pub args: Vec<String>,
}

impl<'a> CommandContext<'a> {
    pub fn new(shell: &'a mut Shell, name: &'a str, args: Vec<String>) -> Self {
        Self { shell, name, args }
    }

    pub fn out(&mut self) -> &mut dyn Write {
        self.shell.io_mut().out()
    }

    pub fn err(&mut self) -> &mut dyn Write {
        self.shell.io_mut().err()
    }

    /// Ordinary failure attributed to this command.
    pub fn fail(&self, message: impl Into<String>) -> ShellError {
        ShellError::command(self.name, message)
    }
}

type CommandFn = dyn Fn(&mut CommandContext<'_>) -> Result<Value, ShellError> + Send + Sync;

/// A stateless command backed by a closure.
///
/// ```ignore
/// use gsh_core::{FnCommand, Value};
///
/// let pwd = FnCommand::new("pwd", "print the working directory", |_ctx| {
///     Ok(Value::String(std::env::current_dir()?.display().to_string()))
/// });
/// ```
#[derive(Clone)]
pub struct FnCommand {
    name: String,
    description: String,
    run: Arc<CommandFn>,
}

impl FnCommand {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, run: F) -> Self
    where
        F: Fn(&mut CommandContext<'_>) -> Result<Value, ShellError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            run: Arc::new(run),
        }
    }
}

impl Command for FnCommand {
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
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommand").field("name", &self.name).finish()
    }
}
