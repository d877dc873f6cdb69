// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution seam between the visitor and the registries.

use crate::command::CommandContext;
use crate::error::ShellError;
use crate::shell::Shell;
use serde_json::Value;

/// Runs one evaluated invocation.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, shell: &mut Shell, name: &str, args: &[String]) -> Result<Value, ShellError>;
}

/// Resolves `name` through the shell's resolver and runs the fresh instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCommandExecutor;

impl CommandExecutor for DefaultCommandExecutor {
    fn execute(&self, shell: &mut Shell, name: &str, args: &[String]) -> Result<Value, ShellError> {
        let mut command = shell.resolver().resolve(name)?;
        let mut ctx = CommandContext::new(shell, name, args.to_vec());
        command.execute(&mut ctx)
    }
}
