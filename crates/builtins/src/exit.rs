// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `exit`

use crate::args;
use clap::Parser;
use gsh_core::{Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "exit", about = "Leave the shell")]
pub struct ExitArgs {
    /// Process exit code
    #[arg(default_value_t = 0, allow_negative_numbers = true)]
    pub code: i32,
}

/// Raises the exit signal.
#[derive(Debug, Clone, Default)]
pub struct ExitBuiltin {
    args: Option<ExitArgs>,
}

impl Command for ExitBuiltin {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        "leave the shell"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<ExitArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);
        Err(ShellError::Exit { code: args.code })
    }
}

#[cfg(test)]
#[path = "exit_tests.rs"]
mod tests;
