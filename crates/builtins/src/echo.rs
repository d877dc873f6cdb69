// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `echo`

use crate::args;
use clap::Parser;
use gsh_core::{Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "echo", about = "Print arguments separated by spaces")]
pub struct EchoArgs {
    /// Do not print the trailing newline
    #[arg(short = 'n')]
    pub no_newline: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

/// Writes its arguments joined by single spaces and returns the text.
#[derive(Debug, Clone, Default)]
pub struct EchoBuiltin {
    args: Option<EchoArgs>,
}

impl Command for EchoBuiltin {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "print arguments"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<EchoArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);
        let text = args.words.join(" ");
        let out = ctx.out();
        write!(out, "{text}")?;
        if !args.no_newline {
            writeln!(out)?;
        }
        Ok(Value::String(text))
    }
}

#[cfg(test)]
#[path = "echo_tests.rs"]
mod tests;
