// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `history`

use crate::args;
use clap::Parser;
use gsh_core::{Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "history", about = "Show or clear the session history")]
pub struct HistoryArgs {
    /// Forget all recorded lines
    #[arg(short = 'c', long)]
    pub clear: bool,

    /// Show only the last N entries
    #[arg(short = 'n', long, conflicts_with = "clear")]
    pub last: Option<usize>,
}

/// Prints numbered history entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuiltin {
    args: Option<HistoryArgs>,
}

impl Command for HistoryBuiltin {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "show or clear the session history"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<HistoryArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);

        if args.clear {
            ctx.shell.history_mut().clear();
            return Ok(Value::Null);
        }

        let history = ctx.shell.history();
        let skip = args
            .last
            .map_or(0, |n| history.len().saturating_sub(n));
        let lines: Vec<String> = history
            .entries()
            .skip(skip)
            .map(|e| format!("{:>5}  {}", e.number, e.line))
            .collect();
        let out = ctx.out();
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(Value::from(lines.len()))
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
