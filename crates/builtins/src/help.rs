// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `help`

use crate::args;
use clap::Parser;
use gsh_core::{Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "help", about = "Describe commands and aliases")]
pub struct HelpArgs {
    /// Command or alias to describe; lists everything when omitted
    pub name: Option<String>,
}

/// Lists commands with their descriptions, then aliases.
#[derive(Debug, Clone, Default)]
pub struct HelpBuiltin {
    args: Option<HelpArgs>,
}

impl Command for HelpBuiltin {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "describe commands and aliases"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<HelpArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);

        if let Some(name) = &args.name {
            let description = ctx.shell.resolver().resolve(name)?.description().to_string();
            writeln!(ctx.out(), "{name}: {description}")?;
            return Ok(Value::String(description));
        }

        let commands = ctx.shell.commands().descriptions();
        let aliases = ctx.shell.aliases().list();
        let width = commands
            .iter()
            .map(|(n, _)| n.len())
            .chain(aliases.keys().map(String::len))
            .max()
            .unwrap_or(0);

        let out = ctx.out();
        writeln!(out, "Commands:")?;
        for (name, description) in &commands {
            writeln!(out, "  {name:<width$}  {description}")?;
        }
        if !aliases.is_empty() {
            writeln!(out, "Aliases:")?;
            for (name, target) in &aliases {
                writeln!(out, "  {name:<width$}  {target}")?;
            }
        }
        Ok(Value::from(
            commands.into_iter().map(|(n, _)| n).collect::<Vec<_>>(),
        ))
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
