// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `alias` and `unalias`

use crate::args;
use clap::Parser;
use gsh_core::{Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "alias", about = "List, show or define aliases")]
pub struct AliasArgs {
    /// Alias to show or define; lists all aliases when omitted
    pub name: Option<String>,

    /// Command line the alias runs; words are joined by spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub target: Vec<String>,
}

/// `alias` lists, `alias NAME` shows, `alias NAME TARGET...` defines.
#[derive(Debug, Clone, Default)]
pub struct AliasBuiltin {
    args: Option<AliasArgs>,
}

impl Command for AliasBuiltin {
    fn name(&self) -> &str {
        "alias"
    }

    fn description(&self) -> &str {
        "list, show or define aliases"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<AliasArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);
        let aliases = ctx.shell.aliases().clone();

        match &args.name {
            None => {
                let all = aliases.list();
                for (name, target) in &all {
                    writeln!(ctx.out(), "{name}='{target}'")?;
                }
                Ok(Value::Object(
                    all.into_iter()
                        .map(|(name, target)| (name, Value::String(target)))
                        .collect(),
                ))
            }
            Some(name) if args.target.is_empty() => {
                let target = aliases.get(name)?;
                writeln!(ctx.out(), "{name}='{target}'")?;
                Ok(Value::String(target))
            }
            Some(name) => {
                let target = args.target.join(" ");
                aliases.register(name, &target)?;
                Ok(Value::String(target))
            }
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "unalias", about = "Remove aliases")]
pub struct UnaliasArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Removes each named alias; fails on the first unknown name.
#[derive(Debug, Clone, Default)]
pub struct UnaliasBuiltin {
    args: Option<UnaliasArgs>,
}

impl Command for UnaliasBuiltin {
    fn name(&self) -> &str {
        "unalias"
    }

    fn description(&self) -> &str {
        "remove aliases"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<UnaliasArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);
        for name in &args.names {
            ctx.shell.aliases().remove(name)?;
        }
        Ok(Value::Null)
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
