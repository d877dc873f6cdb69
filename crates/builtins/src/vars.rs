// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `set` and `unset`

use crate::args;
use clap::Parser;
use gsh_core::{value_to_string, Command, CommandContext, ShellError, Value};

#[derive(Parser, Debug, Clone)]
#[command(name = "set", about = "List, show or set variables")]
pub struct SetArgs {
    /// Variable to show or set; lists all variables when omitted
    pub name: Option<String>,

    /// New value; words are joined by spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub value: Vec<String>,
}

/// `set` lists, `set NAME` shows, `set NAME VALUE...` assigns.
#[derive(Debug, Clone, Default)]
pub struct SetBuiltin {
    args: Option<SetArgs>,
}

impl Command for SetBuiltin {
    fn name(&self) -> &str {
        "set"
    }

    fn description(&self) -> &str {
        "list, show or set variables"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<SetArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);

        match &args.name {
            None => {
                let all = ctx.shell.variables().snapshot();
                for (name, value) in &all {
                    writeln!(ctx.out(), "{name}={}", value_to_string(value))?;
                }
                Ok(Value::Object(all.into_iter().collect()))
            }
            Some(name) if args.value.is_empty() => {
                let value = ctx
                    .shell
                    .variables()
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ShellError::UnknownVariable { name: name.clone() })?;
                writeln!(ctx.out(), "{name}={}", value_to_string(&value))?;
                Ok(value)
            }
            Some(name) => {
                let value = Value::String(args.value.join(" "));
                ctx.shell.variables_mut().set(name, value.clone())?;
                Ok(value)
            }
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "unset", about = "Remove variables")]
pub struct UnsetArgs {
    #[arg(required = true)]
    pub names: Vec<String>,
}

/// Removes each named variable. Unknown names are ignored.
#[derive(Debug, Clone, Default)]
pub struct UnsetBuiltin {
    args: Option<UnsetArgs>,
}

impl Command for UnsetBuiltin {
    fn name(&self) -> &str {
        "unset"
    }

    fn description(&self) -> &str {
        "remove variables"
    }

    fn copy(&self) -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        let Some(parsed) = args::parse::<UnsetArgs>(ctx)? else {
            return Ok(Value::Null);
        };
        let args = self.args.insert(parsed);
        let removed = args
            .names
            .iter()
            .filter(|name| ctx.shell.variables_mut().unset(name).is_some())
            .count();
        Ok(Value::from(removed))
    }
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
