// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executing visitor: runs a parsed command line.

use crate::error::ShellError;
use crate::eval::Evaluator;
use crate::executor::CommandExecutor;
use crate::shell::Shell;
use gsh_syntax::{CommandLine, Expression};
use serde_json::Value;

/// Walks a [`CommandLine`] in source order and runs each expression.
///
/// For every expression the arguments are evaluated against the shell's
/// current variables, so a variable set by one expression is visible to the
/// next. The line's value is the value of its last expression; an empty line
/// is `null` and runs nothing. The first error stops the line and is returned
/// unchanged, which keeps the exit signal intact.
pub struct ExecutingVisitor<'a> {
    shell: &'a mut Shell,
    executor: &'a dyn CommandExecutor,
}

impl<'a> ExecutingVisitor<'a> {
    pub fn new(shell: &'a mut Shell, executor: &'a dyn CommandExecutor) -> Self {
        Self { shell, executor }
    }

    pub fn execute(&mut self, line: &CommandLine) -> Result<Value, ShellError> {
        let mut last = Value::Null;
        for expr in &line.expressions {
            last = self.visit_expression(expr)?;
        }
        Ok(last)
    }

    fn visit_expression(&mut self, expr: &Expression) -> Result<Value, ShellError> {
        let policy = self.shell.config().unset_variables;
        let words = Evaluator::new(self.shell.variables())
            .with_policy(policy)
            .evaluate_all(&expr.arguments)?;
        let Some((name, args)) = words.split_first() else {
            return Ok(Value::Null);
        };

        tracing::debug!(command = %name, args = args.len(), "executing");
        let result = self.executor.execute(self.shell, name, args);
        if let Err(e) = &result {
            match e.exit_code() {
                Some(code) => tracing::debug!(command = %name, code, "exit requested"),
                None => tracing::debug!(command = %name, error = %e, "command failed"),
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
