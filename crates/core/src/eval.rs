// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument evaluation.

use crate::error::ShellError;
use crate::variables::Variables;
use gsh_syntax::{Argument, ArgumentKind, Segment};
use serde::{Deserialize, Serialize};

/// What a `${name}` reference to an unset variable evaluates to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsetVariablePolicy {
    /// Fail with [`ShellError::UnknownVariable`].
    #[default]
    Fail,
    /// Substitute the empty string.
    Empty,
}

/// Turns parsed arguments into strings against a set of variables.
///
/// Each argument evaluates to exactly one string. Substitution is a single
/// pass: text coming out of a variable is never scanned for references again.
///
/// ```ignore
/// use gsh_core::{Evaluator, Variables};
/// use gsh_syntax::Parser;
///
/// let mut vars = Variables::new();
/// vars.set("who", "world")?;
/// let line = Parser::parse(r#"echo "hello ${who}" '${who}'"#)?;
/// let args = &line.expressions[0].arguments;
///
/// let eval = Evaluator::new(&vars);
/// assert_eq!(eval.evaluate(&args[1])?, "hello world");
/// assert_eq!(eval.evaluate(&args[2])?, "${who}");
/// # Ok::<(), gsh_core::ShellError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    variables: &'a Variables,
    policy: UnsetVariablePolicy,
}

impl<'a> Evaluator<'a> {
    pub fn new(variables: &'a Variables) -> Self {
        Self {
            variables,
            policy: UnsetVariablePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: UnsetVariablePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn evaluate(&self, arg: &Argument) -> Result<String, ShellError> {
        match arg.kind {
            ArgumentKind::Opaque => Ok(arg.unquoted().to_string()),
            ArgumentKind::Plain | ArgumentKind::Quoted => self.expand(arg),
        }
    }

    /// Evaluate every argument in order, stopping at the first failure.
    pub fn evaluate_all(&self, args: &[Argument]) -> Result<Vec<String>, ShellError> {
        args.iter().map(|arg| self.evaluate(arg)).collect()
    }

    fn expand(&self, arg: &Argument) -> Result<String, ShellError> {
        let mut out = String::with_capacity(arg.text.len());
        for segment in arg.segments() {
            match segment {
                Segment::Text(text) => out.push_str(&text),
                Segment::Variable(name) => match self.variables.get_string(name) {
                    Some(value) => out.push_str(&value),
                    None => match self.policy {
                        UnsetVariablePolicy::Fail => {
                            return Err(ShellError::UnknownVariable {
                                name: name.to_string(),
                            })
                        }
                        UnsetVariablePolicy::Empty => {
                            tracing::debug!(variable = name, "unset variable expanded to empty");
                        }
                    },
                },
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
