// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for line execution

use gsh_syntax::ParseError;
use thiserror::Error;

/// Errors raised while executing a command line.
///
/// [`ShellError::Exit`] is the exit signal rather than a failure: the core
/// passes it through every layer unchanged so the read-eval loop can stop.
#[derive(Debug, Error)]
pub enum ShellError {
    /// `line` is the text that failed to parse, which differs from the typed
    /// line when the error comes from an alias expansion.
    #[error("syntax error: {source}")]
    Parse { line: String, source: ParseError },

    #[error("unknown variable: {name}")]
    UnknownVariable { name: String },

    #[error("command not found: {name}")]
    CommandNotFound { name: String },

    #[error("command already registered: {name}")]
    DuplicateCommand { name: String },

    #[error("alias not found: {name}")]
    AliasNotFound { name: String },

    #[error("alias cycle: {}", chain.join(" -> "))]
    AliasCycle { chain: Vec<String> },

    #[error("{0}")]
    Precondition(String),

    #[error("{name}: {message}")]
    Command { name: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("exit {code}")]
    Exit { code: i32 },
}

impl ShellError {
    /// Ordinary failure raised by a command implementation.
    pub fn command(name: impl Into<String>, message: impl Into<String>) -> Self {
        ShellError::Command {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, ShellError::Exit { .. })
    }

    /// The requested exit code, if this is the exit signal.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ShellError::Exit { code } => Some(*code),
            _ => None,
        }
    }
}

/// Fail with [`ShellError::Precondition`] when a registry or variable name is
/// empty.
pub(crate) fn require_name(what: &str, name: &str) -> Result<(), ShellError> {
    if name.is_empty() {
        return Err(ShellError::Precondition(format!("{what} name must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
