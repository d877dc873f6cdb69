// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read-eval loop around a [`Shell`].

use gsh_core::{Shell, ShellError};
use gsh_syntax::{LexerError, ParseError, Parser};

/// Status after evaluating one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading; the value is the line's status (0 ok, 1 failed).
    Continue(i32),
    /// The exit signal was raised with this code.
    Exit(i32),
}

/// Drives a shell from command-line strings or its input stream.
pub struct Repl {
    shell: Shell,
}

impl Repl {
    pub fn new(shell: Shell) -> Self {
        Self { shell }
    }

    /// Run each of `lines` in order, stopping at the first failure.
    ///
    /// Returns the process exit code.
    pub fn run_lines(&mut self, lines: &[String]) -> i32 {
        for line in lines {
            match self.eval(line) {
                Outcome::Continue(0) => {}
                Outcome::Continue(status) | Outcome::Exit(status) => return status,
            }
        }
        0
    }

    /// Read and run lines from the shell's input until EOF or `exit`.
    ///
    /// A line that ends inside a quoted string continues on the next line.
    /// Errors are reported and the loop goes on; at EOF the code is the status
    /// of the last line.
    pub fn run_input(&mut self) -> std::io::Result<i32> {
        let mut status = 0;
        let mut pending = String::new();
        loop {
            let read = self.shell.io_mut().input().read_line(&mut pending)?;
            if read > 0 && is_unterminated(&pending) {
                continue;
            }
            let line = std::mem::take(&mut pending);
            if read == 0 && line.is_empty() {
                break;
            }
            match self.eval(line.trim_end_matches(['\n', '\r'])) {
                Outcome::Continue(s) => status = s,
                Outcome::Exit(code) => return Ok(code),
            }
            if read == 0 {
                break;
            }
        }
        Ok(status)
    }

    /// Run one line, reporting any error on the shell's error stream.
    pub fn eval(&mut self, line: &str) -> Outcome {
        let result = self.shell.execute(line);
        let flushed = self.shell.io_mut().flush();
        match result {
            Ok(_) => Outcome::Continue(if flushed.is_ok() { 0 } else { 1 }),
            Err(e) => match e.exit_code() {
                Some(code) => Outcome::Exit(code),
                None => {
                    self.report(&e);
                    Outcome::Continue(1)
                }
            },
        }
    }

    fn report(&mut self, error: &ShellError) {
        let message = match error {
            ShellError::Parse { line, source } => source.diagnostic(line),
            other => format!("gsh: {other}"),
        };
        let err = self.shell.io_mut().err();
        if writeln!(err, "{message}").and_then(|_| err.flush()).is_err() {
            tracing::warn!(%message, "cannot write error report");
        }
    }
}

/// Whether `text` stops inside a quoted string.
fn is_unterminated(text: &str) -> bool {
    matches!(
        Parser::parse(text),
        Err(ParseError::Lexer(
            LexerError::UnterminatedDoubleQuote { .. } | LexerError::UnterminatedSingleQuote { .. }
        ))
    )
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
