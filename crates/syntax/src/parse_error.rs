// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser error types and result structures.

use crate::ast::CommandLine;
use crate::error::LexerError;
use crate::span::{diagnostic_context, Span};
use thiserror::Error;

/// Syntax errors for a single command line.
///
/// Every separator-delimited run of arguments is a valid expression, so all
/// syntax errors currently originate in the lexer.
///
/// ```ignore
/// use gsh_syntax::{Parser, ParseError, LexerError};
///
/// let result = Parser::parse("echo 'unterminated");
/// assert!(matches!(
///     result,
///     Err(ParseError::Lexer(LexerError::UnterminatedSingleQuote { .. }))
/// ));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lexer error during tokenization.
    #[error("{0}")]
    Lexer(#[from] LexerError),
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer(e) => e.span(),
        }
    }

    /// Render a diagnostic snippet with line/column info against `input`.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

/// Parse result with error recovery.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Expressions that parsed successfully.
    pub line: CommandLine,
    /// Errors encountered along the way.
    pub errors: Vec<ParseError>,
}
