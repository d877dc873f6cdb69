// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error types.

use crate::span::Span;
use thiserror::Error;

/// Errors raised while tokenizing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `"` with no closing `"` before the end of input.
    #[error("unterminated double-quoted string starting at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// Span of the opening quote.
        span: Span,
    },

    /// A `'` with no closing `'` before the end of input.
    #[error("unterminated single-quoted string starting at position {}", span.start)]
    UnterminatedSingleQuote {
        /// Span of the opening quote.
        span: Span,
    },

    /// A control character outside quotes.
    #[error("invalid character {ch:?} at position {}", span.start)]
    InvalidCharacter { ch: char, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedDoubleQuote { span }
            | LexerError::UnterminatedSingleQuote { span }
            | LexerError::InvalidCharacter { span, .. } => *span,
        }
    }
}
