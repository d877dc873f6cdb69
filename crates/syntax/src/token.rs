// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types produced by the lexer.

use std::fmt;

pub use crate::span::Span;

/// A token with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token kinds.
///
/// Argument-bearing tokens keep their raw source text: quoted and opaque
/// strings include their delimiters, and escapes and `${...}` references are
/// left untouched for the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of non-whitespace, non-quote, non-separator characters.
    Plain(String),
    /// `"..."` string, delimiters included.
    Quoted(String),
    /// `'...'` string, delimiters included.
    Opaque(String),
    /// `;`
    Semi,
    /// `\n`
    Newline,
}

impl TokenKind {
    /// Whether this token terminates an expression.
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Semi | TokenKind::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Plain(s) => write!(f, "'{}'", s),
            TokenKind::Quoted(s) | TokenKind::Opaque(s) => write!(f, "{}", s),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Newline => write!(f, "newline"),
        }
    }
}

/// Check if a string is a valid variable name for `${name}` references.
///
/// Names start with `[a-zA-Z_]` and continue with `[a-zA-Z0-9_.-]`; dots and
/// dashes are accepted so dotted settings such as `${gsh.home}` resolve.
pub fn is_valid_variable_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
