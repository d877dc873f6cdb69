// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line AST.
//!
//! ```text
//! CommandLine
//! └── Expression[]          (separated by ';' or newline)
//!     └── Argument[]        (Plain | Quoted | Opaque)
//! ```

mod utils;
mod visitor;

pub use visitor::AstVisitor;

use crate::span::Span;
use crate::token::is_valid_variable_name;
use serde::{Deserialize, Serialize};

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    pub expressions: Vec<Expression>,
    pub span: Span,
}

impl CommandLine {
    /// A line with nothing to run (blank, whitespace, or comment only).
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

/// One command invocation: name followed by its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    /// Never empty; element 0 names the command.
    pub arguments: Vec<Argument>,
    pub span: Span,
}

impl Expression {
    pub fn name(&self) -> Option<&Argument> {
        self.arguments.first()
    }

    pub fn args(&self) -> &[Argument] {
        self.arguments.get(1..).unwrap_or(&[])
    }
}

/// How an argument was written, which decides how it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentKind {
    /// Bare word; `${name}` references and `\` escapes are interpreted.
    Plain,
    /// `"..."`; unquoted, then references and escapes are interpreted.
    Quoted,
    /// `'...'`; unquoted and taken literally.
    Opaque,
}

/// A single argument as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub kind: ArgumentKind,
    /// Raw source text, delimiters included for quoted and opaque arguments.
    pub text: String,
    pub span: Span,
}

impl Argument {
    pub fn plain(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ArgumentKind::Plain,
            text: text.into(),
            span,
        }
    }

    pub fn quoted(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ArgumentKind::Quoted,
            text: text.into(),
            span,
        }
    }

    pub fn opaque(text: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ArgumentKind::Opaque,
            text: text.into(),
            span,
        }
    }

    /// Text with one leading and one trailing delimiter removed.
    ///
    /// Plain arguments are returned as written.
    pub fn unquoted(&self) -> &str {
        match self.kind {
            ArgumentKind::Plain => &self.text,
            ArgumentKind::Quoted | ArgumentKind::Opaque => strip_delimiters(&self.text),
        }
    }

    /// Whether `${name}` references in this argument are expanded.
    pub fn is_expandable(&self) -> bool {
        !matches!(self.kind, ArgumentKind::Opaque)
    }

    /// Variable names referenced by this argument, in order of appearance.
    ///
    /// Opaque arguments never reference variables.
    pub fn variable_references(&self) -> Vec<&str> {
        self.segments()
            .into_iter()
            .filter_map(|seg| match seg {
                Segment::Variable(name) => Some(name),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Split the unquoted text into literal text and variable references.
    ///
    /// Escapes are resolved here: in plain arguments `\x` yields `x`; in
    /// quoted arguments only `\"`, `\\` and `\$` are escapes and any other
    /// backslash is kept. `${` without a closing `}` or with an invalid name
    /// is literal text. Opaque arguments come back as one text segment.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let text = self.unquoted();
        if !self.is_expandable() {
            return vec![Segment::Text(text.to_string())];
        }

        let mut segments = Vec::new();
        let mut buf = String::new();
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.peek().copied() {
                    Some((_, next))
                        if self.kind == ArgumentKind::Plain
                            || matches!(next, '"' | '\\' | '$') =>
                    {
                        buf.push(next);
                        chars.next();
                    }
                    _ => buf.push('\\'),
                },
                '$' if text[i + 1..].starts_with('{') => {
                    let body = &text[i + 2..];
                    match body.find('}') {
                        Some(close) if is_valid_variable_name(&body[..close]) => {
                            if !buf.is_empty() {
                                segments.push(Segment::Text(std::mem::take(&mut buf)));
                            }
                            segments.push(Segment::Variable(&body[..close]));
                            let resume = i + 2 + close + 1;
                            while chars.peek().is_some_and(|&(j, _)| j < resume) {
                                chars.next();
                            }
                        }
                        _ => buf.push('$'),
                    }
                }
                _ => buf.push(c),
            }
        }

        if !buf.is_empty() || segments.is_empty() {
            segments.push(Segment::Text(buf));
        }
        segments
    }
}

/// A piece of an argument's text after escape processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, escapes already resolved.
    Text(String),
    /// A `${name}` reference.
    Variable(&'a str),
}

fn strip_delimiters(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
