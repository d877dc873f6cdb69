// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-offset source locations and the diagnostics built on them.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a command line.
///
/// ```ignore
/// use gsh_syntax::Span;
///
/// let line = "echo hello";
/// assert_eq!(Span::new(5, 10).slice(line), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Zero-width span at `pos`.
    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// The spanned text, or `""` when the span does not fall on valid
    /// UTF-8 boundaries of `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.start..self.end).unwrap_or("")
    }
}

/// Locate a span as `(line_number, column, line_content)`.
///
/// Line numbers start at 1 and columns at 0 (counted in characters).
/// Commands normally arrive one line at a time, but a pasted block may carry
/// several newline-separated expressions.
pub fn locate_span(source: &str, span: Span) -> (usize, usize, &str) {
    let offset = span.start.min(source.len());
    let before = source.get(..offset).unwrap_or(source);

    let line_num = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());
    let col = before[line_start..].chars().count();

    (line_num, col, &source[line_start..line_end])
}

/// Render a rustc-style diagnostic for `span`:
///
/// ```text
/// error: unterminated double-quoted string
///   --> line 1, column 6
///    |
///  1 | echo "hi
///    |      ^
/// ```
pub fn diagnostic_context(source: &str, span: Span, message: &str) -> String {
    let (line_num, col, line_content) = locate_span(source, span);
    let width = span.len().max(1);

    format!(
        "error: {}\n  --> line {}, column {}\n   |\n{:>3} | {}\n   | {}{}",
        message,
        line_num,
        col + 1,
        line_num,
        line_content,
        " ".repeat(col),
        "^".repeat(width)
    )
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
