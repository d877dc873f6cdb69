// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parser that assembles tokens into a [`CommandLine`].

use crate::ast::{Argument, CommandLine, Expression};
use crate::lexer::Lexer;
use crate::parse_error::{ParseError, ParseResult};
use crate::token::{Span, Token, TokenKind};

/// Command-line parser.
///
/// Parsing is two steps:
/// 1. Lexing: the line is split into argument tokens and separators
/// 2. Building: runs of arguments between separators become expressions
///
/// Grammar:
///
/// ```text
/// command_line := separator* (expression (separator+ expression)*)? separator*
/// expression   := argument+
/// argument     := plain | quoted | opaque
/// separator    := ';' | newline
/// ```
///
/// # Examples
///
/// ```ignore
/// use gsh_syntax::Parser;
///
/// let ast = Parser::parse("echo hello; alias ll 'ls -l'")?;
/// assert_eq!(ast.count_expressions(), 2);
///
/// // Blank and comment-only lines parse to nothing
/// assert!(Parser::parse("   # just a note")?.is_empty());
/// # Ok::<(), gsh_syntax::ParseError>(())
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    input_len: usize,
}

impl Parser {
    /// Parse a line into a command line, failing on the first syntax error.
    pub fn parse(input: &str) -> Result<CommandLine, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        Ok(Parser::new(tokens, input.len()).parse_command_line())
    }

    /// Parse with error recovery, returning every expression that could be
    /// built alongside the collected errors.
    ///
    /// ```ignore
    /// use gsh_syntax::Parser;
    ///
    /// let result = Parser::parse_with_recovery("echo ok\necho 'broken\necho fine");
    /// assert_eq!(result.line.count_expressions(), 2);
    /// assert_eq!(result.errors.len(), 1);
    /// ```
    pub fn parse_with_recovery(input: &str) -> ParseResult {
        let (tokens, errors) = Lexer::tokenize_with_recovery(input);
        ParseResult {
            line: Parser::new(tokens, input.len()).parse_command_line(),
            errors: errors.into_iter().map(ParseError::from).collect(),
        }
    }

    fn new(tokens: Vec<Token>, input_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            input_len,
        }
    }

    fn parse_command_line(&mut self) -> CommandLine {
        let mut expressions = Vec::new();

        self.skip_separators();
        while let Some(expr) = self.parse_expression() {
            expressions.push(expr);
            self.skip_separators();
        }

        let span = match (expressions.first(), expressions.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::empty(self.input_len),
        };
        CommandLine { expressions, span }
    }

    /// Parse arguments up to the next separator or end of input.
    fn parse_expression(&mut self) -> Option<Expression> {
        let mut arguments = Vec::new();
        while let Some(arg) = self.parse_argument() {
            arguments.push(arg);
        }

        let first = arguments.first()?.span;
        let last = arguments.last().map(|a| a.span).unwrap_or(first);
        Some(Expression {
            arguments,
            span: first.merge(last),
        })
    }

    fn parse_argument(&mut self) -> Option<Argument> {
        let token = self.peek()?;
        let span = token.span;
        let arg = match &token.kind {
            TokenKind::Plain(text) => Argument::plain(text.clone(), span),
            TokenKind::Quoted(text) => Argument::quoted(text.clone(), span),
            TokenKind::Opaque(text) => Argument::opaque(text.clone(), span),
            TokenKind::Semi | TokenKind::Newline => return None,
        };
        self.pos += 1;
        Some(arg)
    }

    #[inline]
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn skip_separators(&mut self) {
        while self.peek().is_some_and(|t| t.kind.is_separator()) {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
#[path = "../parser_tests/mod.rs"]
mod tests;
