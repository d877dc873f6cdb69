// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line lexer.
//!
//! Splits one line of input into plain, quoted (`"..."`) and opaque (`'...'`)
//! argument tokens plus `;`/newline separators. Whitespace and `#` comments
//! are skipped. Token text is kept raw: delimiters, backslash escapes and
//! `${name}` references survive untouched so the evaluator can interpret them
//! against the variables in effect at execution time.

use crate::error::LexerError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Tokenizer over a single command line.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Tokenize `input` completely.
    ///
    /// ```ignore
    /// use gsh_syntax::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::tokenize("echo 'a b'; ls")?;
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(tokens[1].kind, TokenKind::Opaque("'a b'".into()));
    /// # Ok::<(), gsh_syntax::LexerError>(())
    /// ```
    pub fn tokenize(input: &'a str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer { input, pos: 0 };
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }
        tracing::trace!(count = tokens.len(), "tokenized line");
        Ok(tokens)
    }

    /// Tokenize `input`, collecting errors instead of stopping at the first.
    ///
    /// On error the partial expression is dropped and lexing resumes at the
    /// next newline, so later lines of a multi-line input still tokenize.
    pub fn tokenize_with_recovery(input: &'a str) -> (Vec<Token>, Vec<LexerError>) {
        let mut lexer = Lexer { input, pos: 0 };
        let mut tokens: Vec<Token> = Vec::new();
        let mut errors = Vec::new();
        loop {
            match lexer.next_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => break,
                Err(e) => {
                    while tokens.last().is_some_and(|t| !t.kind.is_separator()) {
                        tokens.pop();
                    }
                    lexer.skip_to_line_end(e.span().start);
                    errors.push(e);
                }
            }
        }
        (tokens, errors)
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_blanks_and_comments();

        let start = self.pos;
        let kind = match self.peek() {
            None => return Ok(None),
            Some(';') => {
                self.bump();
                TokenKind::Semi
            }
            Some('\n') => {
                self.bump();
                TokenKind::Newline
            }
            Some('"') => self.lex_quoted(start)?,
            Some('\'') => self.lex_opaque(start)?,
            Some(c) if is_invalid(c) => {
                return Err(LexerError::InvalidCharacter {
                    ch: c,
                    span: Span::new(start, start + c.len_utf8()),
                })
            }
            Some(_) => self.lex_plain(start)?,
        };

        Ok(Some(Token::new(kind, Span::new(start, self.pos))))
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_to_line_end(&mut self, from: usize) {
        self.pos = self.input[from..]
            .find('\n')
            .map(|i| from + i)
            .unwrap_or(self.input.len());
    }

    /// Skip blanks, and a `#` comment when one starts where a token would.
    fn skip_blanks_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(c) if is_blank(c) => {
                    self.bump();
                }
                Some('#') => {
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn lex_quoted(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        self.bump(); // opening "
        loop {
            match self.bump() {
                None => {
                    return Err(LexerError::UnterminatedDoubleQuote {
                        span: Span::new(start, start + 1),
                    })
                }
                Some('\\') => {
                    // Escaped char belongs to the string, whatever it is.
                    self.bump();
                }
                Some('"') => break,
                Some(_) => {}
            }
        }
        Ok(TokenKind::Quoted(self.input[start..self.pos].to_string()))
    }

    fn lex_opaque(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        self.bump(); // opening '
        loop {
            match self.bump() {
                None => {
                    return Err(LexerError::UnterminatedSingleQuote {
                        span: Span::new(start, start + 1),
                    })
                }
                Some('\'') => break,
                Some(_) => {}
            }
        }
        Ok(TokenKind::Opaque(self.input[start..self.pos].to_string()))
    }

    fn lex_plain(&mut self, start: usize) -> Result<TokenKind, LexerError> {
        while let Some(c) = self.peek() {
            if is_blank(c) || matches!(c, ';' | '\n' | '"' | '\'') {
                break;
            }
            if is_invalid(c) {
                return Err(LexerError::InvalidCharacter {
                    ch: c,
                    span: Span::new(self.pos, self.pos + c.len_utf8()),
                });
            }
            self.bump();
            if c == '\\' {
                self.bump();
            }
        }
        Ok(TokenKind::Plain(self.input[start..self.pos].to_string()))
    }
}

#[inline]
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Control characters other than the blanks and newline are rejected
/// outside quotes.
#[inline]
fn is_invalid(c: char) -> bool {
    c.is_control() && !is_blank(c) && c != '\n'
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
