// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Lexer and parser for gsh command lines.
//!
//! # Quick Start
//!
//! ```ignore
//! use gsh_syntax::Parser;
//!
//! let ast = Parser::parse("alias hi 'echo hello'; hi there")?;
//! assert_eq!(ast.command_names(), vec!["alias", "hi"]);
//! # Ok::<(), gsh_syntax::ParseError>(())
//! ```
//!
//! # Syntax
//!
//! - **Plain** arguments: bare words, `\` escapes the next character
//! - **Quoted** arguments: `"..."`, may contain `${name}` references
//! - **Opaque** arguments: `'...'`, taken literally
//! - **Separators**: `;` and newline end an expression
//! - **Comments**: `#` at the start of a word runs to end of line
//!
//! # AST Structure
//!
//! ```text
//! CommandLine
//! └── Expression[]
//!     └── Argument[] (kind, raw text, span)
//! ```
//!
//! The parser never evaluates anything: `${name}` references and escapes stay
//! in the raw argument text, and [`Argument::segments`] splits them out when
//! the line is run.

mod ast;
mod error;
mod lexer;
mod parse_error;
mod parser;
pub mod span;
mod token;

pub use ast::{Argument, ArgumentKind, AstVisitor, CommandLine, Expression, Segment};
pub use error::LexerError;
pub use lexer::Lexer;
pub use parse_error::{ParseError, ParseResult};
pub use parser::Parser;
pub use span::{diagnostic_context, locate_span, Span};
pub use token::{is_valid_variable_name, Token, TokenKind};
