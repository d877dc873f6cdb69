// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors and recovery.

use crate::error::LexerError;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::Span;

#[yare::parameterized(
    double   = { "echo \"abc" },
    single   = { "echo 'abc" },
    escaped  = { r#"echo "abc\""# },
    control  = { "echo a\u{7}b" },
)]
fn malformed_input_fails(input: &str) {
    assert!(Parser::parse(input).is_err());
}

#[test]
fn unterminated_quote_reports_position() {
    let err = Parser::parse("echo 'abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::Lexer(LexerError::UnterminatedSingleQuote { span: Span::new(5, 6) })
    );
    assert_eq!(err.span(), Span::new(5, 6));
}

#[test]
fn diagnostic_renders_caret_under_quote() {
    let input = "echo ok\necho \"open";
    let err = Parser::parse(input).unwrap_err();
    let diag = err.diagnostic(input);
    assert!(diag.contains("line 2, column 6"), "{diag}");
    assert!(diag.contains("echo \"open"), "{diag}");
}

#[test]
fn invalid_character_names_the_char() {
    let err = Parser::parse("echo \u{1b}").unwrap_err();
    assert!(err.to_string().contains("invalid character"), "{err}");
    assert_eq!(err.span(), Span::new(5, 6));
}

#[test]
fn control_characters_inside_quotes_are_allowed() {
    assert!(Parser::parse("echo '\u{7}'").is_ok());
}

#[test]
fn recovery_keeps_other_lines() {
    let result = Parser::parse_with_recovery("echo ok\necho 'broken\necho fine");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.line.command_names(), vec!["echo", "echo"]);
    let last = &result.line.expressions[1];
    assert_eq!(last.arguments[1].unquoted(), "fine");
}

#[test]
fn recovery_drops_partial_expression() {
    let result = Parser::parse_with_recovery("echo a \u{1}\necho b");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.line.count_expressions(), 1);
    assert_eq!(result.line.expressions[0].arguments[1].unquoted(), "b");
}

#[test]
fn recovery_without_errors_matches_parse() {
    let input = "echo a; echo 'b'";
    let result = Parser::parse_with_recovery(input);
    assert!(result.errors.is_empty());
    assert_eq!(result.line, Parser::parse(input).unwrap());
}
