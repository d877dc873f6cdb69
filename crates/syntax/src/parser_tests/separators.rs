// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Expression boundaries: `;`, newlines, blank and comment-only input.

use super::shape;
use crate::ast::ArgumentKind::Plain;
use crate::parser::Parser;
use crate::Span;

#[yare::parameterized(
    empty        = { "" },
    spaces       = { "   " },
    comment      = { "# a comment" },
    semis        = { ";;;" },
    newlines     = { "\n\n" },
    mixed        = { " ; \n # trailing" },
)]
fn blank_lines_have_no_expressions(input: &str) {
    let ast = Parser::parse(input).unwrap();
    assert!(ast.is_empty());
    assert_eq!(ast.count_expressions(), 0);
}

#[test]
fn semicolon_separates_expressions() {
    let ast = Parser::parse("echo a; echo b").unwrap();
    assert_eq!(
        shape(&ast),
        vec![vec![(Plain, "echo"), (Plain, "a")], vec![(Plain, "echo"), (Plain, "b")]]
    );
}

#[test]
fn newline_separates_expressions() {
    let ast = Parser::parse("set x 1\necho ${x}\n").unwrap();
    assert_eq!(ast.count_expressions(), 2);
    assert_eq!(ast.command_names(), vec!["set", "echo"]);
}

#[test]
fn repeated_separators_do_not_create_empty_expressions() {
    let ast = Parser::parse(";echo a;; ;echo b;").unwrap();
    assert_eq!(ast.count_expressions(), 2);
}

#[test]
fn semicolon_needs_no_surrounding_space() {
    let ast = Parser::parse("a;b").unwrap();
    assert_eq!(shape(&ast), vec![vec![(Plain, "a")], vec![(Plain, "b")]]);
}

#[test]
fn expression_span_covers_its_arguments() {
    let ast = Parser::parse("  echo one  ;  two").unwrap();
    assert_eq!(ast.expressions[0].span, Span::new(2, 10));
    assert_eq!(ast.expressions[1].span, Span::new(15, 18));
    assert_eq!(ast.span, Span::new(2, 18));
}

#[test]
fn comment_ends_expression_at_newline() {
    let ast = Parser::parse("echo a # ignored ; echo b\necho c").unwrap();
    assert_eq!(
        shape(&ast),
        vec![vec![(Plain, "echo"), (Plain, "a")], vec![(Plain, "echo"), (Plain, "c")]]
    );
}
