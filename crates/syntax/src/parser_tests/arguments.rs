// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument classification.

use super::shape;
use crate::ast::ArgumentKind::{Opaque, Plain, Quoted};
use crate::parser::Parser;

#[test]
fn classifies_each_argument_kind() {
    let ast = Parser::parse(r#"echo plain "quoted arg" 'opaque arg'"#).unwrap();
    assert_eq!(
        shape(&ast),
        vec![vec![
            (Plain, "echo"),
            (Plain, "plain"),
            (Quoted, r#""quoted arg""#),
            (Opaque, "'opaque arg'"),
        ]]
    );
}

#[test]
fn command_name_may_be_quoted() {
    let ast = Parser::parse("'echo' hi").unwrap();
    let expr = &ast.expressions[0];
    assert_eq!(expr.name().map(|a| a.kind), Some(Opaque));
    assert_eq!(expr.args().len(), 1);
}

#[test]
fn separator_inside_quotes_is_text() {
    let ast = Parser::parse(r#"echo "a; b" 'c; d'"#).unwrap();
    assert_eq!(ast.count_expressions(), 1);
    assert_eq!(ast.expressions[0].arguments.len(), 3);
}

#[test]
fn quoted_argument_may_span_lines() {
    let ast = Parser::parse("echo \"a\nb\"; echo c").unwrap();
    assert_eq!(ast.count_expressions(), 2);
    assert_eq!(ast.expressions[0].arguments[1].unquoted(), "a\nb");
}

#[test]
fn empty_quotes_are_arguments() {
    let ast = Parser::parse(r#"echo "" ''"#).unwrap();
    assert_eq!(shape(&ast), vec![vec![(Plain, "echo"), (Quoted, r#""""#), (Opaque, "''")]]);
}

#[test]
fn references_are_left_for_evaluation() {
    let ast = Parser::parse(r#"echo ${x} "${y}""#).unwrap();
    assert_eq!(shape(&ast), vec![vec![(Plain, "echo"), (Plain, "${x}"), (Quoted, r#""${y}""#)]]);
}

#[test]
fn expression_args_exclude_name() {
    let ast = Parser::parse("alias ll 'ls -l'").unwrap();
    let expr = &ast.expressions[0];
    assert_eq!(expr.name().map(|a| a.unquoted()), Some("alias"));
    let args: Vec<&str> = expr.args().iter().map(|a| a.unquoted()).collect();
    assert_eq!(args, vec!["ll", "ls -l"]);
}
