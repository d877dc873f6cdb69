// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only traversal of the command-line AST.

use super::{Argument, ArgumentKind, CommandLine, Expression};

/// Visitor trait for traversing the AST.
///
/// Each `visit_*` method defaults to its `walk_*` counterpart, which descends
/// into children in source order. Override a `visit_*` method to act at that
/// node; call the matching `walk_*` to keep descending, or skip it to prune.
///
/// Argument kinds are dispatched with a `match` in [`walk_argument`]
/// rather than one method per kind on the node types.
///
/// ```ignore
/// use gsh_syntax::{AstVisitor, Argument, Parser};
///
/// struct Opaques(usize);
///
/// impl AstVisitor for Opaques {
///     fn visit_opaque(&mut self, _arg: &Argument) {
///         self.0 += 1;
///     }
/// }
///
/// let ast = Parser::parse("echo 'a' b 'c'")?;
/// let mut count = Opaques(0);
/// count.visit_command_line(&ast);
/// assert_eq!(count.0, 2);
/// # Ok::<(), gsh_syntax::ParseError>(())
/// ```
///
/// [`walk_argument`]: AstVisitor::walk_argument
pub trait AstVisitor {
    fn visit_command_line(&mut self, line: &CommandLine) {
        self.walk_command_line(line);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.walk_expression(expr);
    }

    fn visit_argument(&mut self, arg: &Argument) {
        self.walk_argument(arg);
    }

    fn visit_plain(&mut self, _arg: &Argument) {}

    fn visit_quoted(&mut self, _arg: &Argument) {}

    fn visit_opaque(&mut self, _arg: &Argument) {}

    fn walk_command_line(&mut self, line: &CommandLine) {
        for expr in &line.expressions {
            self.visit_expression(expr);
        }
    }

    fn walk_expression(&mut self, expr: &Expression) {
        for arg in &expr.arguments {
            self.visit_argument(arg);
        }
    }

    fn walk_argument(&mut self, arg: &Argument) {
        match arg.kind {
            ArgumentKind::Plain => self.visit_plain(arg),
            ArgumentKind::Quoted => self.visit_quoted(arg),
            ArgumentKind::Opaque => self.visit_opaque(arg),
        }
    }
}
