// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Utility methods for querying the AST.

use super::{Argument, AstVisitor, CommandLine, Expression};
use crate::parse_error::ParseError;

impl CommandLine {
    /// Parse input into a command line.
    ///
    /// Convenience wrapper around [`Parser::parse`](crate::Parser::parse).
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parser::Parser::parse(input)
    }

    /// Number of expressions (command invocations) on the line.
    pub fn count_expressions(&self) -> usize {
        struct Counter(usize);
        impl AstVisitor for Counter {
            fn visit_expression(&mut self, _expr: &Expression) {
                self.0 += 1;
            }
        }
        let mut counter = Counter(0);
        counter.visit_command_line(self);
        counter.0
    }

    /// Variable names referenced anywhere on the line.
    ///
    /// De-duplicated, in order of first appearance. Opaque arguments are
    /// skipped since they are never expanded.
    ///
    /// ```ignore
    /// use gsh_syntax::Parser;
    ///
    /// let ast = Parser::parse("echo ${a} \"${b}\" '${c}'; echo ${a}")?;
    /// assert_eq!(ast.collect_variables(), vec!["a", "b"]);
    /// # Ok::<(), gsh_syntax::ParseError>(())
    /// ```
    pub fn collect_variables(&self) -> Vec<String> {
        struct Collector(Vec<String>);
        impl Collector {
            fn record(&mut self, arg: &Argument) {
                for name in arg.variable_references() {
                    if !self.0.iter().any(|n| n == name) {
                        self.0.push(name.to_string());
                    }
                }
            }
        }
        impl AstVisitor for Collector {
            fn visit_plain(&mut self, arg: &Argument) {
                self.record(arg);
            }
            fn visit_quoted(&mut self, arg: &Argument) {
                self.record(arg);
            }
        }
        let mut collector = Collector(Vec::new());
        collector.visit_command_line(self);
        collector.0
    }

    /// Raw text of each expression's command name, in source order.
    pub fn command_names(&self) -> Vec<&str> {
        self.expressions
            .iter()
            .filter_map(|expr| expr.name().map(Argument::unquoted))
            .collect()
    }
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
