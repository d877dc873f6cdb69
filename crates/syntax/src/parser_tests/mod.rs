// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod arguments;
mod errors;
mod separators;

use crate::ast::{ArgumentKind, CommandLine};

/// `(kind, raw text)` for every argument of every expression.
pub(super) fn shape(ast: &CommandLine) -> Vec<Vec<(ArgumentKind, &str)>> {
    ast.expressions
        .iter()
        .map(|e| {
            e.arguments
                .iter()
                .map(|a| (a.kind, a.text.as_str()))
                .collect()
        })
        .collect()
}
