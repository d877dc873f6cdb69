// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Option parsing shared by the builtins.

use clap::error::ErrorKind;
use gsh_core::{CommandContext, ShellError};

/// Parse the invocation's arguments as `T`.
///
/// `--help` prints usage to the command's output and yields `None`. Any other
/// clap error becomes an ordinary command failure carrying clap's message.
pub(crate) fn parse<T: clap::Parser>(ctx: &mut CommandContext<'_>) -> Result<Option<T>, ShellError> {
    let argv = std::iter::once(ctx.name.to_string()).chain(ctx.args.iter().cloned());
    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(ctx.out(), "{}", e.render())?;
            Ok(None)
        }
        Err(e) => Err(ctx.fail(first_line(&e.to_string()))),
    }
}

/// First line of a clap error without its `error: ` prefix.
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
