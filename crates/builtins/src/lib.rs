// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsh-builtins: shell-management commands for gsh
//!
//! Every builtin parses its options with clap into per-instance state, which
//! is why each invocation runs on a fresh copy of the registered prototype.

mod alias;
mod args;
mod echo;
mod exit;
mod help;
mod history;
mod vars;

pub use alias::{AliasBuiltin, UnaliasBuiltin};
pub use echo::EchoBuiltin;
pub use exit::ExitBuiltin;
pub use help::HelpBuiltin;
pub use history::HistoryBuiltin;
pub use vars::{SetBuiltin, UnsetBuiltin};

use gsh_core::{Command, CommandRegistrar, ShellError};

/// Names of all builtins, in registration order.
pub const BUILTIN_NAMES: &[&str] = &[
    "echo", "alias", "unalias", "set", "unset", "exit", "help", "history",
];

fn prototypes() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(EchoBuiltin::default()),
        Box::new(AliasBuiltin::default()),
        Box::new(UnaliasBuiltin::default()),
        Box::new(SetBuiltin::default()),
        Box::new(UnsetBuiltin::default()),
        Box::new(ExitBuiltin::default()),
        Box::new(HelpBuiltin::default()),
        Box::new(HistoryBuiltin::default()),
    ]
}

/// Register every builtin. Stops at the first name already taken.
pub fn register_builtins(registrar: &dyn CommandRegistrar) -> Result<(), ShellError> {
    for prototype in prototypes() {
        registrar.register(prototype)?;
    }
    tracing::debug!(count = BUILTIN_NAMES.len(), "builtins registered");
    Ok(())
}

/// Remove every builtin, as when the set is unloaded.
pub fn unregister_builtins(registrar: &dyn CommandRegistrar) -> Result<(), ShellError> {
    for name in BUILTIN_NAMES {
        registrar.unregister(name)?;
    }
    Ok(())
}


#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
