// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsh-core: command resolution and execution for the gsh shell
//!
//! A line flows through:
//!
//! ```text
//! Shell::execute ─► Parser ─► ExecutingVisitor ─► Evaluator (per argument)
//!                                   │
//!                                   ▼
//!                           CommandExecutor ─► CommandResolver
//!                                                ├─ AliasRegistry   (re-enters Shell::execute)
//!                                                └─ CommandRegistry (copy of prototype)
//! ```

pub mod alias;
pub mod command;
pub mod config;
pub mod error;
pub mod eval;
pub mod event;
pub mod event_manager;
pub mod exec;
pub mod executor;
pub mod history;
pub mod io;
pub mod name_index;
pub mod registry;
pub mod resolver;
pub mod shell;
pub mod variables;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use alias::AliasRegistry;
pub use command::{Command, CommandContext, FnCommand};
pub use config::{ConfigError, ShellConfig};
pub use error::ShellError;
pub use eval::{Evaluator, UnsetVariablePolicy};
pub use event::Event;
pub use event_manager::{EventListener, EventManager, ListenerError};
pub use exec::ExecutingVisitor;
pub use executor::{CommandExecutor, DefaultCommandExecutor};
pub use history::{History, HistoryEntry};
pub use io::{Captured, Io, SharedBuffer};
pub use name_index::NameIndex;
pub use registry::{CommandRegistrar, CommandRegistry};
pub use resolver::{AliasCommand, CommandResolver};
pub use serde_json::Value;
pub use shell::{Shell, ShellBuilder};
pub use variables::{value_to_string, Variables};
