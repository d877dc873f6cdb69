// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sorted index of runnable names, kept current by registry events.

use crate::alias::AliasRegistry;
use crate::event::Event;
use crate::event_manager::{EventListener, ListenerError};
use crate::registry::CommandRegistry;
use crate::shell::Shell;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
struct Sources {
    command: bool,
    alias: bool,
}

impl Sources {
    fn is_empty(self) -> bool {
        !self.command && !self.alias
    }
}

/// Every command and alias name, for prefix completion.
///
/// A name stays indexed while either a command or an alias carries it.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    names: Arc<RwLock<BTreeMap<String, Sources>>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index subscribed to `shell`'s events and seeded with its current names.
    pub fn attach(shell: &Shell) -> Self {
        let index = Self::new();
        shell.events().subscribe(Arc::new(index.clone()));
        index.seed(shell.aliases(), shell.commands());
        index
    }

    /// Add the names currently in `aliases` and `commands`.
    pub fn seed(&self, aliases: &AliasRegistry, commands: &CommandRegistry) {
        let mut names = self.names.write();
        for name in commands.names() {
            names.entry(name).or_default().command = true;
        }
        for name in aliases.list().into_keys() {
            names.entry(name).or_default().alias = true;
        }
    }

    /// Names starting with `prefix`, sorted.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.names
            .read()
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

impl EventListener for NameIndex {
    fn on_event(&self, event: &Event) -> Result<(), ListenerError> {
        let mut names = self.names.write();
        match event {
            Event::CommandRegistered { name } => {
                names.entry(name.clone()).or_default().command = true;
            }
            Event::AliasRegistered { name, .. } => {
                names.entry(name.clone()).or_default().alias = true;
            }
            Event::CommandRemoved { name } | Event::AliasRemoved { name } => {
                if let Some(sources) = names.get_mut(name) {
                    if event.is_command_event() {
                        sources.command = false;
                    } else {
                        sources.alias = false;
                    }
                    if sources.is_empty() {
                        names.remove(name);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "name_index_tests.rs"]
mod tests;
