// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command registry and the registrar capability handed to command providers.

use crate::command::Command;
use crate::error::{require_name, ShellError};
use crate::event::Event;
use crate::event_manager::EventManager;
use indexmap::IndexMap;
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::Arc;

/// Capability for adding and removing commands.
///
/// Command providers (builtin sets, plugins) receive this rather than the
/// registry itself.
pub trait CommandRegistrar {
    fn register(&self, prototype: Box<dyn Command>) -> Result<(), ShellError>;

    fn unregister(&self, name: &str) -> Result<(), ShellError>;
}

/// Name → command prototype.
///
/// Names are unique: registering a taken name fails with
/// [`ShellError::DuplicateCommand`]. Cloning yields another handle on the same
/// registry.
///
/// Mutations are serialized by a separate lock held through publishing, so
/// listeners see events in mutation order and may still read the registry.
/// The lock is reentrant so a listener may mutate the registry it observes.
#[derive(Clone)]
pub struct CommandRegistry {
    commands: Arc<RwLock<IndexMap<String, Arc<dyn Command>>>>,
    mutation: Arc<ReentrantMutex<()>>,
    events: EventManager,
}

impl CommandRegistry {
    pub fn new(events: EventManager) -> Self {
        Self {
            commands: Arc::new(RwLock::new(IndexMap::new())),
            mutation: Arc::new(ReentrantMutex::new(())),
            events,
        }
    }

    /// Register `prototype` under its own name.
    pub fn register(&self, prototype: Box<dyn Command>) -> Result<(), ShellError> {
        let name = prototype.name().to_string();
        require_name("command", &name)?;
        let _mutating = self.mutation.lock();
        {
            let mut commands = self.commands.write();
            if commands.contains_key(&name) {
                return Err(ShellError::DuplicateCommand { name });
            }
            commands.insert(name.clone(), Arc::from(prototype));
        }
        tracing::debug!(command = %name, "command registered");
        self.events.publish(&Event::CommandRegistered { name });
        Ok(())
    }

    /// Remove `name`, returning its prototype.
    pub fn remove(&self, name: &str) -> Result<Arc<dyn Command>, ShellError> {
        require_name("command", name)?;
        let _mutating = self.mutation.lock();
        let removed = self.commands.write().shift_remove(name);
        let prototype = removed.ok_or_else(|| ShellError::CommandNotFound {
            name: name.to_string(),
        })?;
        tracing::debug!(command = name, "command removed");
        self.events.publish(&Event::CommandRemoved {
            name: name.to_string(),
        });
        Ok(prototype)
    }

    /// The shared prototype for `name`. Callers run a [`Command::copy`] of it.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Command>, ShellError> {
        require_name("command", name)?;
        self.commands
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::CommandNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.read().contains_key(name)
    }

    /// Snapshot of registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.commands.read().keys().cloned().collect()
    }

    /// Snapshot of `(name, description)` pairs in registration order.
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.commands
            .read()
            .iter()
            .map(|(name, cmd)| (name.clone(), cmd.description().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.read().is_empty()
    }
}

impl CommandRegistrar for CommandRegistry {
    fn register(&self, prototype: Box<dyn Command>) -> Result<(), ShellError> {
        CommandRegistry::register(self, prototype)
    }

    fn unregister(&self, name: &str) -> Result<(), ShellError> {
        self.remove(name).map(|_| ())
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
