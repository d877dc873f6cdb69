// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alias registry.

use crate::error::{require_name, ShellError};
use crate::event::Event;
use crate::event_manager::EventManager;
use indexmap::IndexMap;
use parking_lot::{ReentrantMutex, RwLock};
use std::sync::Arc;

/// Name → command-line template.
///
/// Registering an existing name overwrites it. Cloning yields another handle
/// on the same registry. Mutations are serialized by a separate lock held
/// through publishing, so events arrive in mutation order and listeners may
/// still read the registry.
#[derive(Clone, Debug)]
pub struct AliasRegistry {
    aliases: Arc<RwLock<IndexMap<String, String>>>,
    mutation: Arc<ReentrantMutex<()>>,
    events: EventManager,
}

impl AliasRegistry {
    pub fn new(events: EventManager) -> Self {
        Self {
            aliases: Arc::new(RwLock::new(IndexMap::new())),
            mutation: Arc::new(ReentrantMutex::new(())),
            events,
        }
    }

    /// Define or overwrite `name`. Returns the target it replaced, if any.
    pub fn register(&self, name: &str, target: &str) -> Result<Option<String>, ShellError> {
        require_name("alias", name)?;
        let _mutating = self.mutation.lock();
        let previous = self
            .aliases
            .write()
            .insert(name.to_string(), target.to_string());
        tracing::debug!(alias = name, target, replaced = previous.is_some(), "alias registered");
        self.events.publish(&Event::AliasRegistered {
            name: name.to_string(),
            target: target.to_string(),
        });
        Ok(previous)
    }

    /// Remove `name`, returning its target.
    pub fn remove(&self, name: &str) -> Result<String, ShellError> {
        require_name("alias", name)?;
        let _mutating = self.mutation.lock();
        let removed = self.aliases.write().shift_remove(name);
        let target = removed.ok_or_else(|| ShellError::AliasNotFound {
            name: name.to_string(),
        })?;
        tracing::debug!(alias = name, "alias removed");
        self.events.publish(&Event::AliasRemoved {
            name: name.to_string(),
        });
        Ok(target)
    }

    pub fn get(&self, name: &str) -> Result<String, ShellError> {
        require_name("alias", name)?;
        self.aliases
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::AliasNotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.aliases.read().contains_key(name)
    }

    /// Snapshot of all aliases in definition order.
    pub fn list(&self) -> IndexMap<String, String> {
        self.aliases.read().clone()
    }

    pub fn len(&self) -> usize {
        self.aliases.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.read().is_empty()
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
