// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous in-process event delivery.

use crate::event::Event;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by a listener. Logged by the manager, never propagated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Receiver of registry events.
pub trait EventListener: Send + Sync {
    /// Whether this listener wants `event`. Defaults to every event.
    fn accepts(&self, _event: &Event) -> bool {
        true
    }

    fn on_event(&self, event: &Event) -> Result<(), ListenerError>;
}

/// Fan-out of events to subscribed listeners.
///
/// Delivery is synchronous and on the publishing thread, in subscription
/// order. The listener list is snapshotted before delivery, so a listener may
/// subscribe or unsubscribe while being called; the change applies to the next
/// publish.
#[derive(Clone, Default)]
pub struct EventManager {
    listeners: Arc<RwLock<Vec<Arc<dyn EventListener>>>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Arc<dyn EventListener>) {
        self.listeners.write().push(listener);
    }

    /// Remove `listener` by identity. Unknown listeners are ignored.
    ///
    /// Returns whether a subscription was removed.
    pub fn unsubscribe(&self, listener: &Arc<dyn EventListener>) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every accepting listener.
    ///
    /// Returns the number of listeners that handled it without error.
    pub fn publish(&self, event: &Event) -> usize {
        let listeners = self.listeners.read().clone();
        tracing::debug!(event = %event.log_summary(), listeners = listeners.len(), "publishing");

        let mut delivered = 0;
        for listener in listeners.iter().filter(|l| l.accepts(event)) {
            match listener.on_event(event) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!(event = event.name(), error = %e, "event listener failed");
                }
            }
        }
        delivered
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.read().len()
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "event_manager_tests.rs"]
mod tests;
