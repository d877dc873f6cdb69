// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::command::{Command, CommandContext};
use crate::error::ShellError;
use crate::event::Event;
use crate::event_manager::{EventListener, ListenerError};
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ── Listeners ───────────────────────────────────────────────────────────────

/// Listener that records every event it accepts.
#[derive(Default)]
pub struct RecordingListener {
    events: Mutex<Vec<Event>>,
    commands_only: bool,
}

impl RecordingListener {
    /// Records only command registry events.
    pub fn commands_only() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            commands_only: true,
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(Event::name).collect()
    }
}

impl EventListener for RecordingListener {
    fn accepts(&self, event: &Event) -> bool {
        !self.commands_only || event.is_command_event()
    }

    fn on_event(&self, event: &Event) -> Result<(), ListenerError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}

/// Listener that always fails.
pub struct FailingListener;

impl EventListener for FailingListener {
    fn on_event(&self, event: &Event) -> Result<(), ListenerError> {
        Err(ListenerError::new(format!("cannot handle {}", event.name())))
    }
}

// ── Commands ────────────────────────────────────────────────────────────────

/// Command that accumulates its arguments in per-instance state.
///
/// Each run returns (and prints) everything the instance has seen so far, so
/// state leaking between invocations shows up in the result. The invocation
/// log and copy counter are shared by the prototype and all of its copies.
pub struct StubCommand {
    name: String,
    seen: Vec<String>,
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    copies: Arc<AtomicUsize>,
}

impl StubCommand {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            seen: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            copies: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle on the invocation log, valid after the stub is registered.
    pub fn calls(&self) -> Arc<Mutex<Vec<Vec<String>>>> {
        Arc::clone(&self.calls)
    }

    pub fn copies(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.copies)
    }
}

impl Command for StubCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "test stub"
    }

    fn copy(&self) -> Box<dyn Command> {
        self.copies.fetch_add(1, Ordering::SeqCst);
        Box::new(StubCommand {
            name: self.name.clone(),
            seen: Vec::new(),
            calls: Arc::clone(&self.calls),
            copies: Arc::clone(&self.copies),
        })
    }

    fn execute(&mut self, ctx: &mut CommandContext<'_>) -> Result<Value, ShellError> {
        self.calls.lock().push(ctx.args.clone());
        self.seen.extend(ctx.args.iter().cloned());
        let text = self.seen.join(" ");
        writeln!(ctx.out(), "{text}")?;
        Ok(Value::String(text))
    }
}
