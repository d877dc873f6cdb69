// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry mutation events

use serde::{Deserialize, Serialize};

/// Events published when a registry changes.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // -- command --
    #[serde(rename = "command:registered")]
    CommandRegistered { name: String },

    #[serde(rename = "command:removed")]
    CommandRemoved { name: String },

    // -- alias --
    /// Also published when an existing alias is overwritten
    #[serde(rename = "alias:registered")]
    AliasRegistered { name: String, target: String },

    #[serde(rename = "alias:removed")]
    AliasRemoved { name: String },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::CommandRegistered { .. } => "command:registered",
            Event::CommandRemoved { .. } => "command:removed",
            Event::AliasRegistered { .. } => "alias:registered",
            Event::AliasRemoved { .. } => "alias:removed",
        }
    }

    /// Name of the command or alias the event is about.
    pub fn subject(&self) -> &str {
        match self {
            Event::CommandRegistered { name }
            | Event::CommandRemoved { name }
            | Event::AliasRegistered { name, .. }
            | Event::AliasRemoved { name } => name,
        }
    }

    pub fn is_command_event(&self) -> bool {
        matches!(
            self,
            Event::CommandRegistered { .. } | Event::CommandRemoved { .. }
        )
    }

    pub fn is_alias_event(&self) -> bool {
        !self.is_command_event()
    }

    /// One-line summary for log output
    pub fn log_summary(&self) -> String {
        let t = self.name();
        match self {
            Event::AliasRegistered { name, target } => format!("{t} name={name} target={target:?}"),
            _ => format!("{t} name={}", self.subject()),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
