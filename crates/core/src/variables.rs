// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell variables.

use crate::error::{require_name, ShellError};
use gsh_syntax::is_valid_variable_name;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named values visible to `${name}` references.
///
/// A scope may have a parent: lookups fall back to it on a miss, while `set`
/// and `unset` only touch the local scope.
///
/// ```ignore
/// use gsh_core::Variables;
///
/// let mut globals = Variables::new();
/// globals.set("user", "ada")?;
///
/// let mut local = globals.child();
/// local.set("user", "grace")?;
/// assert_eq!(local.get_string("user").as_deref(), Some("grace"));
/// assert_eq!(globals.get_string("user").as_deref(), Some("ada"));
/// # Ok::<(), gsh_core::ShellError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variables {
    vars: IndexMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<Box<Variables>>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// New empty scope whose lookups fall back to a snapshot of `self`.
    pub fn child(&self) -> Self {
        Self {
            vars: IndexMap::new(),
            parent: Some(Box::new(self.clone())),
        }
    }

    pub fn parent(&self) -> Option<&Variables> {
        self.parent.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        match self.vars.get(name) {
            Some(value) => Some(value),
            None => self.parent.as_ref().and_then(|p| p.get(name)),
        }
    }

    /// The value in the string form used for substitution.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get(name).map(value_to_string)
    }

    /// Set a variable in the local scope, returning the previous local value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>, ShellError> {
        require_name("variable", name)?;
        if !is_valid_variable_name(name) {
            return Err(ShellError::Precondition(format!("invalid variable name: {name}")));
        }
        Ok(self.vars.insert(name.to_string(), value.into()))
    }

    /// Remove a variable from the local scope.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        self.vars.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every visible name: local names in insertion order, then inherited
    /// names not shadowed locally.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.vars.keys().cloned().collect();
        if let Some(parent) = &self.parent {
            for name in parent.names() {
                if !self.vars.contains_key(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Visible `(name, value)` pairs in [`names`](Self::names) order.
    pub fn snapshot(&self) -> IndexMap<String, Value> {
        self.names()
            .into_iter()
            .filter_map(|name| self.get(&name).cloned().map(|v| (name, v)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
            && match &self.parent {
                Some(parent) => parent.is_empty(),
                None => true,
            }
    }
}

/// String form of a value: strings verbatim, `null` as empty, anything else
/// as its JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "variables_tests.rs"]
mod tests;
