// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell configuration loaded from TOML.

use crate::eval::UnsetVariablePolicy;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_MAX_ALIAS_DEPTH: usize = 16;
pub const DEFAULT_HISTORY_CAPACITY: usize = 500;

/// Errors from loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Session settings plus aliases and variables to define at startup.
///
/// ```toml
/// unset_variables = "empty"
/// max_alias_depth = 8
/// history_capacity = 100
///
/// [aliases]
/// ll = "ls -l"
///
/// [variables]
/// greeting = "hello"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub unset_variables: UnsetVariablePolicy,
    /// Nested alias expansions allowed before failing with an alias cycle.
    pub max_alias_depth: usize,
    /// Lines kept in history; 0 keeps everything.
    pub history_capacity: usize,
    pub aliases: IndexMap<String, String>,
    pub variables: IndexMap<String, Value>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            unset_variables: UnsetVariablePolicy::default(),
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            aliases: IndexMap::new(),
            variables: IndexMap::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading config");
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
