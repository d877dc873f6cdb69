// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;

/// Config file named by GSH_CONFIG, if set and non-empty.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("GSH_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// Log filter directives from GSH_LOG (e.g. `debug`, `gsh_core=trace`).
pub fn log_filter() -> Option<String> {
    std::env::var("GSH_LOG").ok().filter(|s| !s.is_empty())
}
