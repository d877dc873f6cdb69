// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::error::ErrorKind;
use std::io::Write;

#[test]
fn repeated_command_flags_keep_order() {
    let cli = Cli::try_parse_from(["gsh", "-c", "echo a", "--command", "echo b"]).unwrap();
    assert_eq!(cli.commands, vec!["echo a", "echo b"]);
    assert!(cli.config.is_none());
}

#[test]
fn config_flag_takes_path() {
    let cli = Cli::try_parse_from(["gsh", "--config", "/tmp/gsh.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/gsh.toml")));
}

#[test]
fn version_flag() {
    let err = Cli::try_parse_from(["gsh", "--version"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn no_config_gives_defaults() {
    assert_eq!(load_config(None).unwrap(), ShellConfig::default());
}

#[test]
fn config_file_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_alias_depth = 3").unwrap();
    let config = load_config(Some(file.path().to_path_buf())).unwrap();
    assert_eq!(config.max_alias_depth, 3);
}

#[test]
fn missing_config_is_an_error() {
    let err = load_config(Some(PathBuf::from("/nonexistent/gsh.toml"))).unwrap_err();
    assert!(format_error(&err).contains("/nonexistent/gsh.toml"));
}

#[test]
fn format_error_skips_redundant_chain() {
    let err = anyhow::Error::from(std::io::Error::other("disk gone")).context("disk gone badly");
    assert_eq!(format_error(&err), "disk gone badly");
}

#[test]
fn format_error_renders_new_causes() {
    let err = anyhow::Error::from(std::io::Error::other("root cause")).context("loading");
    assert_eq!(format_error(&err), "loading\n\nCaused by:\n    0: root cause");
}
