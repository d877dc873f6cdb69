// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! gsh - an extensible command shell

mod env;
mod logging;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use gsh_core::{Io, Shell, ShellConfig};
use repl::Repl;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gsh", version, about = "gsh - an extensible command shell")]
struct Cli {
    /// Configuration file (default: $GSH_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run LINE and exit; repeat to run several lines in order
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,
}

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, the
/// "Caused by" chain is skipped.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::setup_logging()?;

    let config = load_config(cli.config.or_else(env::config_path))?;
    let shell = Shell::builder()
        .config(config)
        .io(Io::stdio())
        .build()
        .context("invalid configuration")?;
    gsh_builtins::register_builtins(shell.commands())?;

    let mut repl = Repl::new(shell);
    if !cli.commands.is_empty() {
        return Ok(repl.run_lines(&cli.commands));
    }
    Ok(repl.run_input()?)
}

/// Config path precedence: --config > GSH_CONFIG > defaults.
fn load_config(path: Option<PathBuf>) -> Result<ShellConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            Ok(ShellConfig::load(&path)?)
        }
        None => Ok(ShellConfig::default()),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
