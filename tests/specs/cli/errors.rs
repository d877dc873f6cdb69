//! Error reporting and exit codes for failing lines.

use crate::prelude::*;

#[test]
fn unknown_command_fails() {
    line("frobnicate now")
        .exits_with(1)
        .stderr_eq("gsh: command not found: frobnicate\n");
}

#[test]
fn first_failing_command_line_stops_the_run() {
    gsh()
        .args(&["-c", "nope", "-c", "echo skipped"])
        .fails()
        .stdout_eq("");
}

#[test]
fn failure_aborts_rest_of_line() {
    line("echo one; nope; echo two")
        .fails()
        .stdout_eq("one\n")
        .stderr_has("command not found: nope");
}

#[test]
fn builtin_usage_error_is_reported() {
    line("exit notanumber")
        .fails()
        .stderr_has("gsh: exit:");
}

#[test]
fn missing_config_file_is_fatal() {
    gsh()
        .args(&["--config", "/nonexistent/gsh.toml", "-c", "echo hi"])
        .fails()
        .stdout_eq("")
        .stderr_has("Error:");
}
