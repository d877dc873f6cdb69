//! Command-line entry points: `-c` lines, exit codes, help.

use crate::prelude::*;

#[test]
fn command_line_runs_and_prints() {
    line("echo hello world").passes().stdout_eq("hello world\n");
}

#[test]
fn repeated_command_lines_share_state() {
    gsh()
        .args(&["-c", "set greeting hi", "-c", "echo ${greeting} there"])
        .passes()
        .stdout_eq("hi there\n");
}

#[test]
fn exit_sets_process_status() {
    line("exit 3").exits_with(3).stdout_eq("");
}

#[test]
fn exit_stops_remaining_expressions() {
    line("echo before; exit 2; echo after")
        .exits_with(2)
        .stdout_eq("before\n");
}

#[test]
fn exit_without_code_succeeds() {
    gsh()
        .args(&["-c", "exit", "-c", "echo unreachable"])
        .passes()
        .stdout_eq("");
}

#[test]
fn help_flag_describes_binary() {
    gsh()
        .args(&["--help"])
        .passes()
        .stdout_has("extensible command shell")
        .stdout_has("--config");
}

#[test]
fn help_builtin_lists_commands() {
    line("help")
        .passes()
        .stdout_has("Commands:")
        .stdout_has("echo")
        .stdout_has("unalias");
}
