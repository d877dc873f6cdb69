//! Reading lines from standard input.

use crate::prelude::*;

#[test]
fn runs_each_input_line() {
    gsh()
        .stdin("echo one\necho two\n")
        .passes()
        .stdout_eq("one\ntwo\n");
}

#[test]
fn continues_after_a_failing_line() {
    gsh()
        .stdin("nope\necho still here\n")
        .passes()
        .stdout_eq("still here\n")
        .stderr_has("command not found: nope");
}

#[test]
fn status_is_that_of_the_last_line() {
    gsh()
        .stdin("echo ok\nnope\n")
        .exits_with(1)
        .stdout_eq("ok\n");
}

#[test]
fn exit_ends_input_early() {
    gsh()
        .stdin("echo a\nexit 5\necho b\n")
        .exits_with(5)
        .stdout_eq("a\n");
}

#[test]
fn quoted_argument_may_span_lines() {
    gsh()
        .stdin("echo \"first\nsecond\"\n")
        .passes()
        .stdout_eq("first\nsecond\n");
}

#[test]
fn final_line_without_newline_still_runs() {
    gsh().stdin("echo tail").passes().stdout_eq("tail\n");
}

#[test]
fn history_lists_previous_lines() {
    gsh()
        .stdin("echo a\nhistory\n")
        .passes()
        .stdout_eq("a\n    1  echo a\n    2  history\n");
}
