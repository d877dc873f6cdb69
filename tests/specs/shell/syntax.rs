//! Line syntax: separators and diagnostics.

use crate::prelude::*;

#[test]
fn semicolons_separate_expressions() {
    line("echo a; echo b;echo c")
        .passes()
        .stdout_eq("a\nb\nc\n");
}

#[test]
fn empty_line_is_a_no_op() {
    line("  ").passes().stdout_eq("").stderr_eq("");
}

#[test]
fn unterminated_quote_is_a_syntax_error() {
    line(r#"echo "abc"#)
        .fails()
        .stdout_eq("")
        .stderr_has("unterminated double-quoted string")
        .stderr_has("line 1, column 6");
}

#[test]
fn syntax_error_runs_nothing() {
    line("echo first; echo 'oops")
        .fails()
        .stdout_eq("");
}

#[test]
fn alias_syntax_error_shows_expanded_line() {
    gsh()
        .args(&["-c", r#"alias broken 'echo "oops'"#, "-c", "broken"])
        .fails()
        .stderr_has("1 | echo \"oops")
        .stderr_has("line 1, column 6");
}
