//! Variable assignment and expansion.

use crate::prelude::*;

#[test]
fn set_then_expand_in_plain_argument() {
    line("set x 42; echo value=${x}")
        .passes()
        .stdout_eq("value=42\n");
}

#[test]
fn quoted_argument_expands_and_keeps_spaces() {
    line(r#"set x "a  b"; echo "[${x}]""#)
        .passes()
        .stdout_eq("[a  b]\n");
}

#[test]
fn opaque_argument_is_never_expanded() {
    line("set x 1; echo '${x}'")
        .passes()
        .stdout_eq("${x}\n");
}

#[test]
fn unset_variable_fails_by_default() {
    line("echo ${missing}")
        .fails()
        .stdout_eq("")
        .stderr_eq("gsh: unknown variable: missing\n");
}

#[test]
fn unset_removes_variable() {
    gsh()
        .args(&["-c", "set x 1", "-c", "unset x", "-c", "echo ${x}"])
        .fails()
        .stderr_has("unknown variable: x");
}

#[test]
fn set_without_arguments_lists_variables() {
    line("set b 2; set a 1; set")
        .passes()
        .stdout_eq("b=2\na=1\n");
}
