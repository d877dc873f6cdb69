// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_helpers::shell;
use gsh_core::Value;

#[yare::parameterized(
    words       = { "echo a b c",        "a b c\n" },
    no_args     = { "echo",              "\n" },
    no_newline  = { "echo -n a b",       "a b" },
    quoted      = { r#"echo "a  b""#,    "a  b\n" },
    hyphen_word = { "echo a -x",         "a -x\n" },
)]
fn prints(line: &str, expected: &str) {
    let (mut shell, captured) = shell();
    shell.execute(line).unwrap();
    assert_eq!(captured.out.contents(), expected);
}

#[test]
fn returns_joined_text() {
    let (mut shell, _) = shell();
    assert_eq!(shell.execute("echo -n x y").unwrap(), Value::String("x y".into()));
}

#[test]
fn options_do_not_leak_between_runs() {
    let (mut shell, captured) = shell();
    shell.execute("echo -n a").unwrap();
    shell.execute("echo b").unwrap();
    assert_eq!(captured.out.contents(), "ab\n");
}
