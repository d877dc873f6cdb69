// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::test_helpers::shell;
use gsh_core::Value;

#[test]
fn prints_numbered_lines_including_itself() {
    let (mut shell, captured) = shell();
    shell.execute("set x 1").unwrap();
    shell.execute("history").unwrap();
    assert_eq!(captured.out.contents(), "    1  set x 1\n    2  history\n");
}

#[test]
fn last_limits_output() {
    let (mut shell, captured) = shell();
    for line in ["set a 1", "set b 2", "set c 3"] {
        shell.execute(line).unwrap();
    }
    assert_eq!(shell.execute("history -n 2").unwrap(), Value::from(2));
    assert_eq!(captured.out.contents(), "    3  set c 3\n    4  history -n 2\n");
}

#[test]
fn clear_forgets_entries() {
    let (mut shell, _) = shell();
    shell.execute("set a 1").unwrap();
    shell.execute("history -c").unwrap();
    assert!(shell.history().is_empty());
}

#[test]
fn alias_expansion_is_not_recorded() {
    let (mut shell, captured) = shell();
    shell.execute("alias h history").unwrap();
    captured.out.take();
    shell.execute("h").unwrap();
    assert_eq!(captured.out.contents(), "    1  alias h history\n    2  h\n");
}
