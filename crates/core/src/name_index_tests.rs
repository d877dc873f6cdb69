// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::StubCommand;

fn shell_with(commands: &[&str], aliases: &[(&str, &str)]) -> Shell {
    let shell = Shell::new();
    for name in commands {
        shell.commands().register(Box::new(StubCommand::new(name))).unwrap();
    }
    for (name, target) in aliases {
        shell.aliases().register(name, target).unwrap();
    }
    shell
}

#[test]
fn attach_seeds_existing_names() {
    let shell = shell_with(&["echo", "exit"], &[("ll", "ls -l")]);
    let index = NameIndex::attach(&shell);
    assert_eq!(index.len(), 3);
    assert!(index.contains("ll"));
}

#[test]
fn follows_registrations_and_removals() {
    let shell = shell_with(&[], &[]);
    let index = NameIndex::attach(&shell);

    shell.commands().register(Box::new(StubCommand::new("echo"))).unwrap();
    shell.aliases().register("e", "echo").unwrap();
    assert_eq!(index.complete(""), vec!["e", "echo"]);

    shell.commands().remove("echo").unwrap();
    shell.aliases().remove("e").unwrap();
    assert!(index.is_empty());
}

#[test]
fn shared_name_survives_until_both_are_gone() {
    let shell = shell_with(&["ls"], &[("ls", "ls -l")]);
    let index = NameIndex::attach(&shell);

    shell.aliases().remove("ls").unwrap();
    assert!(index.contains("ls"));
    shell.commands().remove("ls").unwrap();
    assert!(!index.contains("ls"));
}

#[yare::parameterized(
    empty_prefix = { "",    &["alias", "echo", "exit", "export"] },
    e            = { "e",   &["echo", "exit", "export"] },
    ex           = { "ex",  &["exit", "export"] },
    exact        = { "echo", &["echo"] },
    none         = { "z",   &[] },
)]
fn complete_by_prefix(prefix: &str, expected: &[&str]) {
    let shell = shell_with(&["exit", "echo", "alias", "export"], &[]);
    let index = NameIndex::attach(&shell);
    assert_eq!(index.complete(prefix), expected);
}
