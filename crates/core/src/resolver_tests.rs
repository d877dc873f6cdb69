// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::event_manager::EventManager;
use crate::test_support::StubCommand;
use crate::Shell;
use std::sync::atomic::Ordering;

fn resolver() -> (CommandResolver, AliasRegistry, CommandRegistry) {
    let events = EventManager::new();
    let aliases = AliasRegistry::new(events.clone());
    let commands = CommandRegistry::new(events);
    (
        CommandResolver::new(aliases.clone(), commands.clone()),
        aliases,
        commands,
    )
}

#[test]
fn unknown_name_is_not_found() {
    let (resolver, _, _) = resolver();
    assert!(matches!(
        resolver.resolve("ghost"),
        Err(ShellError::CommandNotFound { name }) if name == "ghost"
    ));
}

#[test]
fn empty_name_is_not_found() {
    let (resolver, _, _) = resolver();
    assert!(matches!(resolver.resolve(""), Err(ShellError::CommandNotFound { .. })));
}

#[test]
fn command_resolves_to_a_copy() {
    let (resolver, _, commands) = resolver();
    let stub = StubCommand::new("ls");
    let copies = stub.copies();
    commands.register(Box::new(stub)).unwrap();

    let a = resolver.resolve("ls").unwrap();
    let b = resolver.resolve("ls").unwrap();
    assert_eq!(a.name(), "ls");
    assert_eq!(b.name(), "ls");
    assert_eq!(copies.load(Ordering::SeqCst), 2);
}

fn run(cmd: &mut dyn Command, shell: &mut Shell, args: &[&str]) -> Value {
    let args = args.iter().map(|a| a.to_string()).collect();
    let mut ctx = CommandContext::new(shell, "ls", args);
    cmd.execute(&mut ctx).unwrap()
}

#[test]
fn resolved_copies_do_not_share_state() {
    let (resolver, _, commands) = resolver();
    commands.register(Box::new(StubCommand::new("ls"))).unwrap();
    let mut shell = Shell::new();

    let mut a = resolver.resolve("ls").unwrap();
    let mut b = resolver.resolve("ls").unwrap();
    run(a.as_mut(), &mut shell, &["one"]);
    assert_eq!(run(a.as_mut(), &mut shell, &["two"]), Value::from("one two"));

    assert_eq!(run(b.as_mut(), &mut shell, &["three"]), Value::from("three"));

    let mut fresh = resolver.resolve("ls").unwrap();
    assert_eq!(run(fresh.as_mut(), &mut shell, &["four"]), Value::from("four"));
}

#[test]
fn alias_shadows_command() {
    let (resolver, aliases, commands) = resolver();
    commands.register(Box::new(StubCommand::new("ls"))).unwrap();
    aliases.register("ls", "ls -l").unwrap();

    let cmd = resolver.resolve("ls").unwrap();
    assert_eq!(cmd.description(), "alias for 'ls -l'");
}

#[test]
fn removing_alias_falls_through_to_command() {
    let (resolver, aliases, commands) = resolver();
    commands.register(Box::new(StubCommand::new("ls"))).unwrap();
    aliases.register("ls", "ls -l").unwrap();
    aliases.remove("ls").unwrap();

    assert_eq!(resolver.resolve("ls").unwrap().description(), "test stub");
}

#[yare::parameterized(
    no_args   = { &[],                "echo hi" },
    one_arg   = { &["there"],         "echo hi there" },
    many_args = { &["a", "b c"],      "echo hi a b c" },
)]
fn alias_expansion_appends_args(args: &[&str], expected: &str) {
    let alias = AliasCommand::new("hi", "echo hi".to_string());
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    assert_eq!(alias.expand(&args), expected);
}

#[test]
fn alias_command_reenters_shell() {
    let mut shell = Shell::new();
    let stub = StubCommand::new("echo");
    let calls = stub.calls();
    shell.commands().register(Box::new(stub)).unwrap();

    let mut alias = AliasCommand::new("hi", "echo hi".to_string());
    let mut ctx = CommandContext::new(&mut shell, "hi", vec!["there".to_string()]);
    let value = alias.execute(&mut ctx).unwrap();

    assert_eq!(value, Value::String("hi there".into()));
    assert_eq!(*calls.lock(), vec![vec!["hi".to_string(), "there".to_string()]]);
    assert_eq!(alias.target(), "echo hi");
}
