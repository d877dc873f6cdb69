// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn event_json_format() {
    let event = Event::AliasRegistered {
        name: "ll".to_string(),
        target: "ls -l".to_string(),
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(json, r#"{"type":"alias:registered","name":"ll","target":"ls -l"}"#);
}

#[test]
fn event_deserializes_from_tag() {
    let json = r#"{"type":"command:removed","name":"echo"}"#;
    let parsed: Event = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, Event::CommandRemoved { name: "echo".into() });
}

#[yare::parameterized(
    cmd_reg   = { Event::CommandRegistered { name: "a".into() }, "command:registered", true },
    cmd_rm    = { Event::CommandRemoved { name: "a".into() }, "command:removed", true },
    alias_reg = { Event::AliasRegistered { name: "a".into(), target: "b".into() }, "alias:registered", false },
    alias_rm  = { Event::AliasRemoved { name: "a".into() }, "alias:removed", false },
)]
fn event_names_and_families(event: Event, name: &str, is_command: bool) {
    assert_eq!(event.name(), name);
    assert_eq!(event.subject(), "a");
    assert_eq!(event.is_command_event(), is_command);
    assert_eq!(event.is_alias_event(), !is_command);
    assert!(event.log_summary().starts_with(name));
}

#[test]
fn alias_summary_includes_target() {
    let event = Event::AliasRegistered {
        name: "hi".into(),
        target: "echo hi".into(),
    };
    assert_eq!(event.log_summary(), r#"alias:registered name=hi target="echo hi""#);
}
