//! Alias definition, expansion, and cycle detection.

use crate::prelude::*;

#[test]
fn alias_appends_arguments_to_target() {
    gsh()
        .args(&["-c", "alias foo echo hi", "-c", "foo there"])
        .passes()
        .stdout_eq("hi there\n");
}

#[test]
fn alias_behaves_like_its_expansion() {
    let direct = line("echo hi there").passes().stdout();
    let aliased = gsh()
        .args(&["-c", "alias foo echo hi", "-c", "foo there"])
        .passes()
        .stdout();
    similar_asserts::assert_eq!(direct, aliased);
}

#[test]
fn alias_listing_shows_definitions() {
    gsh()
        .args(&["-c", "alias ll echo long", "-c", "alias"])
        .passes()
        .stdout_eq("ll='echo long'\n");
}

#[test]
fn redefining_alias_replaces_target() {
    gsh()
        .args(&["-c", "alias a echo one", "-c", "alias a echo two", "-c", "a"])
        .passes()
        .stdout_eq("two\n");
}

#[test]
fn unalias_removes_alias() {
    gsh()
        .args(&["-c", "alias a echo one", "-c", "unalias a", "-c", "a"])
        .fails()
        .stderr_has("command not found: a");
}

#[test]
fn unalias_unknown_name_fails() {
    line("unalias ghost")
        .fails()
        .stderr_has("alias not found: ghost");
}

#[test]
fn self_referencing_alias_is_a_cycle() {
    gsh()
        .args(&["-c", "alias loop loop", "-c", "loop"])
        .fails()
        .stderr_has("alias cycle: loop -> loop");
}

#[test]
fn mutual_aliases_are_a_cycle() {
    gsh()
        .args(&["-c", "alias a b", "-c", "alias b a", "-c", "a"])
        .fails()
        .stderr_has("alias cycle: a -> b -> a");
}

#[test]
fn alias_shadows_builtin() {
    gsh()
        .args(&["-c", "alias echo exit 4", "-c", "echo"])
        .exits_with(4);
}
