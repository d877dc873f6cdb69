//! Loading aliases and variables from a config file.

use crate::prelude::*;

const CONFIG: &str = r#"
[aliases]
greet = "echo hello"

[variables]
name = "world"
"#;

#[test]
fn config_flag_preloads_aliases_and_variables() {
    let config = ConfigFile::new(CONFIG);
    gsh()
        .args(&["--config"])
        .args(&[config.path().to_str().unwrap()])
        .args(&["-c", "greet ${name}"])
        .passes()
        .stdout_eq("hello world\n");
}

#[test]
fn config_env_var_is_used_without_flag() {
    let config = ConfigFile::new(CONFIG);
    gsh()
        .env("GSH_CONFIG", config.path())
        .args(&["-c", "echo ${name}"])
        .passes()
        .stdout_eq("world\n");
}

#[test]
fn config_flag_wins_over_env_var() {
    let flag = ConfigFile::new("[variables]\nname = \"flag\"\n");
    let env = ConfigFile::new("[variables]\nname = \"env\"\n");
    gsh()
        .env("GSH_CONFIG", env.path())
        .args(&["--config", flag.path().to_str().unwrap()])
        .args(&["-c", "echo ${name}"])
        .passes()
        .stdout_eq("flag\n");
}

#[test]
fn empty_unset_policy_expands_to_nothing() {
    let config = ConfigFile::new("unset_variables = \"empty\"\n");
    gsh()
        .args(&["--config", config.path().to_str().unwrap()])
        .args(&["-c", "echo [${missing}]"])
        .passes()
        .stdout_eq("[]\n");
}

#[test]
fn unknown_config_key_is_rejected() {
    let config = ConfigFile::new("colour = \"blue\"\n");
    gsh()
        .args(&["--config", config.path().to_str().unwrap()])
        .args(&["-c", "echo hi"])
        .fails()
        .stderr_has("Error:");
}
