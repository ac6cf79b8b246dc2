//! Command line surface tests: help, version, completions and config

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("profile"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn test_readme_documents_every_command() {
    let readme =
        std::fs::read_to_string(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("README.md"))
            .unwrap();
    for command in [
        "sync", "list", "show", "install", "uninstall", "enable", "disable", "update", "bundle",
        "profile", "config", "publish", "completions", "version",
    ] {
        assert!(
            readme.contains(&format!("| `{command}")),
            "README.md does not document '{command}'"
        );
    }
}

#[test]
fn test_version_command() {
    let env = TestEnv::new();
    env.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("modsync "));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modsync"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell 'tcsh'"));
}

#[test]
fn test_config_show_creates_defaults() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install-location"))
        .stdout(predicate::str::contains("auto-update-mods"));
    assert!(env.home.join("config.json").is_file());
}

#[test]
fn test_config_set_install_location() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "set", "install-location"])
        .arg(&env.game)
        .assert()
        .success();

    let config = env.read_document("config.json");
    assert_eq!(
        config["install_location"].as_str(),
        Some(env.game.display().to_string().as_str())
    );
}

#[test]
fn test_config_set_unknown_key_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_install_without_install_location_fails() {
    let mut env = TestEnv::new();
    env.publish(common::ModEntry::new("a", "1", &[]));
    env.cmd()
        .args(["install", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Install location"));
}
