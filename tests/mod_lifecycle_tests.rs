//! Install, uninstall, enable, disable and update through the CLI

mod common;

use common::{ModEntry, TestEnv};
use predicates::prelude::*;

fn env_with_chain() -> TestEnv {
    let mut env = TestEnv::new();
    env.publish(ModEntry::new("core", "1", &[]))
        .publish(ModEntry::new("ui", "1", &["core"]))
        .publish(ModEntry::new("speed", "1", &["ui"]));
    env.init();
    env
}

#[test]
fn test_install_pulls_requirements_first() {
    let env = env_with_chain();
    env.cmd()
        .args(["install", "speed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed mod core"))
        .stdout(predicate::str::contains("Installed mod speed"));

    assert_eq!(env.installed_names(), vec!["core", "ui", "speed"]);
    for name in ["core", "ui", "speed"] {
        assert!(env.is_staged(name), "{name} should be staged");
        assert!(env.is_active(name), "{name} should be active");
    }
}

#[test]
fn test_install_disabled_stages_only() {
    let env = env_with_chain();
    env.cmd()
        .args(["install", "core", "--disabled"])
        .assert()
        .success();

    assert!(env.is_staged("core"));
    assert!(!env.is_active("core"));
    assert!(env.is_disabled("core"));
}

#[test]
fn test_install_unknown_mod_fails() {
    let env = env_with_chain();
    env.cmd()
        .args(["install", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Mod 'nope' not found"));
}

#[test]
fn test_uninstall_required_mod_is_refused_without_confirmation() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd()
        .args(["uninstall", "core"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'core' is a dependency of 'ui' and cannot be uninstalled",
        ));
    assert!(env.is_active("core"));
}

#[test]
fn test_uninstall_required_mod_with_yes() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd()
        .args(["--yes", "uninstall", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled mod core"));
    assert!(!env.is_active("core"));
    assert!(!env.is_staged("core"));
    assert!(!env.installed_names().contains(&"core".to_string()));
}

#[test]
fn test_uninstall_removes_orphaned_requirements() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd().args(["uninstall", "speed"]).assert().success();
    assert!(env.installed_names().is_empty());
    assert!(!env.is_active("ui"));
    assert!(!env.is_active("core"));
}

#[test]
fn test_disable_and_enable() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd()
        .args(["disable", "speed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disabled mod speed"));
    assert!(!env.is_active("speed"));
    assert!(env.is_staged("speed"));
    assert!(env.is_disabled("speed"));

    env.cmd()
        .args(["enable", "speed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled mod speed"));
    assert!(env.is_active("speed"));
    assert!(!env.is_disabled("speed"));
}

#[test]
fn test_disable_cascade_takes_requirements() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd()
        .args(["disable", "speed", "--cascade"])
        .assert()
        .success();
    for name in ["core", "ui", "speed"] {
        assert!(!env.is_active(name), "{name} should be inactive");
    }
}

#[test]
fn test_disable_required_mod_is_refused() {
    let env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.cmd()
        .args(["disable", "ui"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be disabled"));
    assert!(env.is_active("ui"));
}

#[test]
fn test_update_after_new_version_is_published() {
    let mut env = env_with_chain();
    env.cmd().args(["install", "speed"]).assert().success();

    env.publish(ModEntry::new("speed", "2", &["ui"]));
    env.cmd().arg("sync").assert().success();
    env.cmd()
        .args(["list", "--installed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("update available"));

    env.cmd().arg("update").assert().success();
    let installed = env.read_document("installed_mods.json");
    let speed = installed
        .as_array()
        .and_then(|mods| mods.iter().find(|m| m["name"] == "speed"))
        .cloned()
        .unwrap();
    assert_eq!(speed["version"], "2");
    assert!(env.is_active("speed"));

    env.cmd()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything is up to date."));
}

#[test]
fn test_incompatible_install_is_refused_without_confirmation() {
    let mut env = TestEnv::new();
    env.publish(ModEntry::new("left", "1", &[]))
        .publish(ModEntry::new("right", "1", &[]).incompatible_with(&["left"]));
    env.init();
    env.cmd().args(["install", "left"]).assert().success();

    env.cmd()
        .args(["install", "right"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incompatible"));
    assert!(env.is_staged("right"));
    assert!(!env.is_active("right"));

    env.cmd().args(["--yes", "enable", "right"]).assert().success();
    assert!(env.is_active("right"));
}

#[test]
fn test_show_and_list() {
    let env = env_with_chain();
    env.cmd()
        .args(["show", "speed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:"))
        .stdout(predicate::str::contains("ui"));

    env.cmd()
        .args(["list", "sp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speed"))
        .stdout(predicate::str::contains("core").not());
}
