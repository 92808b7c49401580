use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

fn command() -> Command {
    Command::cargo_bin("devault").expect("binary exists")
}

#[test]
fn panels_default_to_open_form_and_closed_options() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("XDG_CONFIG_HOME", temp.child("config").path()).arg("panel");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dropdown expanded"))
        .stdout(predicate::str::contains("options  collapsed"));
}

#[test]
fn toggle_is_remembered() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_root = temp.child("config");

    let mut toggle = command();
    toggle
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("panel")
        .arg("dropdown")
        .arg("--toggle");
    toggle.assert().success().stdout(predicate::str::contains("dropdown collapsed"));

    let state = fs::read_to_string(config_root.child("devault/state.toml").path()).unwrap();
    assert!(state.contains("dropdownCollapsed = \"true\""));
    assert!(!state.contains("optionsCollapsed"));

    let mut show = command();
    show.env("XDG_CONFIG_HOME", config_root.path()).arg("panel");
    show.assert()
        .success()
        .stdout(predicate::str::contains("dropdown collapsed"))
        .stdout(predicate::str::contains("options  collapsed"));

    let mut toggle_options = command();
    toggle_options
        .env("XDG_CONFIG_HOME", config_root.path())
        .arg("panel")
        .arg("options")
        .arg("--toggle");
    toggle_options.assert().success().stdout(predicate::str::contains("options  expanded"));

    let state = fs::read_to_string(config_root.child("devault/state.toml").path()).unwrap();
    assert!(state.contains("optionsCollapsed = \"false\""));
}

#[test]
fn unknown_panel_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("XDG_CONFIG_HOME", temp.child("config").path()).arg("panel").arg("sidebar");

    cmd.assert().failure().stderr(predicate::str::contains("Unknown panel 'sidebar'"));
}
