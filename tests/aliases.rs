use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn command() -> Command {
    Command::cargo_bin("devault").expect("binary exists")
}

#[test]
fn alias_sc_works_like_scan() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("project/index.html").write_str("<!-- TODO: add footer -->").unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("sc")
        .arg(temp.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 1 comment(s)"))
        .stdout(predicate::str::contains("project/index.html:1"));
}

#[test]
fn alias_cfg_works_like_config() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = command();
    cmd.env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.child("config").path())
        .arg("cfg")
        .arg("--path");

    cmd.assert().success().stdout(predicate::str::contains("config.toml"));
}
