#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// `schemactl` running inside `dir`, isolated from any user-level config.
pub fn schemactl_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("schemactl");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_json<I, S>(dir: &Path, args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = schemactl_in(dir)
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json")
}

pub fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create dir");
    }
    fs::write(path, content).expect("write file");
}

/// Two schemas on one server plus one schema reached with a different user.
pub fn shared_host_tree(dir: &Path) {
    write(dir, ".schemactl.yaml", "host: db1\nuser: app\npassword: secret\n");
    write(dir, "shop/.schemactl.yaml", "schema: shop\n");
    write(dir, "audit/.schemactl.yaml", "schema: audit\n");
    write(dir, "reports/.schemactl.yaml", "schema: reports\nuser: reporter\n");
}
