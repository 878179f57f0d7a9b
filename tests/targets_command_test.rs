mod common;

use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn empty_directory_yields_default_target() {
    let tmp = TempDir::new().unwrap();

    let value = common::run_json(tmp.path(), ["targets"]);
    let targets = value.as_array().expect("array");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0]["host"], "127.0.0.1");
    assert_eq!(targets[0]["port"], 3306);
    assert_eq!(targets[0]["user"], "root");
    assert_eq!(targets[0]["baseDsn"], "root@tcp(127.0.0.1:3306)/");
}

#[test]
fn embedded_port_in_option_file_is_split() {
    let tmp = TempDir::new().unwrap();
    common::write(tmp.path(), ".schemactl.yaml", "host: db1:3307\nschema: shop\n");

    let value = common::run_json(tmp.path(), ["targets"]);
    assert_eq!(value[0]["host"], "db1");
    assert_eq!(value[0]["port"], 3307);
    assert_eq!(value[0]["hostAndPort"], "db1:3307");
    assert_eq!(value[0]["dsn"], "root@tcp(db1:3307)/shop");
}

#[test]
fn cli_overrides_win_but_empty_values_do_not() {
    let tmp = TempDir::new().unwrap();
    common::shared_host_tree(tmp.path());

    let value = common::run_json(
        tmp.path(),
        ["targets", "--host", "cli-host", "--port", "3310", "--user", ""],
    );
    let targets = value.as_array().expect("array");
    assert_eq!(targets.len(), 3);
    for target in targets {
        assert_eq!(target["host"], "cli-host");
        assert_eq!(target["port"], 3310);
        assert_ne!(target["user"], "");
    }
    assert_eq!(targets[0]["schema"], "audit");
    assert_eq!(targets[0]["user"], "app");
    assert_eq!(targets[1]["schema"], "reports");
    assert_eq!(targets[1]["user"], "reporter");
}

#[test]
fn json_output_hides_password() {
    let tmp = TempDir::new().unwrap();
    common::shared_host_tree(tmp.path());

    let value = common::run_json(tmp.path(), ["targets"]);
    assert_eq!(value[0]["hasPassword"], true);
    assert_eq!(value[0]["baseDsn"], "app:***@tcp(db1:3306)/");
}

#[test]
fn markdown_table_lists_schemas() {
    let tmp = TempDir::new().unwrap();
    common::shared_host_tree(tmp.path());

    common::schemactl_in(tmp.path())
        .args(["targets", "--markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shop"))
        .stdout(predicate::str::contains("reporter"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn malformed_option_file_is_reported() {
    let tmp = TempDir::new().unwrap();
    common::write(tmp.path(), ".schemactl.yaml", "port: lots\n");

    common::schemactl_in(tmp.path())
        .arg("targets")
        .assert()
        .failure()
        .stderr(predicate::str::contains(".schemactl.yaml"));
}
