//! Integration tests for the LusaKey CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Master passwords are supplied through `LUSAKEY_PASSWORD` so no
//! interactive prompt is ever shown, and config/data directories are
//! pointed at a temp dir so the user's real vault is never touched.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

const MASTER: &str = "correct horse battery";

/// Helper: get a Command pointing at the lusakey binary, isolated in `home`.
fn lusakey(home: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("lusakey").expect("binary should exist");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("LUSAKEY_VAULT")
        .env_remove("LUSAKEY_NEW_PASSWORD")
        .env_remove("RUST_LOG")
        .env("LUSAKEY_PASSWORD", MASTER);
    cmd
}

/// Helper: a temp dir plus the path of a vault file inside it.
fn setup() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let vault = tmp.path().join("vault.dat");
    (tmp, vault)
}

fn init(home: &Path, vault: &Path) {
    lusakey(home)
        .arg("--vault")
        .arg(vault)
        .arg("init")
        .assert()
        .success();
}

fn add(home: &Path, vault: &Path, args: &[&str]) {
    lusakey(home)
        .arg("--vault")
        .arg(vault)
        .arg("add")
        .args(args)
        .write_stdin("s3cret-value\n")
        .assert()
        .success();
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    lusakey(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Local encrypted password vault"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("passwd"));
}

#[test]
fn version_flag_shows_version() {
    let tmp = TempDir::new().unwrap();
    lusakey(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lusakey"));
}

#[test]
fn no_args_shows_help() {
    let tmp = TempDir::new().unwrap();
    lusakey(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_password_of_requested_length() {
    let tmp = TempDir::new().unwrap();
    lusakey(tmp.path())
        .args(["generate", "--length", "24", "--no-uppercase", "--no-lowercase"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[0-9]{24}\n$").unwrap());
}

#[test]
fn list_on_missing_vault_fails() {
    let (tmp, vault) = setup();
    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault not found"));
}

#[test]
fn init_creates_vault_and_refuses_second_init() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    assert!(vault.exists());

    let contents = std::fs::read(&vault).unwrap();
    assert_eq!(&contents[..4], b"LSK1");

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_rejects_short_master_password() {
    let (tmp, vault) = setup();
    lusakey(tmp.path())
        .env("LUSAKEY_PASSWORD", "short")
        .arg("--vault")
        .arg(&vault)
        .arg("init")
        .assert()
        .failure();
    assert!(!vault.exists());
}

#[test]
fn add_list_show_roundtrip() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    add(
        tmp.path(),
        &vault,
        &["--title", "GitHub", "--category", "Dev", "--username", "octocat"],
    );

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub"))
        .stdout(predicate::str::contains("octocat"))
        .stdout(predicate::str::contains("s3cret-value").not());

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["show", "1", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cret-value"));

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("s3cret-value").not());
}

#[test]
fn wrong_password_shows_generic_message() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);

    lusakey(tmp.path())
        .env("LUSAKEY_PASSWORD", "not the password")
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to unlock vault"));
}

#[test]
fn edit_and_remove_entries() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    add(tmp.path(), &vault, &["--title", "Old title"]);
    add(tmp.path(), &vault, &["--title", "Second"]);

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["edit", "1", "--title", "New title", "--url", "https://example.com"])
        .assert()
        .success();

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["remove", "2", "--force"])
        .assert()
        .success();

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("New title"))
        .stdout(predicate::str::contains("https://example.com"))
        .stdout(predicate::str::contains("Second").not());
}

#[test]
fn show_open_without_url_warns() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    add(tmp.path(), &vault, &["--title", "No site"]);

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["show", "1", "--open"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no URL"));
}

#[test]
fn show_out_of_range_fails() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["show", "3"])
        .assert()
        .failure();
}

#[test]
fn export_import_csv_between_vaults() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    add(
        tmp.path(),
        &vault,
        &["--title", "Bank", "--notes", "pin, \"quoted\"\nsecond line"],
    );

    let csv = tmp.path().join("backup.csv");
    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("export")
        .arg(&csv)
        .assert()
        .success()
        .stderr(predicate::str::contains("NOT encrypted"));

    let other = tmp.path().join("other.dat");
    init(tmp.path(), &other);
    lusakey(tmp.path())
        .arg("--vault")
        .arg(&other)
        .arg("import")
        .arg(&csv)
        .assert()
        .success();

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&other)
        .args(["show", "1", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank"))
        .stdout(predicate::str::contains("s3cret-value"))
        .stdout(predicate::str::contains("second line"));
}

#[test]
fn export_json_to_stdout() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);
    add(tmp.path(), &vault, &["--title", "Mail"]);

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .args(["export", "-", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stdout(predicate::str::contains("\"title\": \"Mail\""));
}

#[test]
fn export_refuses_to_overwrite_vault() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("export")
        .arg(&vault)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing"));
}

#[test]
fn passwd_changes_master_password() {
    let (tmp, vault) = setup();
    init(tmp.path(), &vault);

    lusakey(tmp.path())
        .env("LUSAKEY_NEW_PASSWORD", "a brand new password")
        .arg("--vault")
        .arg(&vault)
        .arg("passwd")
        .assert()
        .success();

    lusakey(tmp.path())
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .failure();

    lusakey(tmp.path())
        .env("LUSAKEY_PASSWORD", "a brand new password")
        .arg("--vault")
        .arg(&vault)
        .arg("list")
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    lusakey(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lusakey"));
}
