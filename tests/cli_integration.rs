//! Integration tests for the CredVault CLI.
//!
//! These exercise the binary end-to-end with `assert_cmd`. Every field
//! is passed as a flag and the password is piped on stdin so no test
//! needs an interactive terminal.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command for the credvault binary using `dir` as data dir.
fn credvault(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credvault").expect("binary should exist");
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

fn add(dir: &TempDir, service: &str, username: &str, password: &str) {
    credvault(dir)
        .args(["add", "--service", service, "--username", username])
        .write_stdin(format!("{password}\n"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Status: Submitted..."));
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("encrypted"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("generate"));
}

#[test]
fn no_args_shows_help() {
    #[allow(deprecated)]
    Command::cargo_bin("credvault")
        .expect("binary should exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_prints_twelve_characters_by_default() {
    let tmp = TempDir::new().unwrap();
    let output = credvault(&tmp).arg("generate").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let password = stdout.trim_end();
    assert_eq!(password.chars().count(), 12);
    assert!(password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!$?".contains(c)));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Status: Generating..."));
}

#[test]
fn generate_respects_length_and_config() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args(["generate", "--length", "30"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9!$?]{30}\n$").unwrap());

    tmp.child("credvault.toml")
        .write_str("password_length = 20\n")
        .unwrap();
    credvault(&tmp)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::is_match("^[A-Za-z0-9!$?]{20}\n$").unwrap());
}

#[test]
fn generate_rejects_oversized_config_length() {
    let tmp = TempDir::new().unwrap();
    tmp.child("credvault.toml")
        .write_str("password_length = 5000\n")
        .unwrap();

    credvault(&tmp)
        .arg("generate")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot exceed 1024"));
}

#[test]
fn generate_rejects_zero_length() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args(["generate", "--length", "0"])
        .assert()
        .failure();
}

#[test]
fn add_then_list_roundtrip() {
    let tmp = TempDir::new().unwrap();
    add(&tmp, "github.com", "alice", "Tr0ub4dor!3");

    tmp.child("key.key").assert(predicate::path::exists());
    tmp.child("password_manager.db")
        .assert(predicate::path::exists());

    credvault(&tmp)
        .args(["list", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("Tr0ub4dor!3"))
        .stderr(predicate::str::contains("Status: Viewing..."));
}

#[test]
fn list_masks_passwords_by_default() {
    let tmp = TempDir::new().unwrap();
    add(&tmp, "github.com", "alice", "Tr0ub4dor!3");

    credvault(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("github.com"))
        .stdout(predicate::str::contains("Tr0ub4dor!3").not());
}

#[test]
fn show_lists_every_entry_for_a_service() {
    let tmp = TempDir::new().unwrap();
    add(&tmp, "github.com", "alice", "first-pw");
    add(&tmp, "github.com", "alice-work", "second-pw");
    add(&tmp, "gitlab.com", "bob", "other-pw");

    credvault(&tmp)
        .args(["show", "github.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first-pw"))
        .stdout(predicate::str::contains("second-pw"))
        .stdout(predicate::str::contains("other-pw").not());
}

#[test]
fn show_unknown_service_fails() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args(["show", "nowhere.example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entries stored for 'nowhere.example'"));
}

#[test]
fn add_with_empty_password_reports_validation_status() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args(["add", "--service", "github.com", "--username", "alice"])
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Status: All fields must be filled..."));

    tmp.child("key.key").assert(predicate::path::missing());
    tmp.child("password_manager.db")
        .assert(predicate::path::missing());

    credvault(&tmp)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries"))
        .stdout(predicate::str::is_match(r"Entries\W+0\W").unwrap());
}

#[test]
fn add_with_generated_password_stores_it() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args([
            "add",
            "--service",
            "example.org",
            "--username",
            "carol",
            "--generate",
            "--length",
            "16",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Status: Generating..."))
        .stderr(predicate::str::contains("Status: Submitted..."));

    credvault(&tmp)
        .args(["show", "example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carol"));
}

#[test]
fn replaced_key_file_reports_decryption_failure() {
    let tmp = TempDir::new().unwrap();
    add(&tmp, "github.com", "alice", "pw");

    tmp.child("key.key").write_binary(&[0x42u8; 32]).unwrap();

    credvault(&tmp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Status: Failed: Decryption failed"));
}

#[test]
fn info_shows_fingerprint() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::contains("Status: Idle..."))
        .stdout(predicate::str::contains("Key fingerprint"))
        .stdout(predicate::str::contains("password_manager.db"));
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    credvault(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("credvault"));
}
