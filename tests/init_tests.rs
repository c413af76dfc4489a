//! Integration tests for init and store discovery

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::shopkeep_cmd;

#[test]
fn test_init_creates_store_dir_and_config() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized shopkeep store"));

    assert!(temp.path().join(".shopkeep").is_dir());
    assert!(temp.path().join(".shopkeep/config.toml").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd().arg("init").arg(temp.path()).assert().success();

    shopkeep_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("books");

    shopkeep_cmd().arg("init").arg(&target).assert().success();

    assert!(target.join(".shopkeep").is_dir());
}

#[test]
fn test_commands_outside_store_fail_with_hint() {
    let temp = TempDir::new().unwrap();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["sales", "list"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a shopkeep store"))
        .stderr(predicate::str::contains("shopkeep init"));
}

#[test]
fn test_store_discovered_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    shopkeep_cmd().arg("init").arg(temp.path()).assert().success();

    let subdir = temp.path().join("sub").join("deep");
    fs::create_dir_all(&subdir).unwrap();

    shopkeep_cmd()
        .current_dir(&subdir)
        .args(["sales", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales found"));
}

#[test]
fn test_store_discovered_via_env_var() {
    let temp = TempDir::new().unwrap();
    shopkeep_cmd().arg("init").arg(temp.path()).assert().success();

    let elsewhere = TempDir::new().unwrap();

    shopkeep_cmd()
        .current_dir(elsewhere.path())
        .env("SHOPKEEP_ROOT", temp.path())
        .args(["sales", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales found"));
}

#[test]
fn test_no_subcommand_prints_usage() {
    shopkeep_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("shopkeep"))
        .stdout(predicate::str::contains("--help"));
}
