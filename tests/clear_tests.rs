//! Integration tests for the clear command

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::shopkeep_cmd;

fn store_with_data() -> TempDir {
    let temp = TempDir::new().unwrap();
    shopkeep_cmd().arg("init").arg(temp.path()).assert().success();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args([
            "sales", "add", "--order-id", "A1", "--customer", "Bob", "--product", "Widget",
            "--amount", "100",
        ])
        .assert()
        .success();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "add", "--name", "Tea", "--stock", "5"])
        .assert()
        .success();

    temp
}

#[test]
fn test_clear_with_yes_wipes_every_collection() {
    let temp = store_with_data();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All records cleared"));

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["sales", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales found"));

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));

    // The persisted blobs are emptied too, not just process memory.
    let blob = fs::read_to_string(temp.path().join(".shopkeep/sales.json")).unwrap();
    assert_eq!(blob, "[]");
}

#[test]
fn test_clear_declined_keeps_data() {
    let temp = store_with_data();

    shopkeep_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["sales", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn test_clear_accepted_at_prompt() {
    let temp = store_with_data();

    shopkeep_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All records cleared"));

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["sales", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales found"));
}
