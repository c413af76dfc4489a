//! Integration tests for the inventory commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{id_from_list, shopkeep_cmd};

fn init_store() -> TempDir {
    let temp = TempDir::new().unwrap();
    shopkeep_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

fn add_product(temp: &TempDir, name: &str, stock: &str, reorder: &str, price: &str) {
    shopkeep_cmd()
        .current_dir(temp.path())
        .args([
            "inventory", "add", "--name", name, "--category", "Drinks", "--stock", stock,
            "--reorder", reorder, "--price", price,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added product"));
}

fn list_stdout(temp: &TempDir) -> String {
    let output = shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "list"])
        .output()
        .unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_add_then_list() {
    let temp = init_store();

    add_product(&temp, "Tea", "5", "10", "500");

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tea"))
        .stdout(predicate::str::contains("Drinks"))
        .stdout(predicate::str::contains("₦500"));
}

#[test]
fn test_add_with_defaults() {
    let temp = init_store();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "add", "--name", "Tea"])
        .assert()
        .success();

    let stdout = list_stdout(&temp);
    assert!(stdout.contains("Tea"));
    // Missing category shows as a placeholder dash.
    assert!(stdout.contains("—"));
}

#[test]
fn test_edit_updates_stock() {
    let temp = init_store();
    add_product(&temp, "Tea", "5", "10", "500");

    let id = id_from_list(&list_stdout(&temp), "Tea");

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "edit", &id, "--stock", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated product"));

    let stdout = list_stdout(&temp);
    assert!(stdout.contains("42"));
    // Name and price survive the edit untouched.
    assert!(stdout.contains("Tea"));
    assert!(stdout.contains("₦500"));
}

#[test]
fn test_remove_with_yes() {
    let temp = init_store();
    add_product(&temp, "Tea", "5", "10", "500");

    let id = id_from_list(&list_stdout(&temp), "Tea");

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "remove", &id, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted product"));

    assert!(list_stdout(&temp).contains("No products found"));
}

#[test]
fn test_list_search_filters() {
    let temp = init_store();
    add_product(&temp, "Tea", "5", "10", "500");
    add_product(&temp, "Coffee", "20", "10", "800");

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "list", "--search", "coffee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"))
        .stdout(predicate::str::contains("Tea").not());
}

#[test]
fn test_non_numeric_stock_is_rejected_by_cli() {
    let temp = init_store();

    shopkeep_cmd()
        .current_dir(temp.path())
        .args(["inventory", "add", "--name", "Tea", "--stock", "many"])
        .assert()
        .failure();
}
