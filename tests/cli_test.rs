use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("order,description,total,payment"))
        .stdout(predicate::str::contains("1,Margherita Pizza,5.00,PayPal"))
        .stdout(predicate::str::contains(
            "2,\"Pepperoni Pizza with Cheese, Mushrooms\",7.70,Credit Card",
        ))
        .stdout(predicate::str::contains(
            "3,Margherita Pizza with Olives,5.50,Credit Card",
        ));

    Ok(())
}

#[test]
fn test_cli_logs_remaining_inventory() {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.arg("tests/fixtures/orders.csv");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Remaining inventory"))
        .stderr(predicate::str::contains("\"Margherita\":8"))
        .stderr(predicate::str::contains("\"Pepperoni\":9"));
}

#[test]
fn test_cli_missing_orders_file() {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
