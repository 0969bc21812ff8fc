use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

#[test]
fn test_interactive_order() {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.write_stdin("2\n3\n4\n1\n0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Pizza Restaurant!"))
        .stdout(predicate::str::contains(
            "Description: Pepperoni Pizza with Mushrooms",
        ))
        .stdout(predicate::str::contains("Total cost: $6.70"))
        .stdout(predicate::str::contains("Payment successful via PayPal!"))
        .stdout(predicate::str::contains("\"Mushrooms\":11"));
}

#[test]
fn test_interactive_exit_on_eof() {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your order:").not());
}

#[test]
fn test_interactive_eof_at_payment_does_not_charge() {
    let mut cmd = Command::new(cargo_bin!("pizzeria"));
    cmd.write_stdin("1\n4\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Choose Payment Method:"))
        .stdout(predicate::str::contains("Payment successful").not())
        .stdout(predicate::str::contains("Defaulting to").not());
}
