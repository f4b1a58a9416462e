//! Session commands. The configured API is unreachable, so every
//! assertion here is about what happens before or without the network.

use jurnal_testing::fixtures::{guru, login};
use jurnal_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_whoami_without_session_fails() {
    let world = TestWorld::new();
    let result = world.run(&["whoami"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr.contains("Error: You must log in first"));
}

#[test]
fn test_whoami_reads_stored_session() {
    let world = TestWorld::new().signed_in(login("tok-1", guru("u1", "Sari Wulandari")));

    let result = world.run(&["whoami"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "Sari Wulandari (u1) as guru\n");

    let json = world.run(&["whoami", "--format", "json"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["signed_in"], true);
    assert_eq!(json["content"]["user_id"], "u1");
    assert_eq!(json["content"]["role"], "guru");
}

#[test]
fn test_logout_without_session_succeeds() {
    let world = TestWorld::new();
    world
        .command()
        .unwrap()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
}

#[test]
fn test_logout_clears_session_when_server_unreachable() {
    let world = TestWorld::new().signed_in(login("tok-1", guru("u1", "Sari Wulandari")));
    assert!(world.session().is_signed_in());

    let result = world.run(&["logout"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("The server was not notified"));
    assert!(!world.session().is_signed_in());
}

#[test]
fn test_login_reports_network_error() {
    let world = TestWorld::new();
    world
        .command()
        .unwrap()
        .args(["login", "sari", "--password", "rahasia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
    assert!(!world.session().is_signed_in());
}

#[test]
fn test_login_password_from_environment() {
    let world = TestWorld::new().with_env("JURNAL_PASSWORD", "rahasia");
    // Reaching the network at all proves clap accepted the password.
    world
        .command()
        .unwrap()
        .args(["login", "sari"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"));
}

#[test]
fn test_dashboard_without_session_fails_before_network() {
    let world = TestWorld::new();
    world
        .command()
        .unwrap()
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must log in first"));
}
