//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    axe_report!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".axe-report.toml")).unwrap();
    assert!(content.contains("suppressed_messages"));
    assert!(content.contains("[needs_review]"));
}

#[test]
fn init_refuses_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing");

    axe_report!()
        .current_dir(fixture.path())
        .args(["--color", "never", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn generated_config_is_picked_up() {
    let fixture = TestFixture::new();
    let results = fixture.create_results();

    axe_report!()
        .current_dir(fixture.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    axe_report!()
        .current_dir(fixture.path())
        .arg("decorate")
        .arg(&results)
        .assert()
        .success();
}
