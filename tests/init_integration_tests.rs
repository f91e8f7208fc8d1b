mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_config_file() {
    let fixture = TestFixture::new();
    let config_path = fixture.path().join(".metrics-guard.toml");

    metrics_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[thresholds]"));
    assert!(content.contains("max_file_lines = 500"));
    assert!(content.contains("max_function_lines = 50"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    let config_path = fixture.path().join(".metrics-guard.toml");
    fixture.create_file(".metrics-guard.toml", "# existing\n");

    metrics_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert_eq!(content, "# existing\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    let config_path = fixture.path().join(".metrics-guard.toml");
    fixture.create_file(".metrics-guard.toml", "# existing\n");

    metrics_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--force")
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[thresholds]"));
}

#[test]
fn generated_config_is_loadable_by_check() {
    let fixture = TestFixture::new();
    let config_path = fixture.path().join(".metrics-guard.toml");
    fixture.create_rust_file("src/small.rs", 4);

    metrics_guard!()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success();

    metrics_guard!()
        .arg("check")
        .arg(fixture.path().join("src"))
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Files analyzed: 1"));
}
