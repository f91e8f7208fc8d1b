use std::path::PathBuf;

use super::*;

#[test]
fn config_error_displays_message() {
    let err = MetricsGuardError::Config("bad threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad threshold");
}

#[test]
fn file_read_error_includes_path() {
    let err = MetricsGuardError::FileRead {
        path: PathBuf::from("src/locked.rs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("src/locked.rs"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: MetricsGuardError = io.into();
    assert!(matches!(err, MetricsGuardError::Io(_)));
}
