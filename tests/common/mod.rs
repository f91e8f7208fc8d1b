#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the metrics-guard binary.
#[macro_export]
macro_rules! metrics_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("metrics-guard"))
    };
}

/// Temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a Rust file with the given number of code lines.
    pub fn create_rust_file(&self, relative_path: &str, code_lines: usize) {
        let mut content = String::new();
        for i in 0..code_lines {
            let _ = writeln!(content, "let var_{i} = {i};");
        }
        self.create_file(relative_path, &content);
    }

    /// Creates a Rust file containing a single function with exactly
    /// `code_lines` code lines.
    pub fn create_rust_function(&self, relative_path: &str, name: &str, code_lines: usize) {
        let mut content = String::new();
        let _ = writeln!(content, "fn {name}() {{");
        for i in 0..code_lines - 2 {
            let _ = writeln!(content, "    step_{i}();");
        }
        let _ = writeln!(content, "}}");
        self.create_file(relative_path, &content);
    }
}
