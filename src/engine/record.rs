use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classifier::LineStats;
use crate::extractor::FunctionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    FileTooLarge,
    FunctionTooLarge,
}

/// A policy finding: a measured code-line count strictly exceeds its limit.
/// Derived fresh on every scan, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub measured: usize,
    pub limit: usize,
}

impl Violation {
    #[must_use]
    pub fn file_too_large(path: &Path, measured: usize, limit: usize) -> Self {
        Self {
            kind: ViolationKind::FileTooLarge,
            path: path.to_path_buf(),
            function: None,
            line: None,
            measured,
            limit,
        }
    }

    #[must_use]
    pub fn function_too_large(
        path: &Path,
        function: &FunctionRecord,
        limit: usize,
    ) -> Self {
        Self {
            kind: ViolationKind::FunctionTooLarge,
            path: path.to_path_buf(),
            function: Some(function.name.clone()),
            line: Some(function.start_line),
            measured: function.code_lines,
            limit,
        }
    }
}

/// Everything measured for one scanned file. Created once per file during a
/// scan and reduced into the summary afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path relative to the scan root where possible.
    pub path: PathBuf,
    pub language: String,
    pub stats: LineStats,
    pub functions: Vec<FunctionRecord>,
    pub violations: Vec<Violation>,
}

impl FileRecord {
    /// Zero-metric record for a file that could not be read.
    #[must_use]
    pub fn unreadable(path: &Path, language: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            language: language.to_string(),
            stats: LineStats::new(),
            functions: Vec::new(),
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn code_lines(&self) -> usize {
        self.stats.code_lines()
    }
}

/// Non-fatal problem encountered during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}
