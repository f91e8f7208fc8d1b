use std::path::PathBuf;

use serde::Serialize;

use crate::config::ThresholdConfig;

use super::{FileRecord, ScanWarning, Violation, ViolationKind};

/// Effective limits for one scan, restated in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    pub max_file_lines: usize,
    pub max_function_lines: usize,
    pub top_n: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from(&ThresholdConfig::default())
    }
}

impl From<&ThresholdConfig> for Thresholds {
    fn from(config: &ThresholdConfig) -> Self {
        Self {
            max_file_lines: config.max_file_lines,
            max_function_lines: config.max_function_lines,
            top_n: config.top_n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRanking {
    pub path: PathBuf,
    pub code_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRanking {
    pub path: PathBuf,
    pub name: String,
    pub start_line: usize,
    pub code_lines: usize,
}

/// Aggregate result of one scan. A pure value: rendering it performs no I/O
/// and two scans over an unchanged tree produce identical summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub thresholds: Thresholds,
    pub total_files: usize,
    pub total_functions: usize,
    pub total_code_lines: usize,
    pub violations: Vec<Violation>,
    pub warnings: Vec<ScanWarning>,
    pub largest_files: Vec<FileRanking>,
    pub largest_functions: Vec<FunctionRanking>,
}

impl ScanSummary {
    /// Reduce per-file records into the aggregate. Records must be in
    /// discovery order; rankings break code-line ties by that order.
    #[must_use]
    pub fn from_records(
        thresholds: Thresholds,
        records: &[FileRecord],
        warnings: Vec<ScanWarning>,
    ) -> Self {
        let total_functions = records.iter().map(|r| r.functions.len()).sum();
        let total_code_lines = records.iter().map(FileRecord::code_lines).sum();
        let violations = records
            .iter()
            .flat_map(|r| r.violations.iter().cloned())
            .collect();

        let mut largest_files: Vec<FileRanking> = records
            .iter()
            .map(|r| FileRanking {
                path: r.path.clone(),
                code_lines: r.code_lines(),
            })
            .collect();
        largest_files.sort_by(|a, b| b.code_lines.cmp(&a.code_lines));
        largest_files.truncate(thresholds.top_n);

        let mut largest_functions: Vec<FunctionRanking> = records
            .iter()
            .flat_map(|r| {
                r.functions.iter().map(|f| FunctionRanking {
                    path: r.path.clone(),
                    name: f.name.clone(),
                    start_line: f.start_line,
                    code_lines: f.code_lines,
                })
            })
            .collect();
        largest_functions.sort_by(|a, b| b.code_lines.cmp(&a.code_lines));
        largest_functions.truncate(thresholds.top_n);

        Self {
            thresholds,
            total_files: records.len(),
            total_functions,
            total_code_lines,
            violations,
            warnings,
            largest_files,
            largest_functions,
        }
    }

    #[must_use]
    pub fn compliant(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn file_violations(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.kind == ViolationKind::FileTooLarge)
            .count()
    }

    #[must_use]
    pub fn function_violations(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.kind == ViolationKind::FunctionTooLarge)
            .count()
    }
}
