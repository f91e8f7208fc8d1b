use serde::Serialize;

use crate::engine::{
    FileRanking, FunctionRanking, ScanSummary, ScanWarning, Thresholds, Violation,
};
use crate::error::Result;

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    compliant: bool,
    thresholds: &'a Thresholds,
    summary: SummaryCounts,
    violations: &'a [Violation],
    warnings: &'a [ScanWarning],
    largest_files: &'a [FileRanking],
    largest_functions: &'a [FunctionRanking],
}

#[derive(Serialize)]
struct SummaryCounts {
    total_files: usize,
    total_functions: usize,
    total_code_lines: usize,
    total_violations: usize,
    file_violations: usize,
    function_violations: usize,
}

impl Reporter for JsonReporter {
    fn render(&self, summary: &ScanSummary) -> Result<String> {
        let report = JsonReport {
            compliant: summary.compliant(),
            thresholds: &summary.thresholds,
            summary: SummaryCounts {
                total_files: summary.total_files,
                total_functions: summary.total_functions,
                total_code_lines: summary.total_code_lines,
                total_violations: summary.violations.len(),
                file_violations: summary.file_violations(),
                function_violations: summary.function_violations(),
            },
            violations: &summary.violations,
            warnings: &summary.warnings,
            largest_files: &summary.largest_files,
            largest_functions: &summary.largest_functions,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
