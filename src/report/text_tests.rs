use std::path::{Path, PathBuf};

use super::*;
use crate::engine::{
    FileRanking, FunctionRanking, ScanSummary, ScanWarning, Thresholds, Violation,
};
use crate::extractor::FunctionRecord;

fn thresholds() -> Thresholds {
    Thresholds {
        max_file_lines: 500,
        max_function_lines: 50,
        top_n: 10,
    }
}

fn compliant_summary() -> ScanSummary {
    ScanSummary {
        thresholds: thresholds(),
        total_files: 2,
        total_functions: 5,
        total_code_lines: 123,
        violations: Vec::new(),
        warnings: Vec::new(),
        largest_files: vec![FileRanking {
            path: PathBuf::from("src/ok.rs"),
            code_lines: 100,
        }],
        largest_functions: vec![FunctionRanking {
            path: PathBuf::from("src/ok.rs"),
            name: "run".to_string(),
            start_line: 3,
            code_lines: 20,
        }],
    }
}

fn violating_summary() -> ScanSummary {
    let render = FunctionRecord {
        name: "render".to_string(),
        start_line: 40,
        end_line: 130,
        code_lines: 73,
    };

    ScanSummary {
        thresholds: thresholds(),
        total_files: 2,
        total_functions: 4,
        total_code_lines: 700,
        violations: vec![
            Violation::function_too_large(Path::new("src/mid.rs"), &render, 50),
            Violation::file_too_large(Path::new("src/big.rs"), 612, 500),
            Violation::function_too_large(Path::new("src/big.rs"), &render, 50),
        ],
        warnings: vec![ScanWarning {
            path: PathBuf::from("src/locked.rs"),
            message: "could not read file: permission denied".to_string(),
        }],
        largest_files: vec![
            FileRanking {
                path: PathBuf::from("src/big.rs"),
                code_lines: 612,
            },
            FileRanking {
                path: PathBuf::from("src/mid.rs"),
                code_lines: 88,
            },
        ],
        largest_functions: vec![FunctionRanking {
            path: PathBuf::from("src/big.rs"),
            name: "render".to_string(),
            start_line: 40,
            code_lines: 73,
        }],
    }
}

fn render_plain(summary: &ScanSummary) -> String {
    TextReporter::new(ColorMode::Never).render(summary).unwrap()
}

#[test]
fn header_restates_thresholds() {
    let output = render_plain(&compliant_summary());

    assert!(output.contains("CODE METRICS COMPLIANCE REPORT"));
    assert!(output.contains("Max file size: 500 code lines"));
    assert!(output.contains("Max function size: 50 code lines"));
}

#[test]
fn summary_block_lists_counts() {
    let output = render_plain(&violating_summary());

    assert!(output.contains("Files analyzed: 2"));
    assert!(output.contains("Functions analyzed: 4"));
    assert!(output.contains("Total code lines: 700"));
    assert!(output.contains("Violations: 3 (files: 1, functions: 2)"));
}

#[test]
fn compliant_summary_reports_no_violations() {
    let output = render_plain(&compliant_summary());

    assert!(output.contains("All files comply with the configured limits."));
    assert!(!output.contains('✗'));
}

#[test]
fn violations_grouped_by_file_with_details() {
    let output = render_plain(&violating_summary());

    assert!(output.contains("file has 612 code lines (limit: 500)"));
    assert!(output.contains("function 'render' (line 40) has 73 code lines (limit: 50)"));
}

#[test]
fn files_ordered_by_descending_violation_count() {
    // big.rs carries two violations, mid.rs one; big.rs is listed first even
    // though mid.rs was discovered first.
    let output = render_plain(&violating_summary());

    let violations_at = output.find("VIOLATIONS").unwrap();
    let big_at = output[violations_at..].find("src/big.rs").unwrap();
    let mid_at = output[violations_at..].find("src/mid.rs").unwrap();
    assert!(big_at < mid_at);
}

#[test]
fn rankings_marked_pass_fail() {
    let output = render_plain(&violating_summary());

    assert!(output.contains("TOP 10 LARGEST FILES (by code lines)"));
    assert!(output.contains("TOP 10 LARGEST FUNCTIONS (by code lines)"));

    let big_line = output
        .lines()
        .find(|l| l.contains("src/big.rs") && l.contains("612"))
        .unwrap();
    assert!(big_line.contains('✗'));

    let mid_line = output
        .lines()
        .find(|l| l.contains("src/mid.rs") && l.contains("88"))
        .unwrap();
    assert!(mid_line.contains('✓'));

    assert!(output.contains("(src/big.rs:40)"));
}

#[test]
fn warnings_listed_when_present() {
    let output = render_plain(&violating_summary());
    assert!(output.contains("src/locked.rs: could not read file: permission denied"));

    let clean = render_plain(&compliant_summary());
    assert!(!clean.contains("Warnings:"));
}

#[test]
fn never_mode_emits_no_ansi_codes() {
    let output = render_plain(&violating_summary());
    assert!(!output.contains("\x1b["));
}

#[test]
fn always_mode_colors_violation_marks() {
    let output = TextReporter::new(ColorMode::Always)
        .render(&violating_summary())
        .unwrap();
    assert!(output.contains("\x1b[31m✗\x1b[0m"));
}
