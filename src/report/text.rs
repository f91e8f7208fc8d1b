use std::fmt::Write;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::engine::{ScanSummary, Violation, ViolationKind};
use crate::error::Result;

use super::Reporter;

const BANNER: &str =
    "================================================================================";
const RULE: &str =
    "--------------------------------------------------------------------------------";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextReporter {
    use_colors: bool,
}

impl TextReporter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn mark(&self, over_limit: bool) -> String {
        if over_limit {
            self.colorize("✗", ansi::RED)
        } else {
            self.colorize("✓", ansi::GREEN)
        }
    }

    fn render_header(summary: &ScanSummary, out: &mut String) {
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "CODE METRICS COMPLIANCE REPORT");
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Thresholds:");
        let _ = writeln!(
            out,
            "  - Max file size: {} code lines",
            summary.thresholds.max_file_lines
        );
        let _ = writeln!(
            out,
            "  - Max function size: {} code lines",
            summary.thresholds.max_function_lines
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Summary:");
        let _ = writeln!(out, "  - Files analyzed: {}", summary.total_files);
        let _ = writeln!(out, "  - Functions analyzed: {}", summary.total_functions);
        let _ = writeln!(out, "  - Total code lines: {}", summary.total_code_lines);
        let _ = writeln!(
            out,
            "  - Violations: {} (files: {}, functions: {})",
            summary.violations.len(),
            summary.file_violations(),
            summary.function_violations()
        );
        let _ = writeln!(out);
    }

    fn render_violations(&self, summary: &ScanSummary, out: &mut String) {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "VIOLATIONS");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out);

        if summary.compliant() {
            let mark = self.colorize("✓", ansi::GREEN);
            let _ = writeln!(out, "{mark} All files comply with the configured limits.");
            let _ = writeln!(out);
            return;
        }

        for (path, violations) in group_by_file(&summary.violations) {
            let _ = writeln!(out, "{}", path.display());
            for violation in violations {
                self.render_violation(violation, out);
            }
            let _ = writeln!(out);
        }
    }

    fn render_violation(&self, violation: &Violation, out: &mut String) {
        let mark = self.colorize("✗", ansi::RED);
        match violation.kind {
            ViolationKind::FileTooLarge => {
                let _ = writeln!(
                    out,
                    "  {mark} file has {} code lines (limit: {})",
                    violation.measured, violation.limit
                );
            }
            ViolationKind::FunctionTooLarge => {
                let name = violation.function.as_deref().unwrap_or("<unknown>");
                let line = violation.line.unwrap_or(0);
                let _ = writeln!(
                    out,
                    "  {mark} function '{name}' (line {line}) has {} code lines (limit: {})",
                    violation.measured, violation.limit
                );
            }
        }
    }

    fn render_rankings(&self, summary: &ScanSummary, out: &mut String) {
        let top_n = summary.thresholds.top_n;

        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "TOP {top_n} LARGEST FILES (by code lines)");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out);
        for (i, entry) in summary.largest_files.iter().enumerate() {
            let mark = self.mark(entry.code_lines > summary.thresholds.max_file_lines);
            let _ = writeln!(
                out,
                "{:2}. {mark} {:<60} {:>5} lines",
                i + 1,
                entry.path.display().to_string(),
                entry.code_lines
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "TOP {top_n} LARGEST FUNCTIONS (by code lines)");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out);
        for (i, entry) in summary.largest_functions.iter().enumerate() {
            let mark = self.mark(entry.code_lines > summary.thresholds.max_function_lines);
            let _ = writeln!(
                out,
                "{:2}. {mark} {:<30} {:>5} lines ({}:{})",
                i + 1,
                entry.name,
                entry.code_lines,
                entry.path.display(),
                entry.start_line
            );
        }
        let _ = writeln!(out);
    }

    fn render_warnings(&self, summary: &ScanSummary, out: &mut String) {
        if summary.warnings.is_empty() {
            return;
        }

        let _ = writeln!(out, "Warnings:");
        for warning in &summary.warnings {
            let mark = self.colorize("!", ansi::YELLOW);
            let _ = writeln!(
                out,
                "  {mark} {}: {}",
                warning.path.display(),
                warning.message
            );
        }
        let _ = writeln!(out);
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl Reporter for TextReporter {
    fn render(&self, summary: &ScanSummary) -> Result<String> {
        let mut out = String::new();

        Self::render_header(summary, &mut out);
        self.render_violations(summary, &mut out);
        self.render_rankings(summary, &mut out);
        self.render_warnings(summary, &mut out);
        let _ = writeln!(out, "{BANNER}");

        Ok(out)
    }
}

/// Violations grouped per file, files ordered by descending violation count.
/// Ties keep discovery order.
fn group_by_file(violations: &[Violation]) -> Vec<(&PathBuf, Vec<&Violation>)> {
    let mut groups: IndexMap<&PathBuf, Vec<&Violation>> = IndexMap::new();
    for violation in violations {
        groups.entry(&violation.path).or_default().push(violation);
    }

    let mut grouped: Vec<_> = groups.into_iter().collect();
    grouped.sort_by(|a, b| b.1.len().cmp(&a.1.len()));
    grouped
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
