use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::classifier::{LineClassifier, LineStats};
use crate::error::Result;
use crate::extractor::FunctionExtractor;
use crate::language::{LanguageProfile, ProfileRegistry};
use crate::scanner::FileScanner;

use super::{FileRecord, ScanSummary, ScanWarning, Thresholds, Violation};

/// Orchestrates classification and extraction per file and reduces the
/// results into a [`ScanSummary`]. Files are independent units of work:
/// analysis runs in parallel, aggregation is a single-threaded reduce over
/// immutable per-file records.
pub struct MetricsEngine<'a> {
    registry: &'a ProfileRegistry,
    thresholds: Thresholds,
}

impl<'a> MetricsEngine<'a> {
    #[must_use]
    pub const fn new(registry: &'a ProfileRegistry, thresholds: Thresholds) -> Self {
        Self {
            registry,
            thresholds,
        }
    }

    /// Scan every root and analyze all discovered files.
    ///
    /// # Errors
    /// Returns a configuration error if a root does not exist. Unreadable
    /// files never abort the scan; they produce a zero-metric record and a
    /// warning.
    pub fn scan<S: FileScanner>(&self, scanner: &S, roots: &[PathBuf]) -> Result<ScanSummary> {
        let mut files: Vec<(PathBuf, PathBuf)> = Vec::new();
        for root in roots {
            for path in scanner.scan(root)? {
                let display = display_path(&path, root);
                files.push((path, display));
            }
        }

        // Sorted discovery order keeps reruns byte-identical regardless of
        // walk order, and deduplicates overlapping roots.
        files.sort();
        files.dedup_by(|a, b| a.0 == b.0);

        let outcomes: Vec<(FileRecord, Option<ScanWarning>)> = files
            .par_iter()
            .filter_map(|(path, display)| self.analyze_path(path, display))
            .collect();

        let mut records = Vec::with_capacity(outcomes.len());
        let mut warnings = Vec::new();
        for (record, warning) in outcomes {
            records.push(record);
            warnings.extend(warning);
        }

        Ok(ScanSummary::from_records(
            self.thresholds,
            &records,
            warnings,
        ))
    }

    fn analyze_path(
        &self,
        path: &Path,
        display: &Path,
    ) -> Option<(FileRecord, Option<ScanWarning>)> {
        let ext = path.extension()?.to_str()?;
        let profile = self.registry.get_by_extension(ext)?;

        match fs::read_to_string(path) {
            Ok(content) => Some((self.analyze_content(display, profile, &content), None)),
            Err(e) => Some((
                FileRecord::unreadable(display, &profile.name),
                Some(ScanWarning {
                    path: display.to_path_buf(),
                    message: format!("could not read file: {e}"),
                }),
            )),
        }
    }

    /// Classify, extract, and apply thresholds to one file's content.
    #[must_use]
    pub fn analyze_content(
        &self,
        path: &Path,
        profile: &LanguageProfile,
        content: &str,
    ) -> FileRecord {
        let lines: Vec<&str> = content.lines().collect();

        let labels = LineClassifier::new(&profile.comment_syntax)
            .classify_lines(lines.iter().copied());
        let stats = LineStats::from_labels(&labels);

        let functions = FunctionExtractor::new(profile).extract(&lines);

        let mut violations = Vec::new();
        if stats.code_lines() > self.thresholds.max_file_lines {
            violations.push(Violation::file_too_large(
                path,
                stats.code_lines(),
                self.thresholds.max_file_lines,
            ));
        }
        for function in &functions {
            if function.code_lines > self.thresholds.max_function_lines {
                violations.push(Violation::function_too_large(
                    path,
                    function,
                    self.thresholds.max_function_lines,
                ));
            }
        }

        FileRecord {
            path: path.to_path_buf(),
            language: profile.name.clone(),
            stats,
            functions,
            violations,
        }
    }
}

/// Path relative to its scan root where possible; a root that is itself a
/// file keeps its full path.
fn display_path(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path.to_path_buf(),
    }
}
