use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{MetricsGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Includes files whose extension has a registered language profile and
/// which match no exclude pattern.
#[derive(Debug)]
pub struct ProfileFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ProfileFilter {
    /// Create a filter from profile extensions and exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| MetricsGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| MetricsGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_known_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ProfileFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_known_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
