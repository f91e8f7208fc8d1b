mod filter;

pub use filter::{FileFilter, ProfileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{MetricsGuardError, Result};

/// Trait for discovering candidate files under a root path.
pub trait FileScanner {
    /// Scan a root and return all matching file paths.
    ///
    /// # Errors
    /// Returns a configuration error if the root does not exist.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_walkdir(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(MetricsGuardError::Config(format!(
                "scan root does not exist: {}",
                root.display()
            )));
        }

        Ok(if self.use_gitignore {
            self.scan_gitignore(root)
        } else {
            self.scan_walkdir(root)
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
