use std::fs;
use std::path::Path;

use crate::error::{MetricsGuardError, Result};

use super::Config;

/// Config file discovered in the working directory when `--config` is not
/// given.
pub const CONFIG_FILE_NAME: &str = ".metrics-guard.toml";

pub trait ConfigLoader {
    /// Load the configuration from the default location, falling back to
    /// defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load the configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// A commented configuration file with the default values, written by
    /// `metrics-guard init`.
    #[must_use]
    pub fn template() -> String {
        let config = Config::default();
        let exclude = config
            .scanner
            .exclude
            .iter()
            .map(|pattern| format!("  \"{pattern}\","))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# metrics-guard configuration

[thresholds]
# Maximum code lines per file (comments and blank lines excluded).
max_file_lines = {max_file}
# Maximum code lines per function.
max_function_lines = {max_function}
# Entries in the largest-files/largest-functions rankings.
top_n = {top_n}

[scanner]
# Respect .gitignore rules during file discovery.
gitignore = true
# Glob patterns excluded from scanning.
exclude = [
{exclude}
]

# Additional languages can be declared by name:
#
# [languages.kotlin]
# extensions = ["kt"]
# line_comments = ["//"]
# block_comments = [["/*", "*/"]]
# signature_pattern = '^\s*(?:fun)\s+([A-Za-z_]\w*)'
# body = "brace"
"#,
            max_file = config.thresholds.max_file_lines,
            max_function = config.thresholds.max_function_lines,
            top_n = config.thresholds.top_n,
        )
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            self.load_from_path(path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| MetricsGuardError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
