use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_FILE_LINES: usize = 500;
pub const DEFAULT_MAX_FUNCTION_LINES: usize = 50;
pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Size thresholds applied by the engine.
    #[serde(default)]
    pub thresholds: ThresholdConfig,

    /// File discovery options.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Additional languages beyond the built-in profiles, keyed by name.
    /// Declaration order is preserved; later extensions override earlier ones.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Maximum code lines per file. Exclusive upper bound: a file at exactly
    /// the limit passes.
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,

    /// Maximum code lines per function. Exclusive upper bound.
    #[serde(default = "default_max_function_lines")]
    pub max_function_lines: usize,

    /// Entries in the largest-files/largest-functions rankings.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_file_lines: DEFAULT_MAX_FILE_LINES,
            max_function_lines: DEFAULT_MAX_FUNCTION_LINES,
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules during discovery (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Glob patterns excluded from scanning. Replaces the default set when
    /// present in the config file.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: default_exclude(),
        }
    }
}

/// A language declared in configuration. Mirrors the built-in profile shape:
/// comment markers plus a signature pattern whose first capture group is the
/// function name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    #[serde(default)]
    pub block_comments: Vec<(String, String)>,

    pub signature_pattern: String,

    #[serde(default)]
    pub body: BodyKind,

    /// Arrow marker for `body = "arrow"` languages.
    #[serde(default = "default_arrow_marker")]
    pub arrow_marker: String,

    /// Statement terminator ending an arrow body.
    #[serde(default = "default_terminator")]
    pub terminator: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    #[default]
    Brace,
    Arrow,
}

const fn default_true() -> bool {
    true
}

const fn default_max_file_lines() -> usize {
    DEFAULT_MAX_FILE_LINES
}

const fn default_max_function_lines() -> usize {
    DEFAULT_MAX_FUNCTION_LINES
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_arrow_marker() -> String {
    "=>".to_string()
}

fn default_terminator() -> String {
    ";".to_string()
}

/// Build output directories and generated/test file suffixes skipped by
/// default.
fn default_exclude() -> Vec<String> {
    [
        "**/build/**",
        "**/target/**",
        "**/.dart_tool/**",
        "**/generated/**",
        "**/ios/**",
        "**/android/**",
        "**/windows/**",
        "**/linux/**",
        "**/macos/**",
        "**/web/**",
        "**/*_test.dart",
        "**/*.g.dart",
        "**/*.freezed.dart",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
