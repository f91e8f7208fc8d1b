mod json;
mod text;

pub use json::JsonReporter;
pub use text::{ColorMode, TextReporter};

use crate::engine::ScanSummary;
use crate::error::Result;

/// Renders a scan summary into its final form. Implementations are pure
/// functions of the summary: no I/O, no state beyond construction-time
/// options.
pub trait Reporter {
    /// Render the summary into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn render(&self, summary: &ScanSummary) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
