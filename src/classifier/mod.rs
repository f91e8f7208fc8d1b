mod classify;
mod label;

pub use classify::LineClassifier;
pub use label::{LineLabel, LineStats};

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
