mod extract;
mod record;

pub use extract::FunctionExtractor;
pub use record::FunctionRecord;

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
