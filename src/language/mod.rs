mod profile;

pub use profile::{BodyDelimiter, CommentSyntax, LanguageProfile, ProfileRegistry};

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
