use crate::classifier::{LineClassifier, LineLabel};
use crate::language::{BodyDelimiter, LanguageProfile};

use super::FunctionRecord;

/// Locates function signatures via the profile's pattern and delimits each
/// body by brace depth or by the arrow statement terminator. No parser:
/// every signature match starts an independent extraction, so nested
/// functions are counted in both the outer and the inner record.
pub struct FunctionExtractor<'a> {
    profile: &'a LanguageProfile,
}

impl<'a> FunctionExtractor<'a> {
    #[must_use]
    pub const fn new(profile: &'a LanguageProfile) -> Self {
        Self { profile }
    }

    /// Extract one record per signature match, in signature order.
    ///
    /// A body that never terminates (brace depth never returns to zero, or
    /// no statement terminator before end of file) drops the pending record
    /// and stops extraction for the file.
    #[must_use]
    pub fn extract(&self, lines: &[&str]) -> Vec<FunctionRecord> {
        let mut records = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let Some(caps) = self.profile.signature.captures(line) else {
                continue;
            };
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();

            let Some(end_idx) = self.body_end(lines, idx) else {
                break;
            };

            let code_lines = count_code_lines(self.profile, &lines[idx..=end_idx]);
            records.push(FunctionRecord {
                name,
                start_line: idx + 1,
                end_line: end_idx + 1,
                code_lines,
            });
        }

        records
    }

    fn body_end(&self, lines: &[&str], start: usize) -> Option<usize> {
        match &self.profile.body_delimiter {
            BodyDelimiter::Arrow { marker, terminator }
                if lines[start].contains(marker.as_str()) && !lines[start].contains('{') =>
            {
                arrow_end(lines, start, terminator)
            }
            _ => brace_end(lines, start),
        }
    }
}

/// Inclusive end of a brace-delimited body: net brace depth, seeded on the
/// signature line, returns to zero. Lines before the first `{` are consumed
/// into the body.
fn brace_end(lines: &[&str], start: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    let mut opened = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' => {
                    depth += 1;
                    opened = true;
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
        if opened && depth <= 0 {
            return Some(i);
        }
    }

    None
}

/// Inclusive end of an expression body: the first line, starting at the
/// signature itself, containing the statement terminator.
fn arrow_end(lines: &[&str], start: usize, terminator: &str) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, line)| line.contains(terminator))
        .map(|(i, _)| i)
}

/// Code lines within a span, re-applying the per-line classification rules
/// with fresh block-comment state at the span start.
fn count_code_lines(profile: &LanguageProfile, span: &[&str]) -> usize {
    LineClassifier::new(&profile.comment_syntax)
        .classify_lines(span.iter().copied())
        .iter()
        .filter(|label| matches!(label, LineLabel::Code))
        .count()
}
