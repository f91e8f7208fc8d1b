use serde::Serialize;

/// A detected function or method and its measured size. Created once during
/// extraction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionRecord {
    /// Best-effort identifier captured from the signature line.
    pub name: String,
    /// 1-based line of the signature.
    pub start_line: usize,
    /// 1-based inclusive end of the body.
    pub end_line: usize,
    /// Code lines within the span, comments and blanks excluded.
    pub code_lines: usize,
}

impl FunctionRecord {
    /// Raw physical line span, always at least 1 and never less than
    /// `code_lines`.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
