use serde::Serialize;

/// Classification of one physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineLabel {
    Blank,
    Comment,
    Code,
}

/// Per-kind line counts for a file or a line span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub fn from_labels(labels: &[LineLabel]) -> Self {
        let mut stats = Self::new();
        for label in labels {
            stats.total += 1;
            match label {
                LineLabel::Blank => stats.blank += 1,
                LineLabel::Comment => stats.comment += 1,
                LineLabel::Code => stats.code += 1,
            }
        }
        stats
    }

    /// The size metric: lines that are neither blank nor comment.
    #[must_use]
    pub const fn code_lines(&self) -> usize {
        self.code
    }
}
