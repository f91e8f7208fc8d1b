use crate::language::CommentSyntax;

use super::LineLabel;

/// Stateful scanner labeling each physical line of a file as blank, comment,
/// or code. Block-comment state carries across lines; each line is visited
/// exactly once.
///
/// Trailing comments after code are not detected (the line counts as code),
/// and markers inside string literals are taken at face value. Both are
/// deliberate approximations.
pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self { syntax }
    }

    /// Label every physical line of `source` in a single pass.
    #[must_use]
    pub fn classify(&self, source: &str) -> Vec<LineLabel> {
        self.classify_lines(source.lines())
    }

    /// Label an explicit line sequence. Block-comment state is initialized
    /// fresh, so a span starting inside an enclosing block comment is treated
    /// as if it did not.
    pub fn classify_lines<'s, I>(&self, lines: I) -> Vec<LineLabel>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut labels = Vec::new();
        let mut block_close: Option<&str> = None;

        for line in lines {
            labels.push(self.label_line(line, &mut block_close));
        }

        labels
    }

    fn label_line(&self, line: &str, block_close: &mut Option<&'a str>) -> LineLabel {
        let trimmed = line.trim();

        // Blank lines never alter block-comment state.
        if trimmed.is_empty() {
            return LineLabel::Blank;
        }

        // Inside a block comment the whole line is a comment, even when the
        // close marker is followed by more text on the same line.
        if let Some(close) = *block_close {
            if line.contains(close) {
                *block_close = None;
            }
            return LineLabel::Comment;
        }

        // Block-open takes precedence over a line-comment marker appearing
        // earlier on the same line.
        if let Some((pos, open, close)) = self.find_block_open(line) {
            let after_open = &line[pos + open.len()..];
            if !after_open.contains(close) {
                *block_close = Some(close);
            }
            return LineLabel::Comment;
        }

        if self
            .syntax
            .line_markers
            .iter()
            .any(|marker| trimmed.starts_with(marker.as_str()))
        {
            return LineLabel::Comment;
        }

        LineLabel::Code
    }

    /// Earliest block-open marker on the line, with its close marker.
    fn find_block_open(&self, line: &str) -> Option<(usize, &'a str, &'a str)> {
        self.syntax
            .block_markers
            .iter()
            .filter_map(|(open, close)| {
                line.find(open.as_str())
                    .map(|pos| (pos, open.as_str(), close.as_str()))
            })
            .min_by_key(|&(pos, _, _)| pos)
    }
}
