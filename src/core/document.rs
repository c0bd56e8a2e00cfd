/// A unit of source text split into lines, with basic line-class counts.
///
/// Lines are produced by splitting on `'\n'`, so text ending in a newline
/// carries a final empty line. `lines_of_code` counts that final line too,
/// which is what the downstream size thresholds are calibrated against.
#[derive(Debug, Clone)]
pub struct SourceDocument<'a> {
    content: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> SourceDocument<'a> {
    pub fn new(content: &'a str) -> Self {
        let lines = content.split('\n').collect();
        Self { content, lines }
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn lines_of_code(&self) -> usize {
        self.lines.len()
    }

    /// Lines whose trimmed form starts with `#`.
    pub fn comment_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.trim().starts_with('#'))
            .count()
    }

    /// Lines that are empty or whitespace-only.
    pub fn blank_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.trim().is_empty())
            .count()
    }

    /// Lines that are neither blank nor comments.
    pub fn code_lines(&self) -> usize {
        self.lines_of_code() - self.comment_lines() - self.blank_lines()
    }
}
