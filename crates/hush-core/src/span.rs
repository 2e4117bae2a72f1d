//! Positions, ranges and highlight spans
//!
//! Lines and columns are 1-based. Columns count chars, so column 1 is the
//! first character of a line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cursor position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range between two positions, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl Range {
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Range covering `[start_column, end_column)` on one line
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(line, start_column, line, end_column)
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    pub fn contains(&self, position: Position) -> bool {
        position >= self.start() && position < self.end()
    }
}

/// A labeled column range flagged for highlighting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub line: usize,
    pub start_column: usize,
    pub end_column: usize,
    pub label: String,
}

impl HighlightSpan {
    pub fn new(line: usize, start_column: usize, end_column: usize, label: impl Into<String>) -> Self {
        Self {
            line,
            start_column,
            end_column,
            label: label.into(),
        }
    }

    pub fn range(&self) -> Range {
        Range::on_line(self.line, self.start_column, self.end_column)
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end_column.saturating_sub(self.start_column)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markdown shown on the hover surface of the decoration
    pub fn hover_message(&self) -> String {
        format!(
            "🚨 **Sensitive data detected**\n\nDetected: {}\n\n⚠️ Do not commit sensitive data to the repository!",
            self.label
        )
    }
}

impl fmt::Display for HighlightSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} {}",
            self.line, self.start_column, self.end_column, self.label
        )
    }
}
