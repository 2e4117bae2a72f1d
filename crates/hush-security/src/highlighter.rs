//! Highlight engine: document text to labeled spans
//!
//! Pure and synchronous. The caller replaces its whole decoration set with
//! the returned spans; nothing is carried between calls.

use hush_core::HighlightSpan;
use tracing::{debug, trace};

use crate::patterns::{PatternRule, PatternTable};

/// Highlight `text` with the built-in pattern table
pub fn compute_highlights(text: &str) -> Vec<HighlightSpan> {
    PatternTable::builtin().compute_highlights(text)
}

impl PatternTable {
    /// Spans for every rule match, ordered by line and then by rule
    pub fn compute_highlights(&self, text: &str) -> Vec<HighlightSpan> {
        let mut spans = Vec::new();
        if text.is_empty() {
            return spans;
        }

        let mut lines = 0;
        for (index, line) in text.split('\n').enumerate() {
            lines += 1;
            for rule in self.rules() {
                if let Some(span) = rule.highlight_line(index + 1, line) {
                    spans.push(span);
                }
            }
        }

        debug!("Computed {} highlight spans over {} lines", spans.len(), lines);
        spans
    }
}

impl PatternRule {
    /// First match of this rule on one line, if its value can be located
    fn highlight_line(&self, line_number: usize, line: &str) -> Option<HighlightSpan> {
        let captures = self.pattern().captures(line)?;
        let matched = captures.get(0)?;
        let matched_text = matched.as_str();

        // Last capturing group is the value; group-less patterns flag the whole match
        let matched_value = if captures.len() > 1 {
            captures.get(captures.len() - 1).map(|m| m.as_str())
        } else {
            Some(matched_text)
        };

        let Some(matched_value) = matched_value.filter(|v| !v.is_empty()) else {
            trace!(
                "Rule '{}' matched line {} without a value, skipping",
                self.label(),
                line_number
            );
            return None;
        };

        let Some(value_offset) = matched_text.find(matched_value) else {
            trace!(
                "Value of rule '{}' not found in its match on line {}, skipping",
                self.label(),
                line_number
            );
            return None;
        };

        let value_start = matched.start() + value_offset;
        let start_column = line[..value_start].chars().count() + 1;
        let end_column = start_column + matched_value.chars().count();

        Some(HighlightSpan::new(
            line_number,
            start_column,
            end_column,
            self.label(),
        ))
    }
}
