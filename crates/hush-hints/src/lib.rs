//! Inlay type hints for JSON values
//!
//! Each line gets at most one `:string`, `:number` and `:boolean` hint, placed
//! at the first character of the matching value.

use hush_core::{InlayHint, Position};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    static ref VALUE_KINDS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r#":\s*"([^"]+)""#).unwrap(), ":string"),
        (Regex::new(r":\s*(\d+)").unwrap(), ":number"),
        (Regex::new(r":\s*(true|false)").unwrap(), ":boolean"),
    ];
}

/// Hints for lines `start_line..=end_line` (1-based), clamped to the document
pub fn inlay_hints(text: &str, start_line: usize, end_line: usize) -> Vec<InlayHint> {
    let start_line = start_line.max(1);
    let mut hints = Vec::new();

    for (index, line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        if line_number < start_line {
            continue;
        }
        if line_number > end_line {
            break;
        }
        hints.extend(line_hints(line_number, line));
    }

    debug!(
        "Computed {} inlay hints for lines {}..={}",
        hints.len(),
        start_line,
        end_line
    );
    hints
}

/// Hints for the whole document
pub fn document_hints(text: &str) -> Vec<InlayHint> {
    inlay_hints(text, 1, usize::MAX)
}

fn line_hints(line_number: usize, line: &str) -> impl Iterator<Item = InlayHint> + '_ {
    VALUE_KINDS.iter().filter_map(move |(pattern, label)| {
        let value = pattern.captures(line)?.get(1)?;
        let column = line[..value.start()].chars().count() + 1;
        Some(InlayHint::type_hint(Position::new(line_number, column), *label))
    })
}
