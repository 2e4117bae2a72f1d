//! Hover detection of sensitive field names

use hush_core::{Hover, Position, Range};
use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_KEYWORDS: &[&str] = &["password", "api", "key", "secret", "token"];

lazy_static! {
    // JSON words only break on structural characters and whitespace
    static ref WORD: Regex = Regex::new(r#"[^\[\{\]\}:",\s]+"#).unwrap();
}

/// A word on a line, with 1-based columns, end exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start_column: usize,
    pub end_column: usize,
}

/// Word touching `column`, including the column right after its last char
pub fn word_at(line: &str, column: usize) -> Option<Word<'_>> {
    WORD.find_iter(line).find_map(|m| {
        let start_column = line[..m.start()].chars().count() + 1;
        let end_column = start_column + m.as_str().chars().count();
        (start_column <= column && column <= end_column).then_some(Word {
            text: m.as_str(),
            start_column,
            end_column,
        })
    })
}

/// Hover provider flagging words that look like sensitive key names
#[derive(Debug, Clone)]
pub struct SensitiveHover {
    keywords: Vec<String>,
}

impl SensitiveHover {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_sensitive(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.keywords.iter().any(|k| word.contains(k.as_str()))
    }

    /// Hover for the word at `position` of a whole document
    pub fn hover(&self, text: &str, position: Position) -> Option<Hover> {
        let line = text.split('\n').nth(position.line.checked_sub(1)?)?;
        self.hover_on_line(line, position)
    }

    /// Hover for the word at `position`, given the text of that line
    pub fn hover_on_line(&self, line: &str, position: Position) -> Option<Hover> {
        let word = word_at(line, position.column)?;
        if !self.is_sensitive(word.text) {
            return None;
        }

        Some(Hover {
            range: Range::on_line(position.line, word.start_column, word.end_column),
            contents: vec![
                "🔐 **Sensitive field detected**".to_string(),
                format!(
                    "Detected sensitive field: `{}`\n\nSuggestion: manage it with environment variables or a config file",
                    word.text
                ),
            ],
        })
    }
}

impl Default for SensitiveHover {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_at() {
        let line = r#"    "apiKey": "sk-1234567890","#;
        let word = word_at(line, 7).unwrap();
        assert_eq!(word.text, "apiKey");
        assert_eq!((word.start_column, word.end_column), (6, 12));

        // Column right after the word still hits it
        assert_eq!(word_at(line, 12).unwrap().text, "apiKey");
        assert!(word_at(line, 1).is_none());
    }

    #[test]
    fn test_json_words_keep_dashes_and_dots() {
        let line = r#"  "db.password": "x", "api-key": "y""#;
        let word = word_at(line, 5).unwrap();
        assert_eq!(word.text, "db.password");
        assert_eq!((word.start_column, word.end_column), (4, 15));

        let hover = SensitiveHover::default();
        let result = hover.hover_on_line(line, Position::new(1, 26)).unwrap();
        assert_eq!(result.range, Range::on_line(1, 24, 31));
        assert!(result.contents[1].contains("`api-key`"));
    }

    #[test]
    fn test_hover_on_sensitive_key() {
        let hover = SensitiveHover::default();
        let text = "{\n  \"secretToken\": \"abc123xyz\"\n}";

        let result = hover.hover(text, Position::new(2, 6)).unwrap();
        assert_eq!(result.range, Range::on_line(2, 4, 15));
        assert_eq!(result.contents.len(), 2);
        assert!(result.contents[1].contains("`secretToken`"));
    }

    #[test]
    fn test_hover_ignores_plain_words() {
        let hover = SensitiveHover::default();
        let text = "{\n  \"host\": \"localhost\"\n}";
        assert!(hover.hover(text, Position::new(2, 5)).is_none());
    }

    #[test]
    fn test_hover_out_of_range() {
        let hover = SensitiveHover::default();
        assert!(hover.hover("{}", Position::new(0, 1)).is_none());
        assert!(hover.hover("{}", Position::new(5, 1)).is_none());
    }

    #[test]
    fn test_custom_keywords_are_case_insensitive() {
        let hover = SensitiveHover::new(["Credential"]);
        assert!(hover.is_sensitive("awsCREDENTIALS"));
        assert!(!hover.is_sensitive("password"));
    }
}
