//! Sensitive data detection for JSON-like documents
//!
//! - `patterns`: the ordered rule table
//! - `highlighter`: text to highlight spans
//! - `hover`: sensitive key detection under the cursor

pub mod highlighter;
pub mod hover;
pub mod patterns;

pub use highlighter::compute_highlights;
pub use hover::{SensitiveHover, Word, word_at};
pub use patterns::{PatternRule, PatternTable, PatternTableBuilder};
