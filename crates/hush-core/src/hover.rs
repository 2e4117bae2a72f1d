use serde::{Deserialize, Serialize};

use crate::Range;

/// Hover card anchored to a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub range: Range,
    /// Markdown blocks, rendered top to bottom
    pub contents: Vec<String>,
}
