use serde::{Deserialize, Serialize};

use crate::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlayHintKind {
    Type,
    Parameter,
}

/// Inline annotation rendered before the character at `position`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlayHint {
    pub position: Position,
    pub label: String,
    pub kind: InlayHintKind,
    pub padding_left: bool,
    pub padding_right: bool,
}

impl InlayHint {
    /// Type hint padded on the left only
    pub fn type_hint(position: Position, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            kind: InlayHintKind::Type,
            padding_left: true,
            padding_right: false,
        }
    }
}
