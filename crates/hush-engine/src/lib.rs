//! Host wiring for hush
//!
//! - `session`: keeps a host's decorations in sync with its text
//! - `diff`: option merging and model lifecycle for a side-by-side diff view

pub mod diff;
pub mod session;

pub use diff::{DiffEditorOptions, DiffHost, DiffOptions, DiffView, EditorId, ModelId};
pub use session::HighlightSession;
