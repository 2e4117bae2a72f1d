//! Core domain models for hush
//!
//! This crate contains:
//! - Span, hover and inlay hint models shared by every provider
//! - The host interface the highlighting session talks to
//! - The workspace error type

pub mod error;
pub mod hint;
pub mod host;
pub mod hover;
pub mod span;

pub use error::{Error, Result};
pub use hint::{InlayHint, InlayHintKind};
pub use host::{
    ChangeListener, DecorationSet, EditorHost, ListenerRegistry, MemoryDecorations, MemoryHost,
    SubscriptionId,
};
pub use hover::Hover;
pub use span::{HighlightSpan, Position, Range};
