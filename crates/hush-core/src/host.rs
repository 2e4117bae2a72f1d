//! Host interface
//!
//! The editor host owns the document text, fires change notifications and
//! displays decorations. Highlighting only talks to it through these traits.

use crate::HighlightSpan;

/// Called after every edit with the new text and the host's decoration set
pub type ChangeListener = Box<dyn FnMut(&str, &mut dyn DecorationSet) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Displayed decorations of a document
pub trait DecorationSet {
    /// Replace every displayed span with `spans`
    fn set(&mut self, spans: Vec<HighlightSpan>);

    /// Remove every displayed span
    fn clear(&mut self);
}

/// Editor or document host the highlighter attaches to
pub trait EditorHost {
    /// Full current document text
    fn text(&self) -> String;

    /// Register a content-change listener
    fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId;

    /// Remove a listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    fn decorations(&mut self) -> &mut dyn DecorationSet;
}

/// Listener bookkeeping for host implementations
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, ChangeListener)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: ChangeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Returns false when `id` was not registered
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invoke every listener in subscription order
    pub fn notify(&mut self, text: &str, decorations: &mut dyn DecorationSet) {
        for (_, listener) in &mut self.listeners {
            listener(text, &mut *decorations);
        }
    }
}

/// Decoration set kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDecorations {
    spans: Vec<HighlightSpan>,
    generation: u64,
}

impl MemoryDecorations {
    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }

    /// Number of times the set was replaced or cleared
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl DecorationSet for MemoryDecorations {
    fn set(&mut self, spans: Vec<HighlightSpan>) {
        self.spans = spans;
        self.generation += 1;
    }

    fn clear(&mut self) {
        self.spans.clear();
        self.generation += 1;
    }
}

/// In-memory document host
#[derive(Default)]
pub struct MemoryHost {
    text: String,
    listeners: ListenerRegistry,
    decorations: MemoryDecorations,
}

impl MemoryHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Replace the document text and notify listeners
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.listeners.notify(&self.text, &mut self.decorations);
    }

    pub fn displayed(&self) -> &MemoryDecorations {
        &self.decorations
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl EditorHost for MemoryHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn subscribe(&mut self, listener: ChangeListener) -> SubscriptionId {
        self.listeners.add(listener)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.remove(id);
    }

    fn decorations(&mut self) -> &mut dyn DecorationSet {
        &mut self.decorations
    }
}
