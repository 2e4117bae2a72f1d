//! Editor host backed by a file on disk
//!
//! Changes are detected by polling: `poll` re-reads the file and notifies
//! listeners only when the content digest differs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use hush_core::{
    ChangeListener, DecorationSet, EditorHost, HighlightSpan, ListenerRegistry, SubscriptionId,
};
use tracing::debug;

/// Decorations echoed to stdout whenever they are replaced
pub struct TerminalDecorations {
    name: String,
    spans: Vec<HighlightSpan>,
    echo: bool,
}

impl TerminalDecorations {
    pub fn new(name: impl Into<String>, echo: bool) -> Self {
        Self {
            name: name.into(),
            spans: Vec::new(),
            echo,
        }
    }

    pub fn spans(&self) -> &[HighlightSpan] {
        &self.spans
    }
}

impl DecorationSet for TerminalDecorations {
    fn set(&mut self, spans: Vec<HighlightSpan>) {
        self.spans = spans;
        if self.echo {
            println!("-- {}: {} span(s)", self.name, self.spans.len());
            for span in &self.spans {
                println!("   {}", span);
            }
        }
    }

    fn clear(&mut self) {
        self.spans.clear();
        if self.echo {
            println!("-- {}: cleared", self.name);
        }
    }
}

pub struct FileHost {
    path: PathBuf,
    text: String,
    digest: blake3::Hash,
    listeners: ListenerRegistry,
    decorations: TerminalDecorations,
}

impl FileHost {
    pub async fn open(path: &Path, echo: bool) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let digest = blake3::hash(text.as_bytes());

        Ok(Self {
            path: path.to_path_buf(),
            text,
            digest,
            listeners: ListenerRegistry::new(),
            decorations: TerminalDecorations::new(path.display().to_string(), echo),
        })
    }

    /// Re-read the file; returns true when its content changed
    pub async fn poll(&mut self) -> Result<bool> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let digest = blake3::hash(text.as_bytes());
        if digest == self.digest {
            return Ok(false);
        }

        debug!("{} changed ({})", self.path.display(), digest.to_hex());
        self.text = text;
        self.digest = digest;
        self.listeners.notify(&self.text, &mut self.decorations);
        Ok(true)
    }

    pub fn displayed(&self) -> &[HighlightSpan] {
        self.decorations.spans()
    }
}

impl EditorHost for FileHost {
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
