use std::sync::Arc;

use hush_core::{DecorationSet, EditorHost, SubscriptionId};
use hush_security::PatternTable;
use tracing::debug;

/// Live sensitive-data highlighting attached to one host
///
/// Highlights are computed once on attach and again after every edit. Each
/// pass replaces the host's whole decoration set.
pub struct HighlightSession {
    table: Arc<PatternTable>,
    subscription: SubscriptionId,
}

impl HighlightSession {
    pub fn attach<H>(host: &mut H, table: Arc<PatternTable>) -> Self
    where
        H: EditorHost + ?Sized,
    {
        let listener_table = Arc::clone(&table);
        let subscription = host.subscribe(Box::new(
            move |text: &str, decorations: &mut dyn DecorationSet| {
                decorations.set(listener_table.compute_highlights(text));
            },
        ));

        let session = Self {
            table,
            subscription,
        };
        session.refresh(host);

        debug!("Attached highlight session {:?}", session.subscription);
        session
    }

    /// Recompute from the host's current text
    pub fn refresh<H>(&self, host: &mut H)
    where
        H: EditorHost + ?Sized,
    {
        let spans = self.table.compute_highlights(&host.text());
        host.decorations().set(spans);
    }

    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    /// Clear the decorations and stop listening for edits
    pub fn dispose<H>(self, host: &mut H)
    where
        H: EditorHost + ?Sized,
    {
        host.decorations().clear();
        host.unsubscribe(self.subscription);
        debug!("Disposed highlight session {:?}", self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_core::{HighlightSpan, MemoryHost};

    fn builtin() -> Arc<PatternTable> {
        Arc::new(PatternTable::default())
    }

    #[test]
    fn test_attach_highlights_immediately() {
        let mut host = MemoryHost::new(r#"{ "password": "admin123" }"#);
        let _session = HighlightSession::attach(&mut host, builtin());

        assert_eq!(
            host.displayed().spans(),
            &[HighlightSpan::new(1, 16, 24, "Password")]
        );
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_edit_replaces_all_spans() {
        let mut host = MemoryHost::new("{\n  \"pwd\": \"a\",\n  \"token\": \"b\"\n}");
        let _session = HighlightSession::attach(&mut host, builtin());
        assert_eq!(host.displayed().spans().len(), 2);

        host.set_text("{\n  \"pwd\": \"a\"\n}");
        assert_eq!(
            host.displayed().spans(),
            &[HighlightSpan::new(2, 11, 12, "Password")]
        );

        host.set_text("{\n  \"name\": \"a\"\n}");
        assert!(host.displayed().spans().is_empty());
    }

    #[test]
    fn test_dispose_clears_and_unsubscribes() {
        let mut host = MemoryHost::new(r#"{"secret": "s3"}"#);
        let session = HighlightSession::attach(&mut host, builtin());
        session.dispose(&mut host);

        assert!(host.displayed().spans().is_empty());
        assert_eq!(host.listener_count(), 0);

        host.set_text(r#"{"secret": "s4"}"#);
        assert!(host.displayed().spans().is_empty());
    }

    #[test]
    fn test_custom_table() {
        let table = PatternTable::builder()
            .without_possible_secret()
            .build()
            .unwrap();
        let mut host = MemoryHost::new(r#"{"id": "abcdef0123456789abcdef0123456789"}"#);
        let _session = HighlightSession::attach(&mut host, Arc::new(table));

        assert!(host.displayed().spans().is_empty());
    }
}
