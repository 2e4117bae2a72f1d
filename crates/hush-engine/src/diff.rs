//! Side-by-side diff view wiring
//!
//! The host computes and renders the diff. This module only picks the
//! options, creates the two models and tears everything down.

use hush_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_LANGUAGE: &str = "javascript";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditorId(pub u64);

/// Diff editor options; `None` leaves the host's current value alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEditorOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_side_by_side: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_layout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_split_view_resizing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_indicators: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_gutter_menu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
}

impl DiffEditorOptions {
    /// Read-only side-by-side view without the gutter menu
    pub fn defaults() -> Self {
        Self {
            render_side_by_side: Some(true),
            automatic_layout: Some(true),
            enable_split_view_resizing: Some(false),
            render_indicators: Some(true),
            render_gutter_menu: Some(false),
            original_editable: Some(false),
            read_only: Some(true),
        }
    }

    /// Field-wise merge; set fields of `overrides` win
    pub fn merge(&self, overrides: &DiffEditorOptions) -> DiffEditorOptions {
        DiffEditorOptions {
            render_side_by_side: overrides.render_side_by_side.or(self.render_side_by_side),
            automatic_layout: overrides.automatic_layout.or(self.automatic_layout),
            enable_split_view_resizing: overrides
                .enable_split_view_resizing
                .or(self.enable_split_view_resizing),
            render_indicators: overrides.render_indicators.or(self.render_indicators),
            render_gutter_menu: overrides.render_gutter_menu.or(self.render_gutter_menu),
            original_editable: overrides.original_editable.or(self.original_editable),
            read_only: overrides.read_only.or(self.read_only),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub editor: DiffEditorOptions,
}

/// Host capable of showing a diff between two models
pub trait DiffHost {
    fn create_model(&mut self, text: &str, language: &str) -> Result<ModelId>;

    fn create_diff_editor(&mut self, options: &DiffEditorOptions) -> Result<EditorId>;

    fn set_diff_models(&mut self, editor: EditorId, original: ModelId, modified: ModelId)
    -> Result<()>;

    fn set_model_value(&mut self, model: ModelId, text: &str) -> Result<()>;

    fn set_model_language(&mut self, model: ModelId, language: &str) -> Result<()>;

    fn update_diff_options(&mut self, editor: EditorId, options: &DiffEditorOptions) -> Result<()>;

    fn dispose_diff_editor(&mut self, editor: EditorId) -> Result<()>;

    fn dispose_model(&mut self, model: ModelId) -> Result<()>;
}

/// A diff editor and its original/modified models
#[derive(Debug)]
pub struct DiffView {
    editor: EditorId,
    original: ModelId,
    modified: ModelId,
    language: String,
    editor_options: DiffEditorOptions,
}

impl DiffView {
    pub fn create<H>(host: &mut H, options: DiffOptions) -> Result<Self>
    where
        H: DiffHost + ?Sized,
    {
        let language = options
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let original = host.create_model("", &language)?;
        let modified = host.create_model("", &language)?;

        let resolved = DiffEditorOptions::defaults().merge(&options.editor);
        let editor = host.create_diff_editor(&resolved)?;
        host.set_diff_models(editor, original, modified)?;

        debug!("Created diff view {:?} ({})", editor, language);
        Ok(Self {
            editor,
            original,
            modified,
            language,
            editor_options: options.editor,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Caller-supplied editor options, without defaults
    pub fn editor_options(&self) -> &DiffEditorOptions {
        &self.editor_options
    }

    pub fn models(&self) -> (ModelId, ModelId) {
        (self.original, self.modified)
    }

    /// Replace both texts and re-apply the language
    pub fn set_value<H>(&self, host: &mut H, original: &str, modified: &str) -> Result<()>
    where
        H: DiffHost + ?Sized,
    {
        host.set_model_value(self.original, original)?;
        host.set_model_value(self.modified, modified)?;
        self.apply_language(host)
    }

    pub fn update_options<H>(&mut self, host: &mut H, partial: DiffOptions) -> Result<()>
    where
        H: DiffHost + ?Sized,
    {
        self.editor_options = self.editor_options.merge(&partial.editor);
        host.update_diff_options(self.editor, &self.editor_options)?;

        if let Some(language) = partial.language.filter(|l| !l.is_empty()) {
            self.language = language;
            self.apply_language(host)?;
        }
        Ok(())
    }

    /// Dispose the editor, then both models. Failures are logged and skipped.
    pub fn dispose<H>(self, host: &mut H)
    where
        H: DiffHost + ?Sized,
    {
        if let Err(e) = host.dispose_diff_editor(self.editor) {
            warn!("Failed to dispose diff editor {:?}: {}", self.editor, e);
        }
        for model in [self.original, self.modified] {
            if let Err(e) = host.dispose_model(model) {
                warn!("Failed to dispose model {:?}: {}", model, e);
            }
        }
    }

    fn apply_language<H>(&self, host: &mut H) -> Result<()>
    where
        H: DiffHost + ?Sized,
    {
        host.set_model_language(self.original, &self.language)?;
        host.set_model_language(self.modified, &self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hush_core::Error;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        CreateModel(String),
        CreateEditor(DiffEditorOptions),
        SetModels(u64, u64),
        SetValue(u64, String),
        SetLanguage(u64, String),
        UpdateOptions(DiffEditorOptions),
        DisposeEditor,
        DisposeModel(u64),
    }

    #[derive(Default)]
    struct FakeDiffHost {
        next_model: u64,
        calls: Vec<Call>,
        fail_editor_dispose: bool,
    }

    impl DiffHost for FakeDiffHost {
        fn create_model(&mut self, _text: &str, language: &str) -> Result<ModelId> {
            self.calls.push(Call::CreateModel(language.to_string()));
            self.next_model += 1;
            Ok(ModelId(self.next_model))
        }

        fn create_diff_editor(&mut self, options: &DiffEditorOptions) -> Result<EditorId> {
            self.calls.push(Call::CreateEditor(options.clone()));
            Ok(EditorId(1))
        }

        fn set_diff_models(
            &mut self,
            _editor: EditorId,
            original: ModelId,
            modified: ModelId,
        ) -> Result<()> {
            self.calls.push(Call::SetModels(original.0, modified.0));
            Ok(())
        }

        fn set_model_value(&mut self, model: ModelId, text: &str) -> Result<()> {
            self.calls.push(Call::SetValue(model.0, text.to_string()));
            Ok(())
        }

        fn set_model_language(&mut self, model: ModelId, language: &str) -> Result<()> {
            self.calls.push(Call::SetLanguage(model.0, language.to_string()));
            Ok(())
        }

        fn update_diff_options(
            &mut self,
            _editor: EditorId,
            options: &DiffEditorOptions,
        ) -> Result<()> {
            self.calls.push(Call::UpdateOptions(options.clone()));
            Ok(())
        }

        fn dispose_diff_editor(&mut self, _editor: EditorId) -> Result<()> {
            self.calls.push(Call::DisposeEditor);
            if self.fail_editor_dispose {
                return Err(Error::Other(anyhow::anyhow!("editor already disposed")));
            }
            Ok(())
        }

        fn dispose_model(&mut self, model: ModelId) -> Result<()> {
            self.calls.push(Call::DisposeModel(model.0));
            Ok(())
        }
    }

    #[test]
    fn test_create_uses_defaults() {
        let mut host = FakeDiffHost::default();
        let view = DiffView::create(&mut host, DiffOptions::default()).unwrap();

        assert_eq!(view.language(), "javascript");
        assert_eq!(
            host.calls,
            vec![
                Call::CreateModel("javascript".to_string()),
                Call::CreateModel("javascript".to_string()),
                Call::CreateEditor(DiffEditorOptions::defaults()),
                Call::SetModels(1, 2),
            ]
        );
    }

    #[test]
    fn test_caller_options_override_defaults() {
        let mut host = FakeDiffHost::default();
        let options = DiffOptions {
            language: Some("json".to_string()),
            editor: DiffEditorOptions {
                render_side_by_side: Some(false),
                ..Default::default()
            },
        };
        DiffView::create(&mut host, options).unwrap();

        let Call::CreateEditor(resolved) = &host.calls[2] else {
            panic!("expected editor creation, got {:?}", host.calls[2]);
        };
        assert_eq!(resolved.render_side_by_side, Some(false));
        assert_eq!(resolved.read_only, Some(true));
        assert_eq!(resolved.render_gutter_menu, Some(false));
    }

    #[test]
    fn test_set_value_reapplies_language() {
        let mut host = FakeDiffHost::default();
        let view = DiffView::create(&mut host, DiffOptions::default()).unwrap();
        host.calls.clear();

        view.set_value(&mut host, "a", "b").unwrap();
        assert_eq!(
            host.calls,
            vec![
                Call::SetValue(1, "a".to_string()),
                Call::SetValue(2, "b".to_string()),
                Call::SetLanguage(1, "javascript".to_string()),
                Call::SetLanguage(2, "javascript".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_options() {
        let mut host = FakeDiffHost::default();
        let mut view = DiffView::create(&mut host, DiffOptions::default()).unwrap();
        host.calls.clear();

        let partial = DiffOptions {
            language: None,
            editor: DiffEditorOptions {
                read_only: Some(false),
                ..Default::default()
            },
        };
        view.update_options(&mut host, partial).unwrap();
        assert_eq!(host.calls.len(), 1);
        assert_eq!(view.editor_options().read_only, Some(false));

        let partial = DiffOptions {
            language: Some("typescript".to_string()),
            editor: DiffEditorOptions::default(),
        };
        view.update_options(&mut host, partial).unwrap();
        assert_eq!(view.language(), "typescript");
        assert_eq!(view.editor_options().read_only, Some(false));
        assert!(host.calls.contains(&Call::SetLanguage(2, "typescript".to_string())));
    }

    #[test]
    fn test_update_options_ignores_empty_language() {
        let mut host = FakeDiffHost::default();
        let mut view = DiffView::create(&mut host, DiffOptions::default()).unwrap();
        host.calls.clear();

        let partial = DiffOptions {
            language: Some(String::new()),
            editor: DiffEditorOptions::default(),
        };
        view.update_options(&mut host, partial).unwrap();

        assert_eq!(view.language(), "javascript");
        assert_eq!(host.calls, vec![Call::UpdateOptions(DiffEditorOptions::default())]);
    }

    #[test]
    fn test_dispose_continues_after_failure() {
        let mut host = FakeDiffHost {
            fail_editor_dispose: true,
            ..Default::default()
        };
        let view = DiffView::create(&mut host, DiffOptions::default()).unwrap();
        host.calls.clear();

        view.dispose(&mut host);
        assert_eq!(
            host.calls,
            vec![Call::DisposeEditor, Call::DisposeModel(1), Call::DisposeModel(2)]
        );
    }

    #[test]
    fn test_options_deserialize() {
        let options: DiffOptions =
            serde_json::from_str(r#"{"language": "json", "editor": {"read_only": false}}"#).unwrap();
        assert_eq!(options.language.as_deref(), Some("json"));
        assert_eq!(options.editor.read_only, Some(false));
        assert_eq!(options.editor.automatic_layout, None);
    }
}
