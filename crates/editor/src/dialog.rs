//! Link and explanation dialogs.
//!
//! Both capture the selection when they open and insert their markup over
//! that captured range when confirmed, even if the caret moved meanwhile.

use std::ops::Range;

use i18n::TranslationStore;
use trans::Namespace;

use crate::buffer::Editor;
use crate::error::{EditorError, Result};
use crate::key::generate_i18n_key;

/// Dialog turning the selection into a `<4>` link.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkDialog {
    selected_text: String,
    selection: Range<usize>,
}

impl LinkDialog {
    /// Open the dialog for the editor's selection.
    pub fn open(editor: &Editor) -> Result<Self> {
        if editor.selected_text().is_empty() {
            return Err(EditorError::NoLinkText);
        }
        Ok(Self {
            selected_text: editor.selected_text().to_string(),
            selection: editor.selection(),
        })
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// Insert `<4 href="{url}" target="blank">{text}</4>`.
    pub fn confirm(self, editor: &mut Editor, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            return Err(EditorError::EmptyUrl);
        }
        let markup = format!(
            r#"<4 href="{url}" target="blank">{}</4>"#,
            self.selected_text
        );
        log::debug!("link inserted: {url}");
        editor.insert_at(&markup, self.selection.start, self.selection.end);
        Ok(())
    }
}

/// Dialog attaching an explanation to the selection with a `<1>` span.
///
/// Opening looks up an explanation already stored under the derived key.
/// If there is one the dialog edits it and confirming leaves the text
/// untouched.
#[derive(Clone, Debug)]
pub struct ExplanationDialog {
    store: TranslationStore,
    selected_text: String,
    selection: Range<usize>,
    key: String,
    existing: Option<String>,
}

impl ExplanationDialog {
    /// Open the dialog for the editor's selection.
    pub async fn open(editor: &Editor, store: &TranslationStore) -> Result<Self> {
        if editor.namespace() == Namespace::Explain {
            return Err(EditorError::ExplainNamespace);
        }
        let selected_text = editor.selected_text().to_string();
        if selected_text.is_empty() {
            return Err(EditorError::NoExplanationText);
        }

        let key = generate_i18n_key(&selected_text);
        let existing = match store.get_explanation(key.as_str()).await {
            Ok(existing) => existing,
            Err(e) => {
                log::warn!("failed to fetch explanation {key}: {e}");
                None
            }
        };

        Ok(Self {
            store: store.clone(),
            selected_text,
            selection: editor.selection(),
            key,
            existing,
        })
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// The explanation key derived from the selected text.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The explanation stored before the dialog opened.
    pub fn existing(&self) -> Option<&str> {
        self.existing.as_deref()
    }

    /// Returns true when an existing explanation is being edited.
    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    /// Save `explanation` and, for a new explanation, wrap the captured
    /// selection in `<1 i18n="{key}">...</1>`.
    pub async fn confirm(self, editor: &mut Editor, explanation: &str) -> Result<()> {
        if explanation.trim().is_empty() {
            return Err(EditorError::EmptyExplanation);
        }
        self.store
            .save_explanation(self.key.as_str(), explanation)
            .await?;

        if !self.is_edit() {
            let markup = format!(r#"<1 i18n="{}">{}</1>"#, self.key, self.selected_text);
            editor.insert_at(&markup, self.selection.start, self.selection.end);
        }
        log::debug!("explanation saved: {}", self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(text: &str, start: usize, end: usize) -> Editor {
        let mut editor = Editor::new(text);
        editor.select(start, end);
        editor
    }

    #[test]
    fn link_requires_selection() {
        let editor = Editor::new("text");
        assert!(matches!(
            LinkDialog::open(&editor),
            Err(EditorError::NoLinkText)
        ));
    }

    #[test]
    fn link_requires_url() {
        let mut editor = selected("see docs", 4, 8);
        let dialog = LinkDialog::open(&editor).unwrap();
        assert!(matches!(
            dialog.confirm(&mut editor, "  "),
            Err(EditorError::EmptyUrl)
        ));
        assert_eq!(editor.value(), "see docs");
    }

    #[test]
    fn link_wraps_captured_selection() {
        let mut editor = selected("see docs", 4, 8);
        let dialog = LinkDialog::open(&editor).unwrap();
        editor.set_caret(0);
        dialog.confirm(&mut editor, "https://x.com").unwrap();
        assert_eq!(
            editor.value(),
            r#"see <4 href="https://x.com" target="blank">docs</4>"#
        );
    }

    #[tokio::test]
    async fn explanation_rejected_in_explain_namespace() {
        let store = TranslationStore::in_memory();
        let editor = selected("term", 0, 4).with_namespace(Namespace::Explain);
        assert!(matches!(
            ExplanationDialog::open(&editor, &store).await,
            Err(EditorError::ExplainNamespace)
        ));
    }

    #[tokio::test]
    async fn explanation_requires_selection() {
        let store = TranslationStore::in_memory();
        let editor = Editor::new("term");
        assert!(matches!(
            ExplanationDialog::open(&editor, &store).await,
            Err(EditorError::NoExplanationText)
        ));
    }

    #[tokio::test]
    async fn explanation_requires_text() {
        let store = TranslationStore::in_memory();
        let mut editor = selected("term", 0, 4);
        let dialog = ExplanationDialog::open(&editor, &store).await.unwrap();
        assert!(matches!(
            dialog.confirm(&mut editor, "\n").await,
            Err(EditorError::EmptyExplanation)
        ));
    }
}
