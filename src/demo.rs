//! The editor demo session.

use editor::Editor;
use i18n::{Language, TranslationStore};
use trans::{Namespace, Rendered, Renderer};

/// Content key of the text the demo starts with.
pub const INITIAL_CONTENT_KEY: &str = "demo.initial-content";

/// One demo session: an editor over the localized demo text, the last
/// saved content, and the store both draw from.
///
/// ```
/// use i18n::{Language, TranslationStore};
/// use richtrans::Demo;
///
/// let mut demo = Demo::new(TranslationStore::in_memory());
/// assert!(demo.editor().value().starts_with("Welcome"));
///
/// demo.set_language(Language::De);
/// assert!(demo.editor().value().starts_with("Willkommen"));
/// ```
#[derive(Debug)]
pub struct Demo {
    store: TranslationStore,
    renderer: Renderer,
    editor: Editor,
    saved: Option<String>,
}

impl Demo {
    pub fn new(store: TranslationStore) -> Self {
        Self::with_renderer(store, Renderer::default())
    }

    pub fn with_renderer(store: TranslationStore, renderer: Renderer) -> Self {
        let editor = Editor::new(store.t(INITIAL_CONTENT_KEY, Namespace::Content));
        Self {
            store,
            renderer,
            editor,
            saved: None,
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Localized content string.
    pub fn t(&self, key: &str) -> String {
        self.store.t(key, Namespace::Content)
    }

    /// The localized demo text.
    pub fn initial_content(&self) -> String {
        self.t(INITIAL_CONTENT_KEY)
    }

    /// Commit the editor and remember its value as the saved content.
    pub fn save(&mut self) -> &str {
        let value = self.editor.save();
        self.saved.insert(value)
    }

    /// Content of the last save, if any.
    pub fn saved(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// Load the demo text again. Saved content is kept.
    pub fn reset(&mut self) {
        let content = self.initial_content();
        self.editor.set_value(content);
    }

    /// Switch language; the editor reloads the demo text in that language.
    pub fn set_language(&mut self, language: Language) {
        self.store.set_language(language);
        self.reset();
    }

    pub fn toggle_language(&mut self) -> Language {
        let language = self.store.language().toggled();
        self.set_language(language);
        language
    }

    /// The editor value rendered.
    pub fn preview(&self) -> Rendered {
        self.renderer.render(self.editor.value())
    }

    /// The saved content rendered.
    pub fn saved_preview(&self) -> Option<Rendered> {
        self.saved.as_deref().map(|saved| self.renderer.render(saved))
    }
}
