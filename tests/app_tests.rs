//! Demo App Integration Tests
//!
//! Drives the interactive demo with synthetic key events and checks the
//! editor, the store and the drawn screen.

use std::io;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use richtrans::i18n::{Language, Storage, StoreConfig, TranslationStore, Translations};
use richtrans::trans::Namespace;
use richtrans::{Demo, DemoApp};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

fn app_with(text: &str) -> DemoApp {
    let mut demo = Demo::new(TranslationStore::in_memory());
    demo.editor_mut().set_value(text);
    demo.editor_mut().set_caret(0);
    DemoApp::new(demo)
}

async fn type_text(app: &mut DemoApp, text: &str) {
    for ch in text.chars() {
        app.handle_key(key(KeyCode::Char(ch))).await.unwrap();
    }
}

fn screen(app: &DemoApp) -> String {
    let mut out = Vec::new();
    app.draw(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Editing
// =============================================================================

#[tokio::test]
async fn typing_and_bold() {
    let mut app = app_with("");
    type_text(&mut app, "hi ").await;
    app.handle_key(ctrl('b')).await.unwrap();
    type_text(&mut app, "there").await;
    assert_eq!(app.demo().editor().value(), "hi <2>there</2>");
    assert!(app.demo().editor().has_unsaved_changes());
}

#[tokio::test]
async fn enter_inserts_line_break() {
    let mut app = app_with("ab");
    app.handle_key(key(KeyCode::Right)).await.unwrap();
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert_eq!(app.demo().editor().value(), "a<5/>\nb");
    assert_eq!(app.demo().preview().text(), "a\n\nb");
}

#[tokio::test]
async fn save_then_reset() {
    let mut app = app_with("draft");
    app.handle_key(ctrl('s')).await.unwrap();
    assert_eq!(app.demo().saved(), Some("draft"));
    assert_eq!(app.status(), Some("Last saved content:"));

    app.handle_key(ctrl('r')).await.unwrap();
    assert!(app.demo().editor().value().starts_with("Welcome to the"));
    assert_eq!(app.demo().saved(), Some("draft"));
}

#[tokio::test]
async fn language_toggle_reloads_content() {
    let mut app = app_with("");
    app.handle_key(ctrl('l')).await.unwrap();
    assert_eq!(app.demo().store().language(), Language::De);
    assert!(app.demo().editor().value().starts_with("Willkommen"));
    assert_eq!(app.status(), Some("Deutsch"));
}

#[tokio::test]
async fn escape_quits() {
    let mut app = app_with("");
    assert!(!app.should_quit());
    app.handle_key(key(KeyCode::Esc)).await.unwrap();
    assert!(app.should_quit());
}

// =============================================================================
// Dialogs
// =============================================================================

#[tokio::test]
async fn link_without_selection_shows_localized_message() {
    let mut app = app_with("text");
    app.handle_key(ctrl('l')).await.unwrap();
    app.handle_key(ctrl('k')).await.unwrap();
    assert!(!app.is_prompting());
    assert_eq!(
        app.status(),
        Some("Bitte markieren Sie zuerst Text für den Link.")
    );
}

#[tokio::test]
async fn link_prompt_wraps_selection() {
    let mut app = app_with("see docs");
    app.handle_key(key(KeyCode::End)).await.unwrap();
    for _ in 0..4 {
        app.handle_key(shift(KeyCode::Left)).await.unwrap();
    }
    app.handle_key(ctrl('k')).await.unwrap();
    assert!(app.is_prompting());
    assert!(screen(&app).contains("docs -> URL: "));

    type_text(&mut app, "https://x.com").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();
    assert!(!app.is_prompting());
    assert_eq!(
        app.demo().editor().value(),
        r#"see <4 href="https://x.com" target="blank">docs</4>"#
    );
}

#[tokio::test(start_paused = true)]
async fn explanation_prompt_saves_and_wraps() {
    let mut app = app_with("Fachbegriff");
    app.handle_key(shift(KeyCode::End)).await.unwrap();
    app.handle_key(ctrl('x')).await.unwrap();
    assert!(screen(&app).contains("I18n-Key fachbegriff: "));

    type_text(&mut app, "Erklärung").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert_eq!(
        app.demo().editor().value(),
        r#"<1 i18n="fachbegriff">Fachbegriff</1>"#
    );
    assert_eq!(
        app.demo().store().lookup("fachbegriff", Namespace::Explain),
        "Erklärung"
    );
    assert!(screen(&app).contains("[1] "));
}

#[derive(Debug)]
struct ReadOnlyStorage;

impl Storage for ReadOnlyStorage {
    fn load(&self) -> richtrans::i18n::Result<Option<Translations>> {
        Ok(None)
    }

    fn save(&self, _translations: &Translations) -> richtrans::i18n::Result<()> {
        Err(io::Error::other("read-only").into())
    }
}

#[tokio::test(start_paused = true)]
async fn failed_explanation_save_is_reported() {
    let store = TranslationStore::with_storage(StoreConfig::default(), Arc::new(ReadOnlyStorage));
    let mut demo = Demo::new(store);
    demo.editor_mut().set_value("term");
    demo.editor_mut().set_caret(0);
    let mut app = DemoApp::new(demo);

    app.handle_key(shift(KeyCode::End)).await.unwrap();
    app.handle_key(ctrl('x')).await.unwrap();
    type_text(&mut app, "expl").await;
    app.handle_key(key(KeyCode::Enter)).await.unwrap();

    assert!(!app.should_quit());
    assert!(!app.is_prompting());
    assert_eq!(app.status(), Some("Saving failed."));
    assert_eq!(app.demo().editor().value(), "term");
    assert_eq!(
        app.demo().store().lookup("term", Namespace::Explain),
        "term"
    );
}

#[tokio::test]
async fn escape_cancels_prompt_only() {
    let mut app = app_with("word");
    app.handle_key(shift(KeyCode::End)).await.unwrap();
    app.handle_key(ctrl('k')).await.unwrap();
    app.handle_key(key(KeyCode::Esc)).await.unwrap();
    assert!(!app.is_prompting());
    assert!(!app.should_quit());
    assert_eq!(app.demo().editor().value(), "word");
}

// =============================================================================
// Screen
// =============================================================================

#[test]
fn screen_shows_title_preview_and_footnotes() {
    let app = DemoApp::new(Demo::new(TranslationStore::in_memory()));
    let out = screen(&app);
    assert!(out.contains("Rich Text Editor Demo"));
    assert!(out.contains("Try out the editor!"));
    assert!(out.contains("A tooltip is a small help window"));
    assert!(!out.contains("* Unsaved changes"));
}
