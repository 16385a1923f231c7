//! Default translations bundled with the demo.
//!
//! These are the fallback for every lookup and the initial contents of a
//! fresh store.

use phf::phf_map;
use trans::Namespace;

use crate::language::Language;

static DE_CONTENT: phf::Map<&'static str, &'static str> = phf_map! {
    "preview.content" => "Hier wird der formatierte Text angezeigt...",
    "demo.title" => "Rich Text Editor Demo",
    "demo.description" => "Probieren Sie den Editor aus! Sie können Text formatieren und Erklärungen hinzufügen.",
    "demo.initial-content" => "Willkommen zum <2>Rich Text Editor</2> Demo!\n\
\n\
Dieser Editor unterstützt verschiedene Formatierungen:\n\
- <2>Fette Schrift</2> mit dem Bold-Button\n\
- <3>Kursive Schrift</3> mit dem Italic-Button  \n\
- <4 href=\"https://example.com\" target=\"blank\">Links</4> zu externen Seiten\n\
- <1 i18n=\"tooltip-demo\">Erklärung-Tooltips</1> für Fachbegriffe<5/>\n\
- Und <5/>Zeilenumbrüche<5/> mit dem BR-Button\n\
\n\
Probieren Sie es aus! Markieren Sie Text und nutzen Sie die Buttons oben.",
    "demo.reset-button" => "Demo Text zurücksetzen",
    "demo.saved-content-title" => "Letzter gespeicherter Inhalt:",
    "demo.editor-label" => "Rich Text Editor Demo",
    "demo.placeholder" => "Beginnen Sie mit der Eingabe...",
    "editor.unsaved-changes" => "* Ungespeicherte Änderungen",
    "editor.select-link-text" => "Bitte markieren Sie zuerst Text für den Link.",
    "editor.select-explanation-text" => "Bitte markieren Sie zuerst Text für die Erklärung.",
    "editor.existing-explanation" => "Bestehende Erklärung gefunden. Du kannst diese nun bearbeiten.",
    "editor.save-failed" => "Speichern fehlgeschlagen.",
};

static DE_EXPLAIN: phf::Map<&'static str, &'static str> = phf_map! {
    "tooltip-demo" => "Ein Tooltip ist ein kleines Hilfefenster, das zusätzliche Informationen anzeigt, wenn man mit der Maus über einen Begriff fährt.",
};

static EN_CONTENT: phf::Map<&'static str, &'static str> = phf_map! {
    "preview.content" => "The formatted text will be displayed here...",
    "demo.title" => "Rich Text Editor Demo",
    "demo.description" => "Try out the editor! You can format text and add explanations.",
    "demo.initial-content" => "Welcome to the <2>Rich Text Editor</2> Demo!\n\
\n\
This editor supports various formatting options:\n\
- <2>Bold text</2> with the Bold button\n\
- <3>Italic text</3> with the Italic button  \n\
- <4 href=\"https://example.com\" target=\"blank\">Links</4> to external pages\n\
- <1 i18n=\"tooltip-demo\">Explanation tooltips</1> for technical terms<5/>\n\
- And <5/>line breaks<5/> with the BR button\n\
\n\
Try it out! Select text and use the buttons above.",
    "demo.reset-button" => "Reset Demo Text",
    "demo.saved-content-title" => "Last saved content:",
    "demo.editor-label" => "Rich Text Editor Demo",
    "demo.placeholder" => "Start typing...",
    "editor.unsaved-changes" => "* Unsaved changes",
    "editor.select-link-text" => "Please select text for the link first.",
    "editor.select-explanation-text" => "Please select text for the explanation first.",
    "editor.existing-explanation" => "Existing explanation found. You can edit it now.",
    "editor.save-failed" => "Saving failed.",
};

static EN_EXPLAIN: phf::Map<&'static str, &'static str> = phf_map! {
    "tooltip-demo" => "A tooltip is a small help window that displays additional information when you hover over a term with your mouse.",
};

fn map(language: Language, namespace: Namespace) -> &'static phf::Map<&'static str, &'static str> {
    match (language, namespace) {
        (Language::De, Namespace::Content) => &DE_CONTENT,
        (Language::De, Namespace::Explain) => &DE_EXPLAIN,
        (Language::En, Namespace::Content) => &EN_CONTENT,
        (Language::En, Namespace::Explain) => &EN_EXPLAIN,
    }
}

/// Look up a bundled string.
pub fn get(language: Language, namespace: Namespace, key: &str) -> Option<&'static str> {
    map(language, namespace).get(key).copied()
}

/// All bundled entries of one namespace.
pub fn entries(
    language: Language,
    namespace: Namespace,
) -> impl Iterator<Item = (&'static str, &'static str)> {
    map(language, namespace).entries().map(|(k, v)| (*k, *v))
}
