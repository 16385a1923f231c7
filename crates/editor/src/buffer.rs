//! The editable markup buffer.

use std::ops::Range;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use trans::{Namespace, Tag};

use crate::grapheme::{line_end, line_start, next_boundary, prev_boundary, snap};

/// Markup inserted by the line break command and the Enter key.
pub const LINE_BREAK: &str = "<5/>";

/// A markup text buffer with a selection and a committed value.
///
/// Offsets are byte offsets into the value. Offsets passed in are clamped to
/// the value and moved back to the nearest char boundary, so no operation
/// fails.
///
/// # Examples
///
/// ```
/// use editor::Editor;
///
/// let mut editor = Editor::new("Hello world");
/// editor.select(6, 11);
/// editor.bold();
/// assert_eq!(editor.value(), "Hello <2>world</2>");
/// assert!(editor.has_unsaved_changes());
///
/// editor.save();
/// assert!(!editor.has_unsaved_changes());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Editor {
    value: String,
    committed: String,
    anchor: usize,
    head: usize,
    namespace: Namespace,
}

impl Editor {
    /// Create an editor holding `value`, caret at the start.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            committed: value.clone(),
            value,
            anchor: 0,
            head: 0,
            namespace: Namespace::Content,
        }
    }

    /// Set the namespace the edited text belongs to.
    pub fn with_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value as of the last save.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// The selected range, start before end.
    pub fn selection(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }

    /// Caret position; the moving end of the selection.
    pub fn caret(&self) -> usize {
        self.head
    }

    /// Select from `anchor` to `head`; the caret ends up at `head`.
    pub fn select(&mut self, anchor: usize, head: usize) {
        self.anchor = snap(&self.value, anchor);
        self.head = snap(&self.value, head);
    }

    /// Collapse the selection to a caret at `offset`.
    pub fn set_caret(&mut self, offset: usize) {
        self.select(offset, offset);
    }

    pub fn selected_text(&self) -> &str {
        &self.value[self.selection()]
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.value != self.committed
    }

    /// Replace `start..end` with `text` and put the caret right after the
    /// inserted text.
    pub fn insert_at(&mut self, text: &str, start: usize, end: usize) {
        let (start, end) = (snap(&self.value, start), snap(&self.value, end));
        let range = start.min(end)..start.max(end);
        let caret = range.start + text.len();
        self.value.replace_range(range, text);
        self.set_caret(caret);
    }

    /// Replace the current selection with `text`.
    pub fn replace_selection(&mut self, text: &str) {
        let Range { start, end } = self.selection();
        self.insert_at(text, start, end);
    }

    /// Commit the current value and return it.
    pub fn save(&mut self) -> String {
        log::debug!("editor saved ({} bytes)", self.value.len());
        self.committed = self.value.clone();
        self.committed.clone()
    }

    /// Discard edits since the last save.
    pub fn reset(&mut self) {
        self.value = self.committed.clone();
        self.set_caret(self.value.len());
    }

    /// Replace both the value and the committed value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.committed = self.value.clone();
        self.set_caret(self.value.len());
    }

    /// Wrap the selection in `<2>...</2>`.
    pub fn bold(&mut self) {
        self.wrap_selection(&Tag::Strong);
    }

    /// Wrap the selection in `<3>...</3>`.
    pub fn italic(&mut self) {
        self.wrap_selection(&Tag::Emphasis);
    }

    /// Replace the selection with `<5/>`.
    pub fn line_break(&mut self) {
        self.replace_selection(LINE_BREAK);
    }

    /// Wrap the selection in a paired tag. Without a selection an empty pair
    /// is inserted and the caret lands between the tags.
    fn wrap_selection(&mut self, tag: &Tag) {
        let Range { start, end } = self.selection();
        let id = tag.id();
        let text = format!("<{id}>{}</{id}>", self.selected_text());
        self.insert_at(&text, start, end);
        if start == end {
            self.set_caret(start + id.len() + 2);
        }
    }

    /// Handle a key event. Shift with a movement key extends the selection
    /// instead of collapsing it.
    pub fn on_key_event(&mut self, event: KeyEvent) -> bool {
        if !event.modifiers.contains(KeyModifiers::SHIFT) {
            return self.on_key(event.code);
        }
        let head = match event.code {
            KeyCode::Left => prev_boundary(&self.value, self.head),
            KeyCode::Right => next_boundary(&self.value, self.head),
            KeyCode::Home => line_start(&self.value, self.head),
            KeyCode::End => line_end(&self.value, self.head),
            code => return self.on_key(code),
        };
        self.head = head;
        true
    }

    /// Handle a key press. Returns false for keys the editor ignores.
    pub fn on_key(&mut self, key: KeyCode) -> bool {
        let Range { start, end } = self.selection();
        match key {
            KeyCode::Enter => {
                self.insert_at("<5/>\n", start, end);
                self.set_caret(start + LINE_BREAK.len() + 1);
            }
            KeyCode::Char(ch) => {
                let mut buf = [0u8; 4];
                self.insert_at(ch.encode_utf8(&mut buf), start, end);
            }
            KeyCode::Backspace => {
                if start == end {
                    self.insert_at("", prev_boundary(&self.value, start), start);
                } else {
                    self.insert_at("", start, end);
                }
            }
            KeyCode::Delete => {
                if start == end {
                    self.insert_at("", start, next_boundary(&self.value, start));
                } else {
                    self.insert_at("", start, end);
                }
            }
            KeyCode::Left => {
                let caret = if start == end {
                    prev_boundary(&self.value, start)
                } else {
                    start
                };
                self.set_caret(caret);
            }
            KeyCode::Right => {
                let caret = if start == end {
                    next_boundary(&self.value, end)
                } else {
                    end
                };
                self.set_caret(caret);
            }
            KeyCode::Home => self.set_caret(line_start(&self.value, start)),
            KeyCode::End => self.set_caret(line_end(&self.value, end)),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_moves_caret_after_text() {
        let mut editor = Editor::new("abcdef");
        editor.insert_at("XY", 2, 4);
        assert_eq!(editor.value(), "abXYef");
        assert_eq!(editor.caret(), 4);
        assert_eq!(editor.selection(), 4..4);
    }

    #[test]
    fn insert_at_clamps_offsets() {
        let mut editor = Editor::new("abc");
        editor.insert_at("!", 10, 20);
        assert_eq!(editor.value(), "abc!");
        editor.insert_at("?", 3, 1);
        assert_eq!(editor.value(), "a?!");
        assert_eq!(editor.caret(), 2);
    }

    #[test]
    fn insert_at_snaps_to_char_boundary() {
        let mut editor = Editor::new("für");
        // offset 2 is inside 'ü'
        editor.insert_at("-", 2, 2);
        assert_eq!(editor.value(), "f-ür");
    }

    #[test]
    fn bold_wraps_selection() {
        let mut editor = Editor::new("make this bold");
        editor.select(5, 9);
        editor.bold();
        assert_eq!(editor.value(), "make <2>this</2> bold");
        assert_eq!(editor.caret(), 16);
    }

    #[test]
    fn italic_without_selection_places_caret_inside() {
        let mut editor = Editor::new("ab");
        editor.set_caret(1);
        editor.italic();
        assert_eq!(editor.value(), "a<3></3>b");
        assert_eq!(editor.caret(), 4);
    }

    #[test]
    fn line_break_replaces_selection() {
        let mut editor = Editor::new("one two");
        editor.select(3, 4);
        editor.line_break();
        assert_eq!(editor.value(), "one<5/>two");
        assert_eq!(editor.caret(), 7);
    }

    #[test]
    fn enter_inserts_break_and_newline() {
        let mut editor = Editor::new("ab");
        editor.set_caret(1);
        assert!(editor.on_key(KeyCode::Enter));
        assert_eq!(editor.value(), "a<5/>\nb");
        assert_eq!(editor.caret(), 6);
    }

    #[test]
    fn typing_replaces_selection() {
        let mut editor = Editor::new("hello");
        editor.select(0, 5);
        editor.on_key(KeyCode::Char('ß'));
        assert_eq!(editor.value(), "ß");
        assert_eq!(editor.caret(), 2);
    }

    #[test]
    fn backspace_and_delete_remove_whole_clusters() {
        let mut editor = Editor::new("xe\u{301}y");
        editor.set_caret(4);
        editor.on_key(KeyCode::Backspace);
        assert_eq!(editor.value(), "xy");
        assert_eq!(editor.caret(), 1);

        editor.on_key(KeyCode::Delete);
        assert_eq!(editor.value(), "x");

        editor.set_caret(0);
        editor.on_key(KeyCode::Backspace);
        assert_eq!(editor.value(), "x");
    }

    #[test]
    fn arrows_collapse_selection() {
        let mut editor = Editor::new("abcdef");
        editor.select(2, 4);
        editor.on_key(KeyCode::Left);
        assert_eq!(editor.selection(), 2..2);
        editor.select(2, 4);
        editor.on_key(KeyCode::Right);
        assert_eq!(editor.selection(), 4..4);
        editor.on_key(KeyCode::Right);
        assert_eq!(editor.caret(), 5);
    }

    #[test]
    fn shift_extends_selection() {
        let mut editor = Editor::new("abc def");
        editor.set_caret(4);
        editor.on_key_event(KeyEvent::new(KeyCode::End, KeyModifiers::SHIFT));
        assert_eq!(editor.selected_text(), "def");
        editor.on_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert_eq!(editor.selected_text(), "de");

        editor.set_caret(4);
        editor.on_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT));
        assert_eq!(editor.selection(), 3..4);
        assert_eq!(editor.caret(), 3);

        editor.on_key_event(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(editor.value(), "abcXdef");
    }

    #[test]
    fn home_and_end_stay_on_line() {
        let mut editor = Editor::new("first\nsecond");
        editor.set_caret(8);
        editor.on_key(KeyCode::Home);
        assert_eq!(editor.caret(), 6);
        editor.on_key(KeyCode::End);
        assert_eq!(editor.caret(), 12);
    }

    #[test]
    fn unhandled_keys() {
        let mut editor = Editor::new("a");
        assert!(!editor.on_key(KeyCode::Esc));
        assert_eq!(editor.value(), "a");
    }

    #[test]
    fn save_and_reset() {
        let mut editor = Editor::new("start");
        editor.insert_at("re", 0, 0);
        assert!(editor.has_unsaved_changes());
        editor.reset();
        assert_eq!(editor.value(), "start");
        assert!(!editor.has_unsaved_changes());

        editor.insert_at("!", 5, 5);
        assert_eq!(editor.save(), "start!");
        assert_eq!(editor.committed(), "start!");
    }

    #[test]
    fn set_value_replaces_committed() {
        let mut editor = Editor::new("old");
        editor.insert_at("x", 0, 0);
        editor.set_value("new");
        assert!(!editor.has_unsaved_changes());
        assert_eq!(editor.caret(), 3);
    }
}
