//! # Editor Buffer
//!
//! [`TextBuffer`] is the live text of one note. [`EditorBuffer`] wraps it with
//! the note's [`AnnotationStore`] and keeps the two in step: edits are
//! batched while the buffer is [`EditState::Editing`] and every commit back
//! to [`EditState::Idle`] rebuilds the annotations synchronously before the
//! change listeners hear about it.

use crate::markup::{AnnotationStore, RuleTable, Scanner};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Replace `range` (char offsets) with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            range: at..at,
            replacement: text.into(),
        }
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self {
            range,
            replacement: String::new(),
        }
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            replacement: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn replace_all(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Apply `edit`, clamping its range to the buffer. Returns whether the
    /// text changed.
    pub fn apply(&mut self, edit: &TextEdit) -> bool {
        let len = self.len();
        let end = edit.range.end.min(len);
        let start = edit.range.start.min(end);
        if start == end && edit.replacement.is_empty() {
            return false;
        }

        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        if self.text[start_byte..end_byte] == edit.replacement {
            return false;
        }
        self.text
            .replace_range(start_byte..end_byte, &edit.replacement);
        true
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing,
}

type ChangeListener = Box<dyn FnMut(&str)>;

pub struct EditorBuffer {
    buffer: TextBuffer,
    annotations: AnnotationStore,
    rules: Arc<RuleTable>,
    scanner: Scanner,
    state: EditState,
    dirty: bool,
    listeners: Vec<ChangeListener>,
}

impl EditorBuffer {
    /// Open `text` for editing and annotate it right away.
    pub fn new(text: impl Into<String>, rules: Arc<RuleTable>, scanner: Scanner) -> Self {
        let mut editor = Self {
            buffer: TextBuffer::new(text),
            annotations: AnnotationStore::new(),
            rules,
            scanner,
            state: EditState::Idle,
            dirty: false,
            listeners: Vec::new(),
        };
        editor.rebuild();
        editor
    }

    /// Editor over the standard rule table with the default scanner.
    pub fn standard(text: impl Into<String>) -> Self {
        Self::new(
            text,
            Arc::new(RuleTable::standard().clone()),
            Scanner::default(),
        )
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Register a callback run after each commit that changed the text.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn begin_edit(&mut self) {
        self.state = EditState::Editing;
    }

    /// Apply an edit to the open batch, opening one if needed.
    pub fn edit(&mut self, edit: &TextEdit) {
        self.begin_edit();
        if self.buffer.apply(edit) {
            self.dirty = true;
        }
    }

    /// Close the batch. Rebuilds and notifies only when the text changed.
    /// Returns whether it did.
    pub fn commit(&mut self) -> bool {
        self.state = EditState::Idle;
        if !self.dirty {
            return false;
        }
        self.dirty = false;
        self.rebuild();

        let text = self.buffer.as_str();
        for listener in self.listeners.iter_mut() {
            listener(text);
        }
        true
    }

    /// A one-edit batch.
    pub fn apply(&mut self, edit: &TextEdit) -> bool {
        self.edit(edit);
        self.commit()
    }

    /// Replace the whole content in one batch.
    pub fn replace_all(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        self.begin_edit();
        if self.buffer.as_str() != text {
            self.buffer.replace_all(text);
            self.dirty = true;
        }
        self.commit()
    }

    fn rebuild(&mut self) {
        self.annotations
            .rebuild_with(&self.scanner, self.buffer.as_str(), &self.rules);
    }
}

impl fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("buffer", &self.buffer)
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Font, StyleAttributes};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn insert_delete_replace_use_char_offsets() {
        let mut buf = TextBuffer::new("héllo");
        assert!(buf.apply(&TextEdit::insert(1, "X")));
        assert_eq!(buf.as_str(), "hXéllo");
        assert!(buf.apply(&TextEdit::delete(2..3)));
        assert_eq!(buf.as_str(), "hXllo");
        assert!(buf.apply(&TextEdit::replace(0..2, "ça")));
        assert_eq!(buf.as_str(), "çallo");
    }

    #[test]
    fn out_of_range_edits_are_clamped() {
        let mut buf = TextBuffer::new("abc");
        assert!(buf.apply(&TextEdit::insert(99, "!")));
        assert_eq!(buf.as_str(), "abc!");
        assert!(buf.apply(&TextEdit::delete(2..99)));
        assert_eq!(buf.as_str(), "ab");
    }

    #[test]
    fn noop_edit_reports_no_change() {
        let mut buf = TextBuffer::new("abc");
        assert!(!buf.apply(&TextEdit::delete(1..1)));
        assert!(!buf.apply(&TextEdit::replace(0..1, "a")));
    }

    #[test]
    fn opening_annotates_initial_text() {
        let editor = EditorBuffer::standard("#bHi#b!");
        assert_eq!(editor.state(), EditState::Idle);
        assert_eq!(
            editor.annotations().style_at(2).unwrap().font(),
            Some(Font::Bold)
        );
    }

    #[test]
    fn commit_rebuilds_annotations() {
        let mut editor = EditorBuffer::standard("Hi there");
        editor.apply(&TextEdit::replace(0..2, "#iHi#i"));

        assert_eq!(editor.text(), "#iHi#i there");
        assert_eq!(
            editor.annotations().style_at(2),
            Some(&StyleAttributes::italic())
        );
    }

    #[test]
    fn batch_rebuilds_once_and_notifies_once() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = EditorBuffer::standard("");
        let sink = Rc::clone(&seen);
        editor.on_change(move |text| sink.borrow_mut().push(text.to_string()));

        editor.begin_edit();
        editor.edit(&TextEdit::insert(0, "#u"));
        editor.edit(&TextEdit::insert(2, "word#u "));
        assert_eq!(editor.state(), EditState::Editing);
        assert!(editor.annotations().is_empty());
        assert!(editor.commit());

        assert_eq!(editor.state(), EditState::Idle);
        assert_eq!(*seen.borrow(), vec!["#uword#u ".to_string()]);
        assert_eq!(
            editor.annotations().style_at(3),
            Some(&StyleAttributes::underline())
        );
    }

    #[test]
    fn unchanged_commit_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut editor = EditorBuffer::standard("same");
        let counter = Rc::clone(&count);
        editor.on_change(move |_| *counter.borrow_mut() += 1);

        assert!(!editor.replace_all("same"));
        assert!(!editor.commit());
        assert!(editor.replace_all("different"));
        assert_eq!(*count.borrow(), 1);
    }
}
