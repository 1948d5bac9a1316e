//! # Edit Session
//!
//! An [`EditSession`] is one open note: its [`EditorBuffer`], seeded from the
//! document store, plus the wiring that sends every committed change back to
//! the store.
//!
//! Store writes are fire-and-forget. The editing path never waits on them and
//! never sees their errors; failures are logged and counted so the caller can
//! surface them later. The annotation engine and the store are separate
//! failure domains.

use crate::buffer::{EditorBuffer, TextEdit};
use crate::error::Result;
use crate::markup::{AnnotationStore, RuleTable, Scanner};
use crate::model::{NoteFields, UserId};
use crate::store::DocumentStore;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

pub struct EditSession<S: DocumentStore + 'static> {
    store: Rc<S>,
    id: Uuid,
    title: String,
    editor: EditorBuffer,
    failed_updates: Rc<Cell<usize>>,
}

impl<S: DocumentStore + 'static> EditSession<S> {
    /// Open `id` for editing. Fails if the note is missing or not `owner`'s.
    pub fn open(
        store: Rc<S>,
        owner: &UserId,
        id: Uuid,
        rules: Arc<RuleTable>,
        scanner: Scanner,
    ) -> Result<Self> {
        let note = crate::commands::helpers::owned_note(&*store, owner, &id)?;
        let failed_updates = Rc::new(Cell::new(0));

        let mut editor = EditorBuffer::new(note.text, rules, scanner);
        let sink = Rc::clone(&store);
        let failures = Rc::clone(&failed_updates);
        editor.on_change(move |text| {
            push_update(&*sink, &id, NoteFields::text(text), &failures);
        });

        tracing::debug!(%id, "edit session opened");
        Ok(Self {
            store,
            id,
            title: note.title,
            editor,
            failed_updates,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }

    pub fn annotations(&self) -> &AnnotationStore {
        self.editor.annotations()
    }

    pub fn editor(&self) -> &EditorBuffer {
        &self.editor
    }

    /// Direct access for batched edits (`begin_edit` / `edit` / `commit`).
    pub fn editor_mut(&mut self) -> &mut EditorBuffer {
        &mut self.editor
    }

    pub fn apply(&mut self, edit: &TextEdit) -> bool {
        self.editor.apply(edit)
    }

    pub fn replace_text(&mut self, text: impl Into<String>) -> bool {
        self.editor.replace_all(text)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if title == self.title {
            return;
        }
        self.title = title;
        push_update(
            &*self.store,
            &self.id,
            NoteFields::title(self.title.clone()),
            &self.failed_updates,
        );
    }

    /// Store writes that failed since the session was opened.
    pub fn failed_updates(&self) -> usize {
        self.failed_updates.get()
    }

    /// End the session. Returns the number of failed store writes.
    pub fn close(self) -> usize {
        tracing::debug!(id = %self.id, "edit session closed");
        self.failed_updates.get()
    }
}

fn push_update<S: DocumentStore + ?Sized>(store: &S, id: &Uuid, fields: NoteFields, failures: &Cell<usize>) {
    if let Err(e) = store.update(id, fields) {
        failures.set(failures.get() + 1);
        tracing::warn!(%id, error = %e, "note update failed");
    }
}
