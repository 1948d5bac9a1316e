//! # Document Store
//!
//! The note database is an external collaborator. This module defines the
//! [`DocumentStore`] interface the rest of the crate talks to, plus two local
//! implementations built on the same [`NoteStore`] core:
//!
//! - [`InMemoryDocumentStore`]: no persistence, used by tests and embedders.
//! - [`FileDocumentStore`]: every note in one `notes.json`, used by the CLI.
//!
//! ## Backend Split
//!
//! [`backend::StorageBackend`] only knows how to load and save the full note
//! map. [`NoteStore`] owns the semantics: ownership filtering, snapshot
//! ordering, `edited_at` bumps, and fan-out to subscribers.
//!
//! ## Subscriptions
//!
//! Listeners do not get callbacks. [`DocumentStore::subscribe`] hands back a
//! [`Subscription`] with its own queue; the store pushes a full, ordered
//! snapshot of the owner's notes into it right away and after every
//! successful write that touches that owner. The owner of the handle drains
//! the queue when it is ready, so a listener can never re-enter the store.
//!
//! All methods take `&self`. Implementations use interior mutability since
//! an editing session is single-threaded.

use crate::error::Result;
use crate::model::{NoteFields, NoteRecord, UserId};
use std::rc::Rc;
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;
pub mod subscription;

pub use note_store::NoteStore;
pub use subscription::Subscription;

pub type InMemoryDocumentStore = NoteStore<mem_backend::MemBackend>;
pub type FileDocumentStore = NoteStore<fs_backend::FsBackend>;

pub trait DocumentStore {
    /// Watch an owner's notes. The current snapshot is queued immediately.
    fn subscribe(&self, owner: &UserId) -> Result<Subscription>;

    /// Store a new note and return its id.
    fn create(&self, note: NoteRecord) -> Result<Uuid>;

    fn get(&self, id: &Uuid) -> Result<NoteRecord>;

    /// An owner's notes, most recently edited first.
    fn list(&self, owner: &UserId) -> Result<Vec<NoteRecord>>;

    /// Change title and/or text; bumps `edited_at`.
    fn update(&self, id: &Uuid, fields: NoteFields) -> Result<()>;

    fn delete(&self, id: &Uuid) -> Result<()>;

    /// Pin state does not count as an edit.
    fn set_pinned(&self, id: &Uuid, pinned: bool) -> Result<()>;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Rc<S> {
    fn subscribe(&self, owner: &UserId) -> Result<Subscription> {
        (**self).subscribe(owner)
    }

    fn create(&self, note: NoteRecord) -> Result<Uuid> {
        (**self).create(note)
    }

    fn get(&self, id: &Uuid) -> Result<NoteRecord> {
        (**self).get(id)
    }

    fn list(&self, owner: &UserId) -> Result<Vec<NoteRecord>> {
        (**self).list(owner)
    }

    fn update(&self, id: &Uuid, fields: NoteFields) -> Result<()> {
        (**self).update(id, fields)
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        (**self).delete(id)
    }

    fn set_pinned(&self, id: &Uuid, pinned: bool) -> Result<()> {
        (**self).set_pinned(id, pinned)
    }
}

/// Most recently edited first; id breaks ties so snapshots are stable.
pub fn sort_snapshot(notes: &mut [NoteRecord]) {
    notes.sort_by(|a, b| b.edited_at.cmp(&a.edited_at).then_with(|| a.id.cmp(&b.id)));
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use chrono::{Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryDocumentStore,
        pub owner: UserId,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryDocumentStore::in_memory(),
                owner: UserId::new("fixture-user"),
            }
        }

        /// Add a note edited `minutes_ago` minutes in the past.
        pub fn with_note(self, title: &str, text: &str, minutes_ago: i64) -> Self {
            let mut note = NoteRecord::new(self.owner.clone(), title).with_text(text);
            note.edited_at = Utc::now() - Duration::minutes(minutes_ago);
            self.store.create(note).unwrap();
            self
        }

        pub fn with_pinned_note(self, title: &str, text: &str, minutes_ago: i64) -> Self {
            let mut note = NoteRecord::new(self.owner.clone(), title).with_text(text);
            note.edited_at = Utc::now() - Duration::minutes(minutes_ago);
            note.pinned = true;
            self.store.create(note).unwrap();
            self
        }

        pub fn with_foreign_note(self, owner: &str, title: &str) -> Self {
            let note = NoteRecord::new(UserId::new(owner), title).with_text("theirs");
            self.store.create(note).unwrap();
            self
        }

        pub fn id_of(&self, title: &str) -> Uuid {
            self.store
                .list(&self.owner)
                .unwrap()
                .into_iter()
                .find(|n| n.title == title)
                .map(|n| n.id)
                .unwrap()
        }
    }
}
