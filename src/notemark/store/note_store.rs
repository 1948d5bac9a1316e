use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::subscription::{SharedSubscribers, Subscribers, Subscription};
use super::{sort_snapshot, DocumentStore};
use crate::error::{NotemarkError, Result};
use crate::model::{NoteFields, NoteRecord, UserId};
use std::collections::HashMap;
use std::path::PathBuf;
use uuid::Uuid;

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    subscribers: SharedSubscribers,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            subscribers: SharedSubscribers::default(),
        }
    }

    /// Load, change one note, save, then tell the owner's subscribers.
    fn modify<F>(&self, id: &Uuid, change: F) -> Result<()>
    where
        F: FnOnce(&mut NoteRecord),
    {
        let mut notes = self.backend.load_notes()?;
        let note = notes.get_mut(id).ok_or(NotemarkError::NoteNotFound(*id))?;
        change(note);
        let owner = note.owner.clone();
        self.backend.save_notes(&notes)?;
        self.publish(&owner, &notes);
        Ok(())
    }

    fn publish(&self, owner: &UserId, notes: &HashMap<Uuid, NoteRecord>) {
        let mut subscribers = self.subscribers.borrow_mut();
        if !subscribers.watches(owner) {
            return;
        }
        subscribers.publish(owner, &snapshot_of(owner, notes));
    }
}

impl NoteStore<MemBackend> {
    pub fn in_memory() -> Self {
        Self::with_backend(MemBackend::new())
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.backend.set_simulate_write_error(simulate);
    }
}

impl NoteStore<FsBackend> {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::with_backend(FsBackend::new(root))
    }
}

fn snapshot_of(owner: &UserId, notes: &HashMap<Uuid, NoteRecord>) -> Vec<NoteRecord> {
    let mut owned: Vec<NoteRecord> = notes
        .values()
        .filter(|n| &n.owner == owner)
        .cloned()
        .collect();
    sort_snapshot(&mut owned);
    owned
}

impl<B: StorageBackend> DocumentStore for NoteStore<B> {
    fn subscribe(&self, owner: &UserId) -> Result<Subscription> {
        let initial = snapshot_of(owner, &self.backend.load_notes()?);
        Ok(Subscribers::add(&self.subscribers, owner, initial))
    }

    fn create(&self, note: NoteRecord) -> Result<Uuid> {
        let mut notes = self.backend.load_notes()?;
        if notes.contains_key(&note.id) {
            return Err(NotemarkError::Store(format!(
                "Note {} already exists",
                note.id
            )));
        }
        let id = note.id;
        let owner = note.owner.clone();
        notes.insert(id, note);
        self.backend.save_notes(&notes)?;
        self.publish(&owner, &notes);
        Ok(id)
    }

    fn get(&self, id: &Uuid) -> Result<NoteRecord> {
        self.backend
            .load_notes()?
            .remove(id)
            .ok_or(NotemarkError::NoteNotFound(*id))
    }

    fn list(&self, owner: &UserId) -> Result<Vec<NoteRecord>> {
        Ok(snapshot_of(owner, &self.backend.load_notes()?))
    }

    fn update(&self, id: &Uuid, fields: NoteFields) -> Result<()> {
        self.modify(id, |note| note.apply(&fields))
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut notes = self.backend.load_notes()?;
        let removed = notes.remove(id).ok_or(NotemarkError::NoteNotFound(*id))?;
        self.backend.save_notes(&notes)?;
        self.publish(&removed.owner, &notes);
        Ok(())
    }

    fn set_pinned(&self, id: &Uuid, pinned: bool) -> Result<()> {
        self.modify(id, |note| note.pinned = pinned)
    }
}
