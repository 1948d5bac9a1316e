use super::backend::StorageBackend;
use crate::error::{NotemarkError, Result};
use crate::model::NoteRecord;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend.
///
/// Uses `RefCell` for interior mutability since an editing session is
/// single-threaded.
#[derive(Default)]
pub struct MemBackend {
    notes: RefCell<HashMap<Uuid, NoteRecord>>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl StorageBackend for MemBackend {
    fn load_notes(&self) -> Result<HashMap<Uuid, NoteRecord>> {
        Ok(self.notes.borrow().clone())
    }

    fn save_notes(&self, notes: &HashMap<Uuid, NoteRecord>) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(NotemarkError::Store("Simulated write error".to_string()));
        }
        *self.notes.borrow_mut() = notes.clone();
        Ok(())
    }
}
