use crate::error::Result;
use crate::model::NoteRecord;
use std::collections::HashMap;
use uuid::Uuid;

/// Raw note storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (ownership, ordering, subscriptions).
pub trait StorageBackend {
    /// Load every note, keyed by id.
    fn load_notes(&self) -> Result<HashMap<Uuid, NoteRecord>>;

    /// Replace the stored notes.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_notes(&self, notes: &HashMap<Uuid, NoteRecord>) -> Result<()>;
}
