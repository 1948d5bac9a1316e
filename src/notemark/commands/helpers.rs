use crate::error::{NotemarkError, Result};
use crate::model::{NoteRecord, UserId};
use crate::store::DocumentStore;
use uuid::Uuid;

/// Fetch a note and check it belongs to `owner`. Someone else's note is
/// reported as missing.
pub fn owned_note<S: DocumentStore>(store: &S, owner: &UserId, id: &Uuid) -> Result<NoteRecord> {
    let note = store.get(id)?;
    if &note.owner != owner {
        return Err(NotemarkError::NoteNotFound(*id));
    }
    Ok(note)
}

/// Resolve a full uuid or a unique prefix of one among `owner`'s notes.
pub fn resolve_id<S: DocumentStore>(store: &S, owner: &UserId, input: &str) -> Result<Uuid> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Err(NotemarkError::Api("Note id cannot be empty".to_string()));
    }
    if let Ok(id) = Uuid::parse_str(&needle) {
        return owned_note(store, owner, &id).map(|n| n.id);
    }

    let matches: Vec<Uuid> = store
        .list(owner)?
        .into_iter()
        .map(|n| n.id)
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(NotemarkError::Api(format!("No note matches id {}", input))),
        _ => Err(NotemarkError::Api(format!(
            "Id {} is ambiguous ({} notes match)",
            input,
            matches.len()
        ))),
    }
}

/// Display form of an id: its first eight hex digits.
pub fn short_id(id: &Uuid) -> String {
    id.simple().to_string()[..8].to_string()
}
