use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteRecord, UserId};
use crate::store::DocumentStore;

use super::helpers::short_id;

/// Add an unpinned note. The app passes an empty `text` for fresh notes.
pub fn run<S: DocumentStore>(store: &S, owner: &UserId, title: &str, text: &str) -> Result<CmdResult> {
    let note = NoteRecord::new(owner.clone(), title).with_text(text);
    let id = store.create(note.clone())?;

    let mut result = CmdResult::default()
        .with_created(id)
        .with_affected_notes(vec![note]);
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        short_id(&id),
        title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryDocumentStore;

    #[test]
    fn creates_unpinned_note() {
        let store = InMemoryDocumentStore::in_memory();
        let owner = UserId::new("u1");
        let result = run(&store, &owner, "Note", "").unwrap();

        let id = result.created.unwrap();
        let stored = store.get(&id).unwrap();
        assert_eq!(stored.title, "Note");
        assert!(stored.text.is_empty());
        assert!(!stored.pinned);
        assert_eq!(stored.owner, owner);
    }
}
