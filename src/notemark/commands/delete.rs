use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DocumentStore;
use uuid::Uuid;

use super::helpers::{owned_note, short_id};

pub fn run<S: DocumentStore>(store: &S, owner: &UserId, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let note = owned_note(store, owner, id)?;
        store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            short_id(id),
            note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotemarkError;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn removes_note() {
        let fx = StoreFixture::new().with_note("A", "a", 1).with_note("B", "b", 2);
        let a = fx.id_of("A");

        let result = run(&fx.store, &fx.owner, &[a]).unwrap();
        assert_eq!(result.affected_notes.len(), 1);
        assert!(matches!(fx.store.get(&a), Err(NotemarkError::NoteNotFound(_))));
        assert_eq!(fx.store.list(&fx.owner).unwrap().len(), 1);
    }
}
