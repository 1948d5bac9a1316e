use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NoteFields, UserId};
use crate::store::DocumentStore;
use uuid::Uuid;

use super::helpers::{owned_note, short_id};

pub fn update_title<S: DocumentStore>(
    store: &S,
    owner: &UserId,
    id: &Uuid,
    title: &str,
) -> Result<CmdResult> {
    run(store, owner, id, NoteFields::title(title))
}

pub fn update_text<S: DocumentStore>(
    store: &S,
    owner: &UserId,
    id: &Uuid,
    text: &str,
) -> Result<CmdResult> {
    run(store, owner, id, NoteFields::text(text))
}

fn run<S: DocumentStore>(store: &S, owner: &UserId, id: &Uuid, fields: NoteFields) -> Result<CmdResult> {
    owned_note(store, owner, id)?;
    store.update(id, fields)?;
    let note = store.get(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        short_id(id),
        note.title
    )));
    result.affected_notes.push(note);
    Ok(result)
}
