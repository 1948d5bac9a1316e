use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DocumentStore;
use uuid::Uuid;

use super::helpers::{owned_note, short_id};

pub fn pin<S: DocumentStore>(store: &S, owner: &UserId, ids: &[Uuid]) -> Result<CmdResult> {
    pin_state(store, owner, ids, true)
}

pub fn unpin<S: DocumentStore>(store: &S, owner: &UserId, ids: &[Uuid]) -> Result<CmdResult> {
    pin_state(store, owner, ids, false)
}

fn pin_state<S: DocumentStore>(
    store: &S,
    owner: &UserId,
    ids: &[Uuid],
    pinned: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let mut note = owned_note(store, owner, id)?;
        let verb = if pinned { "pinned" } else { "unpinned" };
        if note.pinned == pinned {
            result.add_message(CmdMessage::info(format!(
                "Note already {} ({}): {}",
                verb,
                short_id(id),
                note.title
            )));
            continue;
        }

        store.set_pinned(id, pinned)?;
        note.pinned = pinned;
        result.add_message(CmdMessage::success(format!(
            "Note {} ({}): {}",
            verb,
            short_id(id),
            note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
