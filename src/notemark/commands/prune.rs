use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DocumentStore;

/// Delete every note with no text. Listing never prunes; the CLI runs this
/// only through its `prune` command.
///
/// A failed delete does not stop the sweep; it is reported as an error
/// message and the remaining notes are still checked.
pub fn run<S: DocumentStore>(store: &S, owner: &UserId) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for note in store.list(owner)?.into_iter().filter(|n| n.text.is_empty()) {
        match store.delete(&note.id) {
            Ok(()) => result.affected_notes.push(note),
            Err(e) => {
                tracing::warn!(id = %note.id, error = %e, "could not prune empty note");
                result.add_message(CmdMessage::error(format!(
                    "Could not remove empty note {}: {}",
                    note.title, e
                )));
            }
        }
    }

    if !result.affected_notes.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Removed {} empty note(s)",
            result.affected_notes.len()
        )));
    }
    Ok(result)
}
