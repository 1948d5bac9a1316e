use crate::commands::{CmdResult, ListedNote, Section};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DocumentStore;

/// Notes whose text contains `query`, ignoring case. An empty query finds
/// nothing rather than everything.
pub fn run<S: DocumentStore>(store: &S, owner: &UserId, query: &str) -> Result<CmdResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Ok(CmdResult::default());
    }

    let listed = store
        .list(owner)?
        .into_iter()
        .filter(|n| n.text.to_lowercase().contains(&query))
        .map(|note| {
            let section = if note.pinned {
                Section::Pinned
            } else {
                Section::Notes
            };
            ListedNote { note, section }
        })
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn matches_text_case_insensitively() {
        let fx = StoreFixture::new()
            .with_note("one", "Buy #bMILK#b today", 2)
            .with_note("two", "call mom", 1)
            .with_note("milk", "nothing here", 3);

        let result = run(&fx.store, &fx.owner, "milk").unwrap();
        let titles: Vec<_> = result
            .listed_notes
            .iter()
            .map(|ln| ln.note.title.as_str())
            .collect();
        assert_eq!(titles, ["one"]);
    }

    #[test]
    fn empty_query_returns_nothing() {
        let fx = StoreFixture::new().with_note("one", "text", 1);
        assert!(run(&fx.store, &fx.owner, "   ").unwrap().listed_notes.is_empty());
    }
}
