use crate::commands::{CmdResult, ListedNote, Section};
use crate::error::Result;
use crate::model::UserId;
use crate::store::DocumentStore;

/// Pinned notes first, then the rest; each group most recently edited first.
pub fn run<S: DocumentStore>(store: &S, owner: &UserId) -> Result<CmdResult> {
    let (pinned, rest): (Vec<_>, Vec<_>) = store.list(owner)?.into_iter().partition(|n| n.pinned);

    let listed = pinned
        .into_iter()
        .map(|note| ListedNote {
            note,
            section: Section::Pinned,
        })
        .chain(rest.into_iter().map(|note| ListedNote {
            note,
            section: Section::Notes,
        }))
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn pinned_section_comes_first() {
        let fx = StoreFixture::new()
            .with_note("recent", "a", 1)
            .with_pinned_note("pinned-old", "b", 60)
            .with_note("older", "c", 30)
            .with_pinned_note("pinned-new", "d", 5);

        let result = run(&fx.store, &fx.owner).unwrap();
        let order: Vec<_> = result
            .listed_notes
            .iter()
            .map(|ln| (ln.note.title.as_str(), ln.section))
            .collect();
        assert_eq!(
            order,
            vec![
                ("pinned-new", Section::Pinned),
                ("pinned-old", Section::Pinned),
                ("recent", Section::Notes),
                ("older", Section::Notes),
            ]
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fx = StoreFixture::new();
        assert!(run(&fx.store, &fx.owner).unwrap().listed_notes.is_empty());
    }

    #[test]
    fn listing_keeps_blank_notes() {
        let fx = StoreFixture::new().with_note("blank", "", 1).with_note("kept", "x", 2);

        assert_eq!(run(&fx.store, &fx.owner).unwrap().listed_notes.len(), 2);
        assert_eq!(fx.store.list(&fx.owner).unwrap().len(), 2);
    }
}
