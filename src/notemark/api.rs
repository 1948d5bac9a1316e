//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point a front end uses for notes, whatever that front end is.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Binds** every call to one owner, so commands never mix accounts
//! - **Normalizes inputs** (uuid prefixes to ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//! - **Opens edit sessions** with the configured rule table and scanner
//!
//! It does no printing and holds no business logic of its own.
//!
//! ## Generic Over DocumentStore
//!
//! `NotesApi<S: DocumentStore>` is generic over the store:
//! - CLI: `NotesApi<FileDocumentStore>`
//! - Testing: `NotesApi<InMemoryDocumentStore>`

use crate::commands::{self, CmdResult};
use crate::config::NotemarkConfig;
use crate::error::Result;
use crate::markup::{RuleTable, Scanner};
use crate::model::UserId;
use crate::session::EditSession;
use crate::store::{DocumentStore, Subscription};
use std::rc::Rc;
use std::sync::Arc;
use uuid::Uuid;

pub struct NotesApi<S: DocumentStore + 'static> {
    store: Rc<S>,
    owner: UserId,
    default_title: String,
    rules: Arc<RuleTable>,
    scanner: Scanner,
}

impl<S: DocumentStore + 'static> NotesApi<S> {
    pub fn new(store: S, owner: UserId, config: &NotemarkConfig) -> Self {
        Self {
            store: Rc::new(store),
            owner,
            default_title: config.default_title.clone(),
            rules: Arc::new(config.rule_table()),
            scanner: config.scanner(),
        }
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn scanner(&self) -> Scanner {
        self.scanner
    }

    /// Live snapshots of this owner's notes.
    pub fn subscribe(&self) -> Result<Subscription> {
        self.store.subscribe(&self.owner)
    }

    /// Add a blank note with the configured default title.
    pub fn add_note(&self) -> Result<CmdResult> {
        commands::create::run(&*self.store, &self.owner, &self.default_title, "")
    }

    pub fn create_note(&self, title: Option<&str>, text: &str) -> Result<CmdResult> {
        let title = title.unwrap_or(&self.default_title);
        commands::create::run(&*self.store, &self.owner, title, text)
    }

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&*self.store, &self.owner)
    }

    pub fn search_notes(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&*self.store, &self.owner, query)
    }

    pub fn update_title(&self, id: &str, title: &str) -> Result<CmdResult> {
        let id = self.resolve(id)?;
        commands::update::update_title(&*self.store, &self.owner, &id, title)
    }

    pub fn update_text(&self, id: &str, text: &str) -> Result<CmdResult> {
        let id = self.resolve(id)?;
        commands::update::update_text(&*self.store, &self.owner, &id, text)
    }

    pub fn pin_notes<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(ids)?;
        commands::pinning::pin(&*self.store, &self.owner, &ids)
    }

    pub fn unpin_notes<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(ids)?;
        commands::pinning::unpin(&*self.store, &self.owner, &ids)
    }

    pub fn delete_notes<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        let ids = self.resolve_all(ids)?;
        commands::delete::run(&*self.store, &self.owner, &ids)
    }

    pub fn prune_empty(&self) -> Result<CmdResult> {
        commands::prune::run(&*self.store, &self.owner)
    }

    /// Open a note for editing.
    pub fn open_note(&self, id: &str) -> Result<EditSession<S>> {
        let id = self.resolve(id)?;
        EditSession::open(
            Rc::clone(&self.store),
            &self.owner,
            id,
            Arc::clone(&self.rules),
            self.scanner,
        )
    }

    pub fn resolve(&self, id: &str) -> Result<Uuid> {
        commands::helpers::resolve_id(&*self.store, &self.owner, id)
    }

    fn resolve_all<I: AsRef<str>>(&self, ids: &[I]) -> Result<Vec<Uuid>> {
        ids.iter().map(|id| self.resolve(id.as_ref())).collect()
    }
}

pub use crate::commands::{CmdMessage, ListedNote, MessageLevel, Section};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::TextEdit;
    use crate::markup::StyleAttributes;
    use crate::store::InMemoryDocumentStore;

    fn api() -> NotesApi<InMemoryDocumentStore> {
        NotesApi::new(
            InMemoryDocumentStore::in_memory(),
            UserId::new("me"),
            &NotemarkConfig::default(),
        )
    }

    #[test]
    fn add_note_uses_default_title() {
        let api = api();
        let id = api.add_note().unwrap().created.unwrap();
        assert_eq!(api.store().get(&id).unwrap().title, "Note");
    }

    #[test]
    fn ids_resolve_from_prefix() {
        let api = api();
        let id = api.create_note(Some("Shopping"), "eggs").unwrap().created.unwrap();
        let prefix = &id.to_string()[..6];

        api.pin_notes(&[prefix]).unwrap();
        assert!(api.store().get(&id).unwrap().pinned);
        api.unpin_notes(&[prefix]).unwrap();
        api.update_title(prefix, "Errands").unwrap();
        assert_eq!(api.store().get(&id).unwrap().title, "Errands");
    }

    #[test]
    fn open_note_edits_through_session() {
        let api = api();
        let id = api.create_note(None, "hello").unwrap().created.unwrap();

        let mut session = api.open_note(&id.to_string()).unwrap();
        session.apply(&TextEdit::replace(0..5, "#shello#s there"));

        assert_eq!(api.store().get(&id).unwrap().text, "#shello#s there");
        assert_eq!(
            session.annotations().style_at(2),
            Some(&StyleAttributes::strikethrough())
        );
    }

    #[test]
    fn configured_boundary_policy_reaches_sessions() {
        let config = NotemarkConfig {
            style_boundary_runs: true,
            ..Default::default()
        };
        let api = NotesApi::new(InMemoryDocumentStore::in_memory(), UserId::new("me"), &config);
        let id = api.create_note(None, "#bend#b").unwrap().created.unwrap();

        let session = api.open_note(&id.to_string()).unwrap();
        assert_eq!(session.annotations().style_at(2), Some(&StyleAttributes::bold()));
    }

    #[test]
    fn subscription_sees_api_writes() {
        let api = api();
        let sub = api.subscribe().unwrap();
        assert_eq!(sub.latest().unwrap().len(), 0);

        api.add_note().unwrap();
        api.prune_empty().unwrap();

        assert!(sub.latest().unwrap().is_empty());
    }
}
