//! # Command Layer
//!
//! Pure notes business logic, one operation per file. Commands operate on a
//! [`DocumentStore`](crate::store::DocumentStore) and return a [`CmdResult`]
//! describing what happened. They never print.

use crate::model::NoteRecord;
use uuid::Uuid;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod pinning;
pub mod prune;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Which part of the notes list a note belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Pinned,
    Notes,
}

#[derive(Debug, Clone)]
pub struct ListedNote {
    pub note: NoteRecord,
    pub section: Section,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub created: Option<Uuid>,
    pub affected_notes: Vec<NoteRecord>,
    pub listed_notes: Vec<ListedNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_created(mut self, id: Uuid) -> Self {
        self.created = Some(id);
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<NoteRecord>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<ListedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
