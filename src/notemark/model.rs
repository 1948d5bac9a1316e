use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque account id handed out by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    pub text: String,
    pub pinned: bool,
    pub edited_at: DateTime<Utc>,
}

impl NoteRecord {
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            title: title.into(),
            text: String::new(),
            pinned: false,
            edited_at: Utc::now(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Apply a partial update. Any change to title or text counts as an edit.
    pub fn apply(&mut self, fields: &NoteFields) {
        if let Some(title) = &fields.title {
            self.title = title.clone();
        }
        if let Some(text) = &fields.text {
            self.text = text.clone();
        }
        if !fields.is_empty() {
            self.edited_at = Utc::now();
        }
    }
}

/// Fields to change on an existing note; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    pub title: Option<String>,
    pub text: Option<String>,
}

impl NoteFields {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            text: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: Some(text.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_note_is_empty_and_unpinned() {
        let note = NoteRecord::new(UserId::new("u1"), "Note");
        assert_eq!(note.title, "Note");
        assert!(note.text.is_empty());
        assert!(!note.pinned);
    }

    #[test]
    fn apply_bumps_edited_at() {
        let mut note = NoteRecord::new(UserId::new("u1"), "Note");
        note.edited_at -= Duration::hours(1);
        let before = note.edited_at;

        note.apply(&NoteFields::text("hello"));
        assert_eq!(note.text, "hello");
        assert_eq!(note.title, "Note");
        assert!(note.edited_at > before);
    }

    #[test]
    fn empty_fields_change_nothing() {
        let mut note = NoteRecord::new(UserId::new("u1"), "Note");
        let before = note.clone();
        note.apply(&NoteFields::default());
        assert_eq!(note, before);
    }
}
