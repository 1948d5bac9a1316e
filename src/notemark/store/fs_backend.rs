use super::backend::StorageBackend;
use crate::error::{NotemarkError, Result};
use crate::model::NoteRecord;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const NOTES_FILENAME: &str = "notes.json";

/// Keeps every note in `<root>/notes.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(NOTES_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotemarkError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_notes(&self) -> Result<HashMap<Uuid, NoteRecord>> {
        let path = self.notes_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(NotemarkError::Io)?;
        let notes: HashMap<Uuid, NoteRecord> =
            serde_json::from_str(&content).map_err(NotemarkError::Serialization)?;
        Ok(notes)
    }

    fn save_notes(&self, notes: &HashMap<Uuid, NoteRecord>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(notes).map_err(NotemarkError::Serialization)?;

        let tmp_file = self.root.join(format!(".notes-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(NotemarkError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.notes_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotemarkError::Io(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    #[test]
    fn missing_file_loads_empty() {
        let temp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(temp.path().join("nested"));
        assert!(backend.load_notes().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_notes_and_leaves_no_tmp_files() {
        let temp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(temp.path().join("data"));

        let note = NoteRecord::new(UserId::new("u1"), "Groceries").with_text("#beggs#b and milk");
        let mut notes = HashMap::new();
        notes.insert(note.id, note.clone());
        backend.save_notes(&notes).unwrap();

        let loaded = backend.load_notes().unwrap();
        assert_eq!(loaded.get(&note.id), Some(&note));

        let leftovers: Vec<_> = fs::read_dir(backend.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let temp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(temp.path());
        fs::create_dir(backend.notes_path()).unwrap();
        fs::write(backend.notes_path().join("keep"), "x").unwrap();

        let note = NoteRecord::new(UserId::new("u1"), "Groceries");
        let notes = HashMap::from([(note.id, note)]);
        assert!(matches!(backend.save_notes(&notes), Err(NotemarkError::Io(_))));

        let leftovers: Vec<_> = fs::read_dir(backend.root())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let temp = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(temp.path());
        fs::write(backend.notes_path(), "{not json").unwrap();

        assert!(matches!(
            backend.load_notes(),
            Err(NotemarkError::Serialization(_))
        ));
    }
}
