//! JSON-file store implementation

use bookshelf_api::Book;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{BookStore, StoreError, StoreResult};

/// Library persisted as a single JSON array in a file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new content is written to before the rename
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("library"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_temp(&self, tmp: &Path, books: &[Book]) -> StoreResult<()> {
        let file = File::create(tmp)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, books)?;
        writer.write_all(b"\n")?;

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()?;
        Ok(())
    }
}

/// Remove a leftover temp file. One that was never created is not an error.
fn discard_temp(tmp: &Path) -> io::Result<()> {
    match fs::remove_file(tmp) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> StoreResult<Option<Vec<Book>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No library file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "Library file is empty");
            return Ok(Some(Vec::new()));
        }

        let entries: Vec<serde_json::Value> = serde_json::from_str(&content)?;
        let missing_ids = entries.iter().filter(|e| e.get("id").is_none()).count();
        let books = entries
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Book>, _>>()?;
        debug!(path = %self.path.display(), count = books.len(), "Library file read");

        // Records without an id were given one during parsing; write them
        // back so the ids stay the same on the next load
        if missing_ids > 0 {
            match self.save(&books) {
                Ok(()) => info!(path = %self.path.display(), missing_ids, "Assigned ids to books"),
                Err(e) => warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to persist assigned ids"
                ),
            }
        }

        Ok(Some(books))
    }

    fn save(&self, books: &[Book]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        let result = self
            .write_temp(&tmp, books)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(StoreError::from));

        if let Err(e) = result {
            if let Err(cleanup) = discard_temp(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e);
        }

        debug!(path = %self.path.display(), count = books.len(), "Library file written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_api::Genre;
    use bookshelf_util::{BookId, parse_timestamp};

    fn book(title: &str, author: &str, read: bool) -> Book {
        Book {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            publication_year: 1990,
            genre: Genre::new("Fiction"),
            read_status: read,
            added_date: parse_timestamp("2025-06-01 12:00:00").unwrap(),
        }
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("library.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("library.json"));

        let books = vec![book("Dune", "Frank Herbert", true), book("Emma", "Jane Austen", false)];
        store.save(&books).unwrap();

        assert_eq!(store.load().unwrap(), Some(books));
    }

    #[test]
    fn empty_sequence_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("library.json"));

        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn save_creates_parent_directories_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("library.json");
        let store = JsonFileStore::new(&path);

        store.save(&[book("Dune", "Frank Herbert", true)]).unwrap();

        assert!(path.exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "[{\"title\": ").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn whitespace_file_is_an_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(&path, "\n  \n").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn reads_files_without_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        fs::write(
            &path,
            r#"[{"title": "Dune", "author": "Frank Herbert", "publication_year": 1965,
                 "genre": "Fiction", "read_status": true, "added_date": "2024-02-03 04:05:06"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let books = store.load().unwrap().unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].added_date, parse_timestamp("2024-02-03 04:05:06").unwrap());

        // The assigned id is on disk and comes back unchanged
        assert!(fs::read_to_string(&path).unwrap().contains(&books[0].id.to_string()));
        assert_eq!(store.load().unwrap(), Some(books));
    }

    #[test]
    fn files_with_ids_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let store = JsonFileStore::new(&path);
        store.save(&[book("Dune", "Frank Herbert", true)]).unwrap();

        // Compact form on disk; a rewrite would pretty-print it
        let books = store.load().unwrap().unwrap();
        let compact = serde_json::to_string(&books).unwrap();
        fs::write(&path, &compact).unwrap();

        store.load().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), compact);
    }

    #[test]
    fn unwritable_parent_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // The parent is a regular file, so neither the directory nor the
        // temp file can be created
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let store = JsonFileStore::new(blocker.join("library.json"));
        assert!(matches!(store.save(&[]), Err(StoreError::Io(_))));
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn discarding_a_missing_temp_file_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        let tmp = dir.path().join("library.json.tmp");
        assert!(discard_temp(&tmp).is_ok());

        fs::write(&tmp, "partial").unwrap();
        discard_temp(&tmp).unwrap();
        assert!(!tmp.exists());

        // Anything other than "not there" is still reported
        fs::create_dir(&tmp).unwrap();
        assert!(discard_temp(&tmp).is_err());
    }

    #[test]
    fn save_into_a_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("library.json");
        fs::create_dir(&target).unwrap();

        // The target is an existing directory, so the rename cannot replace it
        let store = JsonFileStore::new(&target);
        assert!(store.save(&[book("Dune", "Frank Herbert", true)]).is_err());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn added_date_timestamp_format_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library.json");
        let store = JsonFileStore::new(&path);
        store.save(&[book("Dune", "Frank Herbert", true)]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"added_date\": \"2025-06-01 12:00:00\""));
    }
}
