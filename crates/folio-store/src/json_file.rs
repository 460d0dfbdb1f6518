//! JSON-file-backed key-value store.
//!
//! The file holds a single flat JSON object of string values. It is read
//! once on open and rewritten in full on every mutation, which matches the
//! write-through semantics of browser local storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_types::error::{FolioError, Result};

use crate::KeyValueStore;

/// A key-value store persisted as a JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`. A missing file yields an empty store; the
    /// file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                parse_entries(&text)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened store {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Parse a flat JSON object, rejecting non-string values.
fn parse_entries(text: &str) -> Result<BTreeMap<String, String>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Object(map) = value else {
        return Err(FolioError::Store(
            "store file must contain a JSON object".to_string(),
        ));
    };
    let mut entries = BTreeMap::new();
    for (key, value) in map {
        match value {
            serde_json::Value::String(s) => {
                entries.insert(key, s);
            },
            other => {
                return Err(FolioError::Store(format!(
                    "value for '{key}' is not a string: {other}"
                )));
            },
        }
    }
    Ok(entries)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn write_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("portfolio-view-mode", "normal").unwrap();
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            store.get("portfolio-view-mode").unwrap().as_deref(),
            Some("normal")
        );
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/prefs.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.keys().unwrap(), vec!["b"]);
    }

    #[test]
    fn empty_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }

    #[test]
    fn non_object_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, FolioError::Store(_)));
    }

    #[test]
    fn non_string_value_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"portfolio-theme": 7}"#).unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(format!("{err}").contains("portfolio-theme"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }
}
