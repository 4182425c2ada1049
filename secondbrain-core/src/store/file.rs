use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::Store;
use crate::error::{CoreError, CoreResult};

/// A store backed by a single JSON object file.
///
/// The file is read once when opened and rewritten on every change. Writes
/// go to a temporary file in the same directory, then replace the store
/// file in one rename, so a cut-off write never leaves it truncated.
#[derive(Debug, PartialEq, Eq)]
pub struct FileStore {
    backing_file: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> CoreResult<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    CoreError::Store(format!("Unable to read store {}: {}", path.display(), e))
                })?
            }
        } else {
            BTreeMap::new()
        };

        log::debug!("Opened store {} ({} keys)", path.display(), entries.len());

        Ok(FileStore {
            backing_file: path.to_path_buf(),
            entries,
        })
    }

    fn save_to_file(&self) -> CoreResult<()> {
        let dir = match self.backing_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let content = serde_json::to_string_pretty(&self.entries)?;
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.persist(&self.backing_file).map_err(|e| {
            log::warn!("Unable to save store {}: {}", self.backing_file.display(), e);
            CoreError::Io(e.error)
        })?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> CoreResult<()> {
        self.entries.insert(key.to_string(), value);
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> CoreResult<()> {
        if self.entries.remove(key).is_some() {
            self.save_to_file()?;
        }
        Ok(())
    }
}
