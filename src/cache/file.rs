//! JSON file backed day cache.

use super::DayCache;
use crate::model::{StorageError, WordEntry};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Cache file name inside the data directory.
pub const CACHE_FILE_NAME: &str = "word_of_the_day.json";

/// Resolve the default cache path.
///
/// Returns `<data_dir>/lexicon/word_of_the_day.json`, falling back to the current
/// directory when no data directory can be determined.
pub fn default_cache_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("lexicon").join(CACHE_FILE_NAME)
    } else {
        PathBuf::from(CACHE_FILE_NAME)
    }
}

/// Day cache stored as one JSON file.
///
/// Writes go to a temporary file in the same directory which is then renamed over the
/// record, so readers never see a half-written record.
#[derive(Debug, Clone)]
pub struct FileDayCache {
    path: PathBuf,
}

impl FileDayCache {
    /// Cache stored at `path`. Nothing is touched until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DayCache for FileDayCache {
    fn get(&self) -> Result<Option<WordEntry>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let entry = serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        Ok(Some(entry))
    }

    fn set(&mut self, entry: &WordEntry) -> Result<(), StorageError> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.io_error(e))?;

        let temp = NamedTempFile::new_in(&parent).map_err(|e| self.io_error(e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, entry).map_err(|e| StorageError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
            writer.flush().map_err(|e| self.io_error(e))?;
        }
        temp.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;

        debug!(path = %self.path.display(), word = %entry.word, "Cached word of the day");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared cached word");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
