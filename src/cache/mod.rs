//! Single-slot day cache.
//!
//! Holds at most one [`WordEntry`]. Writing replaces whatever was there; there is no
//! history and no eviction beyond "last write wins". Freshness is decided by the caller
//! by comparing the entry's day with today.

pub mod file;
pub mod memory;

pub use file::FileDayCache;
pub use memory::MemoryDayCache;

use crate::model::{StorageError, WordEntry};

/// Persistence collaborator for the word of the day.
pub trait DayCache {
    /// Read the stored record, if any.
    ///
    /// # Errors
    ///
    /// `StorageError` if the slot exists but cannot be read or decoded.
    fn get(&self) -> Result<Option<WordEntry>, StorageError>;

    /// Replace the stored record.
    ///
    /// # Errors
    ///
    /// `StorageError` if the record could not be written.
    fn set(&mut self, entry: &WordEntry) -> Result<(), StorageError>;

    /// Remove the stored record. Clearing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// `StorageError` if the record exists but could not be removed.
    fn clear(&mut self) -> Result<(), StorageError>;
}
