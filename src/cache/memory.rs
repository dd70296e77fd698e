//! In-memory day cache.

use super::DayCache;
use crate::model::{StorageError, WordEntry};

/// Day cache that lives only as long as the process.
///
/// Backs `--no-cache` runs. Tests also use it to count writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryDayCache {
    record: Option<WordEntry>,
    writes: usize,
}

impl MemoryDayCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with `entry`. Does not count as a write.
    pub fn with_record(entry: WordEntry) -> Self {
        Self {
            record: Some(entry),
            writes: 0,
        }
    }

    /// The stored record.
    pub fn record(&self) -> Option<&WordEntry> {
        self.record.as_ref()
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DayCache for MemoryDayCache {
    fn get(&self) -> Result<Option<WordEntry>, StorageError> {
        Ok(self.record.clone())
    }

    fn set(&mut self, entry: &WordEntry) -> Result<(), StorageError> {
        self.record = Some(entry.clone());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayKey;

    #[test]
    fn counts_writes_but_not_seed() {
        let day = DayKey::parse("2024-01-01").unwrap();
        let mut cache = MemoryDayCache::with_record(WordEntry::fallback(day));
        assert_eq!(cache.writes(), 0);

        cache.set(&WordEntry::fallback(day)).unwrap();
        assert_eq!(cache.writes(), 1);

        cache.clear().unwrap();
        assert!(cache.get().unwrap().is_none());
    }
}
