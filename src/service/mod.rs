//! Word-of-the-day acquisition pipeline.
//!
//! Resolves today's [`WordEntry`] from the day cache or, on a miss, from the two lookup
//! services with a bounded retry loop. The caller always gets a [`LoadOutcome`]; lookup
//! and storage failures are recovered here and only logged.

use crate::cache::DayCache;
use crate::clock::Clock;
use crate::model::{DayKey, LookupError, StorageError, WordEntry};
use crate::provider::{DefinitionProvider, RandomWordProvider};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Default bound on acquisition attempts per cold load.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// What to hand back when the random word service itself fails.
///
/// Exhausting all attempts always yields the fallback entry. A failing random word
/// service ends acquisition immediately; this policy picks what the caller sees then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportFailurePolicy {
    /// Report [`LoadOutcome::Unavailable`].
    #[default]
    Absent,
    /// Report [`LoadOutcome::Fallback`], exactly as if attempts ran out.
    Fallback,
}

/// Tuning for the acquisition loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionOptions {
    /// Maximum random-word + definition attempts. Values below 1 are treated as 1.
    pub max_attempts: u32,
    /// Behavior when the random word service fails.
    pub on_word_transport_failure: TransportFailurePolicy,
}

impl Default for AcquisitionOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_word_transport_failure: TransportFailurePolicy::default(),
        }
    }
}

/// Result of [`WordOfDayService::load_for_today`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Today's record was already cached. No network calls were made.
    Cached(WordEntry),
    /// A new word was acquired and written to the cache.
    Fetched {
        /// The new entry.
        entry: WordEntry,
        /// Attempts consumed, including the successful one.
        attempts: u32,
    },
    /// No word could be acquired; the static fallback was substituted and not cached.
    Fallback {
        /// The fallback entry for today.
        entry: WordEntry,
        /// Attempts consumed.
        attempts: u32,
    },
    /// The random word service failed and policy says to report it.
    Unavailable {
        /// Day the load was for.
        day: DayKey,
        /// Why acquisition stopped.
        reason: String,
    },
}

impl LoadOutcome {
    /// The entry, if one was produced.
    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            LoadOutcome::Cached(entry)
            | LoadOutcome::Fetched { entry, .. }
            | LoadOutcome::Fallback { entry, .. } => Some(entry),
            LoadOutcome::Unavailable { .. } => None,
        }
    }

    /// Consume into the entry, if one was produced.
    pub fn into_entry(self) -> Option<WordEntry> {
        match self {
            LoadOutcome::Cached(entry)
            | LoadOutcome::Fetched { entry, .. }
            | LoadOutcome::Fallback { entry, .. } => Some(entry),
            LoadOutcome::Unavailable { .. } => None,
        }
    }

    /// Acquisition attempts consumed (0 for a cache hit or an unavailable service before
    /// any word arrived).
    pub fn attempts(&self) -> u32 {
        match self {
            LoadOutcome::Fetched { attempts, .. } | LoadOutcome::Fallback { attempts, .. } => {
                *attempts
            }
            LoadOutcome::Cached(_) | LoadOutcome::Unavailable { .. } => 0,
        }
    }
}

/// Anything that can resolve the word of the day and be reset.
///
/// Implemented by [`WordOfDayService`]; the TUI depends only on this.
pub trait WordOfDay {
    /// Resolve today's word.
    fn load_for_today(&mut self) -> LoadOutcome;

    /// Forget the cached word so the next load acquires a new one.
    ///
    /// # Errors
    ///
    /// `StorageError` if the cache could not be cleared.
    fn reset(&mut self) -> Result<(), StorageError>;
}

/// Orchestrates cache lookup, bounded acquisition and cache write-back.
pub struct WordOfDayService<R, D, C, K> {
    words: R,
    dictionary: D,
    cache: C,
    clock: K,
    options: AcquisitionOptions,
}

impl<R, D, C, K> WordOfDayService<R, D, C, K>
where
    R: RandomWordProvider,
    D: DefinitionProvider,
    C: DayCache,
    K: Clock,
{
    /// Assemble a service from its collaborators.
    pub fn new(words: R, dictionary: D, cache: C, clock: K, options: AcquisitionOptions) -> Self {
        Self {
            words,
            dictionary,
            cache,
            clock,
            options,
        }
    }

    /// The cache this service writes to.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Resolve today's word of the day.
    ///
    /// 1. A cached record for today is returned as is.
    /// 2. Otherwise up to `max_attempts` attempts: fetch a random word, look it up. A word
    ///    the dictionary does not know (or that has no usable senses) consumes the
    ///    attempt. The first hit is cached and returned.
    /// 3. Exhausted attempts yield the fallback entry, which is never cached.
    ///
    /// A random word service failure stops the loop; see [`TransportFailurePolicy`].
    pub fn load_for_today(&mut self) -> LoadOutcome {
        let today = self.clock.today();

        if let Some(entry) = self.cached_for(today) {
            info!(word = %entry.word, day = %today, "Using cached word of the day");
            return LoadOutcome::Cached(entry);
        }

        self.acquire(today)
    }

    /// Clear the cache slot.
    ///
    /// # Errors
    ///
    /// `StorageError` if the record could not be removed.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        info!("Clearing cached word of the day");
        self.cache.clear()
    }

    fn cached_for(&self, today: DayKey) -> Option<WordEntry> {
        match self.cache.get() {
            Ok(Some(entry)) if entry.produced_for == today => Some(entry),
            Ok(Some(entry)) => {
                debug!(cached_day = %entry.produced_for, day = %today, "Cached word is stale");
                None
            }
            Ok(None) => None,
            Err(error) => {
                warn!(%error, "Failed to read cached word; treating as a miss");
                None
            }
        }
    }

    fn acquire(&mut self, today: DayKey) -> LoadOutcome {
        let max_attempts = self.options.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let word = match self.words.random_word() {
                Ok(word) => word,
                Err(error) => return self.word_service_failed(today, attempt, &error),
            };
            debug!(attempt, %word, "Fetched candidate word");

            match self.dictionary.define(&word) {
                Ok(found) => match found.into_word_entry(word.as_str(), today) {
                    Some(entry) => {
                        self.store(&entry);
                        info!(word = %entry.word, attempts = attempt, "Acquired word of the day");
                        return LoadOutcome::Fetched {
                            entry,
                            attempts: attempt,
                        };
                    }
                    None => debug!(attempt, %word, "Dictionary entry has no definitions"),
                },
                Err(LookupError::NotFound { .. }) => {
                    debug!(attempt, %word, "Word not in dictionary");
                }
                Err(error) => {
                    warn!(attempt, %word, %error, "Definition lookup failed");
                }
            }
        }

        info!(attempts = max_attempts, "No word acquired; using fallback entry");
        LoadOutcome::Fallback {
            entry: WordEntry::fallback(today),
            attempts: max_attempts,
        }
    }

    fn word_service_failed(&self, today: DayKey, attempt: u32, error: &LookupError) -> LoadOutcome {
        warn!(attempt, %error, "Random word lookup failed; abandoning acquisition");
        match self.options.on_word_transport_failure {
            TransportFailurePolicy::Absent => LoadOutcome::Unavailable {
                day: today,
                reason: error.to_string(),
            },
            TransportFailurePolicy::Fallback => LoadOutcome::Fallback {
                entry: WordEntry::fallback(today),
                attempts: attempt,
            },
        }
    }

    fn store(&mut self, entry: &WordEntry) {
        if let Err(error) = self.cache.set(entry) {
            warn!(%error, word = %entry.word, "Failed to cache word of the day");
        }
    }
}

impl<R, D, C, K> WordOfDay for WordOfDayService<R, D, C, K>
where
    R: RandomWordProvider,
    D: DefinitionProvider,
    C: DayCache,
    K: Clock,
{
    fn load_for_today(&mut self) -> LoadOutcome {
        WordOfDayService::load_for_today(self)
    }

    fn reset(&mut self) -> Result<(), StorageError> {
        WordOfDayService::reset(self)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
