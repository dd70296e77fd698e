//! External lookup services.
//!
//! Acquisition chains two services: one hands out a random candidate word, the other
//! looks that word up in a dictionary. Both sit behind traits so the acquisition loop can
//! be driven by scripted providers in tests.

pub mod http;
pub mod wire;

pub use http::{HttpDefinitionProvider, HttpRandomWordProvider};

use crate::model::{DayKey, LookupError, Meaning, WordEntry};

/// Hands out one candidate word per call.
pub trait RandomWordProvider {
    /// Fetch a candidate word.
    ///
    /// # Errors
    ///
    /// `LookupError::Transport` or `LookupError::Decode` when no word could be obtained.
    fn random_word(&mut self) -> Result<String, LookupError>;
}

/// Looks words up in a dictionary.
pub trait DefinitionProvider {
    /// Fetch the dictionary entry for `word`.
    ///
    /// # Errors
    ///
    /// `LookupError::NotFound` when the dictionary has no entry for the word. Any other
    /// variant means the lookup itself failed.
    fn define(&mut self, word: &str) -> Result<DictionaryEntry, LookupError>;
}

/// What the dictionary knows about a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Phonetic spelling, empty if unknown.
    pub phonetic: String,
    /// Senses in dictionary order.
    pub meanings: Vec<Meaning>,
}

impl DictionaryEntry {
    /// Build the word of the day for `day`.
    ///
    /// Meanings without definitions are dropped. Returns `None` when nothing browsable is
    /// left, which callers treat the same as "not found".
    pub fn into_word_entry(self, word: impl Into<String>, day: DayKey) -> Option<WordEntry> {
        let entry = WordEntry {
            word: word.into(),
            phonetic: self.phonetic,
            meanings: self
                .meanings
                .into_iter()
                .filter(|m| !m.definitions.is_empty())
                .collect(),
            produced_for: day,
        };

        Some(entry).filter(WordEntry::is_browsable)
    }
}
