//! Dictionary entry types.
//!
//! These mirror what the dictionary service returns, reduced to the fields the viewer
//! uses. The same shape is persisted as the cache record (`word`, `phonetic`, `meanings`,
//! `date`).

use super::DayKey;
use serde::{Deserialize, Serialize};

/// Word shown when acquisition gives up.
pub const FALLBACK_WORD: &str = "Tuff";

const FALLBACK_PHONETIC: &str = "/'tʌf";
const FALLBACK_PART_OF_SPEECH: &str = "noun";
const FALLBACK_DEFINITION: &str = "To express compassion following an unfortunate event, \
e.g. the word of the day cannot be fetched.";

/// A single gloss of a meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The definition text.
    #[serde(rename = "definition")]
    pub text: String,

    /// Usage example, when the dictionary has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Synonyms for this sense.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    /// Antonyms for this sense.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

impl Definition {
    /// Definition with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            example: None,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }

    /// Attach a usage example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// One part-of-speech sense of a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    /// Part of speech, e.g. "noun".
    #[serde(rename = "partOfSpeech")]
    pub part_of_speech: String,

    /// Ordered definitions. Non-empty for any meaning kept in a [`WordEntry`].
    pub definitions: Vec<Definition>,
}

impl Meaning {
    /// Construct a meaning.
    pub fn new(part_of_speech: impl Into<String>, definitions: Vec<Definition>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definitions,
        }
    }
}

/// The word of the day with its dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word itself.
    pub word: String,

    /// Phonetic spelling, empty when the dictionary has none.
    #[serde(default)]
    pub phonetic: String,

    /// Ordered senses. Empty only for a degenerate fallback.
    pub meanings: Vec<Meaning>,

    /// Day this entry was produced for.
    #[serde(rename = "date")]
    pub produced_for: DayKey,
}

impl WordEntry {
    /// The static entry shown when no word could be acquired.
    pub fn fallback(day: DayKey) -> Self {
        Self {
            word: FALLBACK_WORD.to_string(),
            phonetic: FALLBACK_PHONETIC.to_string(),
            meanings: vec![Meaning::new(
                FALLBACK_PART_OF_SPEECH,
                vec![Definition::new(FALLBACK_DEFINITION)],
            )],
            produced_for: day,
        }
    }

    /// True if this is the static fallback entry (for any day).
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback(self.produced_for)
    }

    /// True if every meaning has at least one definition and there is at least one meaning.
    pub fn is_browsable(&self) -> bool {
        !self.meanings.is_empty() && self.meanings.iter().all(|m| !m.definitions.is_empty())
    }

    /// Meaning at `index`.
    pub fn meaning(&self, index: usize) -> Option<&Meaning> {
        self.meanings.get(index)
    }

    /// Definition at `(meaning, definition)`.
    pub fn definition(&self, meaning: usize, definition: usize) -> Option<&Definition> {
        self.meaning(meaning)?.definitions.get(definition)
    }

    /// Number of definitions in meaning `index`, 0 if out of range.
    pub fn definition_count(&self, index: usize) -> usize {
        self.meaning(index).map_or(0, |m| m.definitions.len())
    }
}
