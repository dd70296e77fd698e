//! JSON shapes returned by the dictionary service.
//!
//! Only the fields the viewer uses are modelled; everything else is ignored.

use super::DictionaryEntry;
use crate::model::{Definition, Meaning};
use serde::Deserialize;

/// One element of the dictionary response array.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEntry {
    /// Headword as the dictionary spells it.
    #[serde(default)]
    pub word: Option<String>,

    /// Preferred phonetic spelling.
    #[serde(default)]
    pub phonetic: Option<String>,

    /// Alternative phonetic spellings, used when `phonetic` is absent.
    #[serde(default)]
    pub phonetics: Vec<ApiPhonetic>,

    /// Senses.
    #[serde(default)]
    pub meanings: Vec<ApiMeaning>,
}

/// Phonetic variant.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhonetic {
    /// Spelling, may be missing for audio-only variants.
    #[serde(default)]
    pub text: Option<String>,
}

/// One sense.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMeaning {
    /// Part of speech.
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,

    /// Glosses.
    #[serde(default)]
    pub definitions: Vec<ApiDefinition>,
}

/// One gloss.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiDefinition {
    /// Gloss text.
    pub definition: String,

    /// Usage example.
    #[serde(default)]
    pub example: Option<String>,

    /// Synonyms.
    #[serde(default)]
    pub synonyms: Option<Vec<String>>,

    /// Antonyms.
    #[serde(default)]
    pub antonyms: Option<Vec<String>>,
}

impl ApiEntry {
    fn resolved_phonetic(&self) -> String {
        non_blank(self.phonetic.as_deref())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .find_map(|p| non_blank(p.text.as_deref()))
            })
            .unwrap_or_default()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl From<ApiDefinition> for Definition {
    fn from(api: ApiDefinition) -> Self {
        Definition {
            text: api.definition,
            example: api.example.filter(|e| !e.trim().is_empty()),
            synonyms: api.synonyms.unwrap_or_default(),
            antonyms: api.antonyms.unwrap_or_default(),
        }
    }
}

impl From<ApiMeaning> for Meaning {
    fn from(api: ApiMeaning) -> Self {
        Meaning {
            part_of_speech: api.part_of_speech,
            definitions: api.definitions.into_iter().map(Definition::from).collect(),
        }
    }
}

impl From<ApiEntry> for DictionaryEntry {
    fn from(api: ApiEntry) -> Self {
        let phonetic = api.resolved_phonetic();
        DictionaryEntry {
            phonetic,
            meanings: api.meanings.into_iter().map(Meaning::from).collect(),
        }
    }
}
