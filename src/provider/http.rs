//! HTTP implementations of the lookup providers.

use super::wire::ApiEntry;
use super::{DefinitionProvider, DictionaryEntry, RandomWordProvider};
use crate::model::LookupError;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Default random word endpoint.
pub const DEFAULT_RANDOM_WORD_URL: &str = "https://random-word-api.herokuapp.com/word";

/// Default dictionary endpoint; the word is appended as the last path segment.
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client(timeout: Duration) -> Result<Client, LookupError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("lexicon/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| LookupError::Transport {
            url: String::new(),
            reason: e.to_string(),
        })
}

fn transport(url: &str, err: impl std::fmt::Display) -> LookupError {
    LookupError::Transport {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

fn decode(url: &str, reason: impl Into<String>) -> LookupError {
    LookupError::Decode {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// Random word service client.
///
/// Expects a JSON array of strings and consumes only the first element.
pub struct HttpRandomWordProvider {
    client: Client,
    url: String,
}

impl HttpRandomWordProvider {
    /// Create a client for `url`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }
}

impl RandomWordProvider for HttpRandomWordProvider {
    fn random_word(&mut self) -> Result<String, LookupError> {
        debug!(url = %self.url, "Requesting random word");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| transport(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport(&self.url, format!("HTTP {status}")));
        }

        let words: Vec<String> = response.json().map_err(|e| decode(&self.url, e.to_string()))?;

        words
            .into_iter()
            .map(|w| w.trim().to_string())
            .next()
            .filter(|w| !w.is_empty())
            .ok_or_else(|| decode(&self.url, "empty word list"))
    }
}

/// Dictionary service client.
///
/// `GET {base}/{word}`; a 404 or an empty array means the word is unknown.
pub struct HttpDefinitionProvider {
    client: Client,
    base: Url,
}

impl HttpDefinitionProvider {
    /// Create a client for the dictionary at `base`.
    ///
    /// # Errors
    ///
    /// `LookupError::Decode` if `base` is not an absolute URL that can take path segments.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base = Url::parse(base).map_err(|e| decode(base, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(decode(base.as_str(), "dictionary URL cannot take a path"));
        }
        Ok(Self {
            client: build_client(timeout)?,
            base,
        })
    }

    /// URL the lookup for `word` goes to. The word is percent-encoded as one segment.
    pub fn definition_url(&self, word: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

impl DefinitionProvider for HttpDefinitionProvider {
    fn define(&mut self, word: &str) -> Result<DictionaryEntry, LookupError> {
        let url = self.definition_url(word);
        debug!(url = %url, "Requesting definition");

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| transport(url.as_str(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound {
                word: word.to_string(),
            });
        }
        if !status.is_success() {
            return Err(transport(url.as_str(), format!("HTTP {status}")));
        }

        let entries: Vec<ApiEntry> = response
            .json()
            .map_err(|e| decode(url.as_str(), e.to_string()))?;

        entries
            .into_iter()
            .next()
            .map(DictionaryEntry::from)
            .ok_or_else(|| LookupError::NotFound {
                word: word.to_string(),
            })
    }
}
