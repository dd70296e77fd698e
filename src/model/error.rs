//! Error types for lexicon.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from the binary entry point
//!   - [`LookupError`] - Failures talking to the random-word or dictionary services
//!   - `std::io::Error` - Terminal/TUI failures
//! - [`StorageError`] - Failures reading, writing or clearing the day cache
//!
//! # Recovery Strategy
//!
//! Lookup and storage errors are **non-fatal** inside the acquisition pipeline:
//!
//! - `LookupError::NotFound` from the dictionary consumes one acquisition attempt and the
//!   loop continues with a fresh random word. This is the common case, not an error state.
//! - Any other dictionary failure also consumes an attempt, but is logged at `warn`.
//! - A random-word failure ends acquisition; what the caller gets back is decided by
//!   [`TransportFailurePolicy`](crate::service::TransportFailurePolicy).
//! - Storage failures degrade to "no cache": a failed read is a miss, a failed write is
//!   logged and the fetched entry is still returned. A failed clear is logged and the
//!   reload goes ahead.
//!
//! Only configuration, logging and terminal failures reach [`AppError`].

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// Returned from the binary's `main`. Pipeline errors never get here; they are recovered
/// inside [`WordOfDayService`](crate::service::WordOfDayService).
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// HTTP client construction failed.
    #[error("Failed to set up lookup client: {0}")]
    Lookup(#[from] LookupError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Writing plain output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the external lookup services.
///
/// # Examples
///
/// ```
/// use lexicon::model::error::LookupError;
///
/// let err = LookupError::NotFound { word: "qzxfoo".to_string() };
/// assert!(err.is_not_found());
/// assert!(err.to_string().contains("qzxfoo"));
/// ```
#[derive(Debug, Error)]
pub enum LookupError {
    /// The dictionary has no entry for the word.
    ///
    /// Expected outcome for many random words. Drives the retry loop.
    #[error("No dictionary entry for '{word}'")]
    NotFound {
        /// The word that was looked up.
        word: String,
    },

    /// Network-level failure (connect, timeout, non-success status other than 404).
    #[error("Request to {url} failed: {reason}")]
    Transport {
        /// URL that was requested.
        url: String,
        /// Human readable reason.
        reason: String,
    },

    /// Response arrived but its body was not in the expected shape.
    #[error("Unexpected response from {url}: {reason}")]
    Decode {
        /// URL that was requested.
        url: String,
        /// What was wrong with the body.
        reason: String,
    },
}

impl LookupError {
    /// True for the "word has no dictionary entry" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

/// Errors reading or writing the persisted day cache.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem failure on the cache file.
    #[error("Cache I/O error at {path}: {source}")]
    Io {
        /// Cache file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Cache file exists but does not contain a valid record.
    #[error("Corrupt cache record at {path}: {reason}")]
    Corrupt {
        /// Cache file path.
        path: PathBuf,
        /// Deserialization error details.
        reason: String,
    },
}
