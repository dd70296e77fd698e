//! Configuration file loading with precedence handling.

use crate::cache::file::default_cache_path;
use crate::provider::http::{DEFAULT_DICTIONARY_URL, DEFAULT_RANDOM_WORD_URL};
use crate::service::{TransportFailurePolicy, DEFAULT_MAX_ATTEMPTS};
use crate::state::browse::DEFAULT_PHASE_DURATION;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default minimum drag length, in cells, for a swipe.
pub const DEFAULT_MIN_SWIPE_DISTANCE: f32 = 2.0;

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/lexicon/config.toml`.
///
/// ```toml
/// dictionary_url = "https://api.dictionaryapi.dev/api/v2/entries/en"
/// max_attempts = 10
/// animation_ms = 200
/// on_word_transport_failure = "fallback"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Random word endpoint.
    #[serde(default)]
    pub random_word_url: Option<String>,

    /// Dictionary endpoint; the word is appended as a path segment.
    #[serde(default)]
    pub dictionary_url: Option<String>,

    /// Where the cached word of the day is stored.
    #[serde(default)]
    pub cache_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Bound on acquisition attempts.
    #[serde(default)]
    pub max_attempts: Option<u32>,

    /// HTTP timeout per request, in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Duration of each animation phase, in milliseconds.
    #[serde(default)]
    pub animation_ms: Option<u64>,

    /// Minimum drag length, in cells, that counts as a swipe.
    #[serde(default)]
    pub min_swipe_distance: Option<f32>,

    /// Skip the animation for swipes that would not move.
    #[serde(default)]
    pub skip_noop_animation: Option<bool>,

    /// What to show when the random word service fails.
    #[serde(default)]
    pub on_word_transport_failure: Option<TransportFailurePolicy>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Random word endpoint.
    pub random_word_url: String,
    /// Dictionary endpoint.
    pub dictionary_url: String,
    /// Cache file location.
    pub cache_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Bound on acquisition attempts.
    pub max_attempts: u32,
    /// HTTP timeout per request, in seconds.
    pub request_timeout_secs: u64,
    /// Duration of each animation phase, in milliseconds.
    pub animation_ms: u64,
    /// Minimum drag length for a swipe.
    pub min_swipe_distance: f32,
    /// Skip animating no-op swipes.
    pub skip_noop_animation: bool,
    /// Random word service failure policy.
    pub on_word_transport_failure: TransportFailurePolicy,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            random_word_url: DEFAULT_RANDOM_WORD_URL.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            cache_path: default_cache_path(),
            log_file_path: default_log_path(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            animation_ms: DEFAULT_PHASE_DURATION.as_millis() as u64,
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            skip_noop_animation: false,
            on_word_transport_failure: TransportFailurePolicy::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/lexicon/lexicon.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to the cache directory and then
/// to the current directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("lexicon").join("lexicon.log"))
        .unwrap_or_else(|| PathBuf::from("lexicon.log"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/lexicon/config.toml` on Unix, appropriate path on other platforms.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexicon").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `LEXICON_CONFIG` environment variable
/// 3. Default path `~/.config/lexicon/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("LEXICON_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        random_word_url: config.random_word_url.unwrap_or(defaults.random_word_url),
        dictionary_url: config.dictionary_url.unwrap_or(defaults.dictionary_url),
        cache_path: config.cache_path.unwrap_or(defaults.cache_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        max_attempts: config.max_attempts.unwrap_or(defaults.max_attempts),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        animation_ms: config.animation_ms.unwrap_or(defaults.animation_ms),
        min_swipe_distance: config
            .min_swipe_distance
            .map_or(defaults.min_swipe_distance, swipe_distance_or_default),
        skip_noop_animation: config
            .skip_noop_animation
            .unwrap_or(defaults.skip_noop_animation),
        on_word_transport_failure: config
            .on_word_transport_failure
            .unwrap_or(defaults.on_word_transport_failure),
    }
}

/// Negative distances become 0; NaN and infinities fall back to the default.
fn swipe_distance_or_default(distance: f32) -> f32 {
    if distance.is_finite() {
        distance.max(0.0)
    } else {
        DEFAULT_MIN_SWIPE_DISTANCE
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LEXICON_CACHE_PATH`: Override cache file location
/// - `LEXICON_DICTIONARY_URL`: Override dictionary endpoint
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("LEXICON_CACHE_PATH") {
        config.cache_path = PathBuf::from(path);
    }

    if let Ok(url) = std::env::var("LEXICON_DICTIONARY_URL") {
        config.dictionary_url = url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. Only flags the user actually passed are applied.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cache_override: Option<PathBuf>) -> ResolvedConfig {
    if let Some(path) = cache_override {
        config.cache_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
