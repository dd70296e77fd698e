//! Lexicon - Entry Point

use clap::Parser;
use lexicon::cache::{DayCache, FileDayCache, MemoryDayCache};
use lexicon::clock::SystemClock;
use lexicon::config::ResolvedConfig;
use lexicon::model::{AppError, WordEntry};
use lexicon::provider::{HttpDefinitionProvider, HttpRandomWordProvider};
use lexicon::service::{AcquisitionOptions, LoadOutcome, WordOfDayService};
use lexicon::view::{BrowseSettings, ColorConfig};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Lexicon - a word of the day, browsable in the terminal
#[derive(Parser, Debug)]
#[command(name = "lexicon")]
#[command(version)]
#[command(about = "Word of the day with swipe-style browsing of meanings and definitions")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the cached word of the day
    #[arg(long, conflicts_with = "no_cache")]
    pub cache: Option<PathBuf>,

    /// Forget today's word and fetch a new one
    #[arg(long)]
    pub reset: bool,

    /// Print the word to stdout instead of opening the viewer
    #[arg(long)]
    pub print: bool,

    /// Keep the word in memory only
    #[arg(long)]
    pub no_cache: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = lexicon::config::load_config_with_precedence(args.config.clone())?;
        let merged = lexicon::config::merge_config(config_file);
        let with_env = lexicon::config::apply_env_overrides(merged);
        lexicon::config::apply_cli_overrides(with_env, args.cache.clone())
    };

    // Guard flushes buffered log lines on drop
    let _log_guard = lexicon::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if args.no_cache {
        run_with(MemoryDayCache::new(), &args, &config)
    } else {
        let cache = FileDayCache::new(config.cache_path.clone());
        info!(path = %cache.path().display(), "Using cache file");
        run_with(cache, &args, &config)
    }
}

fn run_with<C: DayCache>(cache: C, args: &Args, config: &ResolvedConfig) -> Result<(), AppError> {
    let timeout = Duration::from_secs(config.request_timeout_secs);
    let words = HttpRandomWordProvider::new(config.random_word_url.clone(), timeout)?;
    let dictionary = HttpDefinitionProvider::new(&config.dictionary_url, timeout)?;
    let options = AcquisitionOptions {
        max_attempts: config.max_attempts,
        on_word_transport_failure: config.on_word_transport_failure,
    };

    let mut service = WordOfDayService::new(words, dictionary, cache, SystemClock, options);

    if args.reset {
        match service.reset() {
            Ok(()) => info!("Cached word cleared"),
            Err(error) => warn!(%error, "Failed to clear cached word"),
        }
    }

    if args.print {
        let entry = match service.load_for_today() {
            LoadOutcome::Unavailable { day, reason } => {
                warn!(%reason, "Word service unavailable; printing fallback");
                WordEntry::fallback(day)
            }
            LoadOutcome::Cached(entry)
            | LoadOutcome::Fetched { entry, .. }
            | LoadOutcome::Fallback { entry, .. } => entry,
        };
        let mut stdout = std::io::stdout().lock();
        lexicon::view::write_entry(&mut stdout, &entry)?;
        stdout.flush()?;
        return Ok(());
    }

    lexicon::view::run(
        service,
        BrowseSettings::from(config),
        ColorConfig::from_env_and_args(args.no_color),
    )?;

    Ok(())
}
