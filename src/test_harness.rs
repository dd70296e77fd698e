//! Test doubles and the acceptance harness.
//!
//! Scripted providers stand in for the HTTP services; `AcceptanceTestHarness` wraps
//! `TuiApp<TestBackend>` so user stories can be driven key by key.

use crate::cache::MemoryDayCache;
use crate::clock::FixedClock;
use crate::config::keybindings::KeyBindings;
use crate::model::{DayKey, Definition, LookupError, Meaning};
use crate::provider::{DefinitionProvider, DictionaryEntry, RandomWordProvider};
use crate::service::{AcquisitionOptions, WordOfDayService};
use crate::view::{BrowseSettings, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Shared record of the words each provider was asked about.
pub(crate) type CallLog = Rc<RefCell<Vec<String>>>;

pub(crate) fn day(raw: &str) -> DayKey {
    DayKey::parse(raw).unwrap()
}

/// Dictionary entry with one meaning per `(part_of_speech, definition texts)` pair.
pub(crate) fn dictionary_entry(meanings: &[(&str, &[&str])]) -> DictionaryEntry {
    DictionaryEntry {
        phonetic: "/test/".to_string(),
        meanings: meanings
            .iter()
            .map(|(pos, defs)| {
                Meaning::new(*pos, defs.iter().map(|d| Definition::new(*d)).collect())
            })
            .collect(),
    }
}

/// Random word provider replaying a fixed script. Runs dry with a transport error.
pub(crate) struct ScriptedWords {
    script: VecDeque<Result<String, LookupError>>,
    calls: CallLog,
}

impl ScriptedWords {
    pub(crate) fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: words.into_iter().map(|w| Ok(w.into())).collect(),
            calls: CallLog::default(),
        }
    }

    pub(crate) fn failing() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub(crate) fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }
}

impl RandomWordProvider for ScriptedWords {
    fn random_word(&mut self) -> Result<String, LookupError> {
        let next = self.script.pop_front().unwrap_or_else(|| {
            Err(LookupError::Transport {
                url: "scripted://words".to_string(),
                reason: "script exhausted".to_string(),
            })
        });
        if let Ok(word) = &next {
            self.calls.borrow_mut().push(word.clone());
        }
        next
    }
}

/// Dictionary that knows a fixed set of words. Everything else is not found.
#[derive(Default)]
pub(crate) struct ScriptedDictionary {
    known: HashMap<String, DictionaryEntry>,
    broken: Vec<String>,
    calls: CallLog,
}

impl ScriptedDictionary {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_word(mut self, word: &str, entry: DictionaryEntry) -> Self {
        self.known.insert(word.to_string(), entry);
        self
    }

    /// Lookups of `word` fail at the transport level.
    pub(crate) fn with_broken(mut self, word: &str) -> Self {
        self.broken.push(word.to_string());
        self
    }

    pub(crate) fn calls(&self) -> CallLog {
        Rc::clone(&self.calls)
    }
}

impl DefinitionProvider for ScriptedDictionary {
    fn define(&mut self, word: &str) -> Result<DictionaryEntry, LookupError> {
        self.calls.borrow_mut().push(word.to_string());
        if self.broken.iter().any(|w| w == word) {
            return Err(LookupError::Transport {
                url: format!("scripted://dictionary/{word}"),
                reason: "connection reset".to_string(),
            });
        }
        self.known
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound {
                word: word.to_string(),
            })
    }
}

pub(crate) type ScriptedService =
    WordOfDayService<ScriptedWords, ScriptedDictionary, MemoryDayCache, FixedClock>;

pub(crate) fn scripted_service(
    words: ScriptedWords,
    dictionary: ScriptedDictionary,
    cache: MemoryDayCache,
    today: &str,
) -> ScriptedService {
    WordOfDayService::new(
        words,
        dictionary,
        cache,
        FixedClock(day(today)),
        AcquisitionOptions::default(),
    )
}

/// Convert a ratatui buffer to a string representation.
///
/// Empty trailing lines are removed to keep assertions readable.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing.
///
/// Time is simulated: the harness keeps its own clock and advances it explicitly, so
/// animation phases can be stepped deterministically.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ScriptedService>,
    now: Instant,
}

impl AcceptanceTestHarness {
    /// Build the app around `service` on an 80x24 terminal and run the initial load.
    pub(crate) fn new(service: ScriptedService) -> Result<Self, TuiError> {
        Self::with_settings(service, BrowseSettings::default())
    }

    pub(crate) fn with_settings(
        service: ScriptedService,
        settings: BrowseSettings,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(80, 24))?;
        let mut app = TuiApp::with_terminal(terminal, service, KeyBindings::default(), settings);
        let now = Instant::now();
        app.load(now)?;
        Ok(Self { app, now })
    }

    pub(crate) fn app(&self) -> &TuiApp<TestBackend, ScriptedService> {
        &self.app
    }

    /// Press a key; returns true if the app wants to quit.
    pub(crate) fn press(&mut self, code: KeyCode) -> bool {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub(crate) fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let quit = self.app.handle_key(KeyEvent::new(code, modifiers), self.now);
        if !quit {
            // Reset reloads synchronously; render so the screen reflects it.
            let _ = self.app.draw(self.now);
        }
        quit
    }

    /// Drag with the left button from `from` to `to` (column, row).
    pub(crate) fn drag(&mut self, from: (u16, u16), to: (u16, u16)) {
        let mouse = |kind, (column, row): (u16, u16)| MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app
            .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), from), self.now);
        self.app
            .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), to), self.now);
        self.app
            .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), to), self.now);
    }

    /// Advance simulated time, ticking animations and redrawing.
    pub(crate) fn advance(&mut self, by: Duration) -> Result<(), TuiError> {
        self.now += by;
        self.app.tick(self.now);
        self.app.draw(self.now)
    }

    /// Advance far enough for any animation to finish.
    pub(crate) fn settle(&mut self) -> Result<(), TuiError> {
        self.advance(Duration::from_secs(1))
    }

    /// Render and return the screen contents.
    pub(crate) fn render_to_string(&mut self) -> Result<String, TuiError> {
        self.app.draw(self.now)?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }
}
