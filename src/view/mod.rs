//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
pub mod plain;
pub mod styles;
mod word_card;

pub use help::render_help_overlay;
pub use plain::write_entry;
pub use styles::{CardStyles, ColorConfig};
pub use word_card::render_word_card;

use crate::config::keybindings::KeyBindings;
use crate::config::{ResolvedConfig, DEFAULT_MIN_SWIPE_DISTANCE};
use crate::model::KeyAction;
use crate::service::WordOfDay;
use crate::state::browse::DEFAULT_PHASE_DURATION;
use crate::state::mouse_handler::{handle_drag_end, handle_drag_start};
use crate::state::{advance_animation, handle_swipe, AppState, BrowseStateMachine};
use constants::{ANIMATION_POLL_INTERVAL, IDLE_POLL_INTERVAL};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Browse tuning handed to the TUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrowseSettings {
    /// Shortest drag, in cells, that counts as a swipe.
    pub min_swipe_distance: f32,
    /// Duration of each animation phase.
    pub phase_duration: Duration,
    /// Apply no-op swipes without animating them.
    pub skip_noop_animation: bool,
}

impl Default for BrowseSettings {
    fn default() -> Self {
        Self {
            min_swipe_distance: DEFAULT_MIN_SWIPE_DISTANCE,
            phase_duration: DEFAULT_PHASE_DURATION,
            skip_noop_animation: false,
        }
    }
}

impl From<&ResolvedConfig> for BrowseSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            min_swipe_distance: config.min_swipe_distance,
            phase_duration: Duration::from_millis(config.animation_ms),
            skip_noop_animation: config.skip_noop_animation,
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the word source
/// so tests can script it.
pub struct TuiApp<B, W>
where
    B: ratatui::backend::Backend,
    W: WordOfDay,
{
    terminal: Terminal<B>,
    app_state: AppState,
    service: W,
    key_bindings: KeyBindings,
    min_swipe_distance: f32,
    styles: CardStyles,
}

impl<W: WordOfDay> TuiApp<CrosstermBackend<Stdout>, W> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(service: W, settings: BrowseSettings, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, service, KeyBindings::default(), settings)
            .with_styles(CardStyles::with_color_config(colors)))
    }

    /// Run the main event loop
    ///
    /// Loads the word first, then returns when the user quits. Polls fast while an
    /// animation is running and slowly otherwise.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.load(Instant::now())?;
        self.draw(Instant::now())?;

        loop {
            if event::poll(self.poll_timeout())? {
                let now = Instant::now();
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, now) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, now),
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                    }
                    _ => continue,
                }
                self.tick(now);
                self.draw(now)?;
            } else if self.app_state.browse().is_animating() {
                let now = Instant::now();
                self.tick(now);
                self.draw(now)?;
            }
        }
    }
}

impl<B, W> TuiApp<B, W>
where
    B: ratatui::backend::Backend,
    W: WordOfDay,
{
    /// Build the app around an existing terminal. Nothing is loaded yet; call [`Self::load`].
    pub fn with_terminal(
        terminal: Terminal<B>,
        service: W,
        key_bindings: KeyBindings,
        settings: BrowseSettings,
    ) -> Self {
        let browse =
            BrowseStateMachine::new(settings.phase_duration, settings.skip_noop_animation);
        Self {
            terminal,
            app_state: AppState::new(browse),
            service,
            key_bindings,
            min_swipe_distance: settings.min_swipe_distance,
            styles: CardStyles::default(),
        }
    }

    /// Replace the card styles.
    pub fn with_styles(mut self, styles: CardStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Resolve today's word, showing the loading frame while the lookup blocks.
    pub fn load(&mut self, now: Instant) -> Result<(), TuiError> {
        self.app_state.begin_loading();
        self.draw(now)?;

        let outcome = self.service.load_for_today();
        if let Some(entry) = outcome.entry() {
            info!(word = %entry.word, day = %entry.produced_for, "Displaying word");
        }
        self.app_state.apply_outcome(outcome);
        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, whatever the bindings or overlay say
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.app_state.toggle_help(),
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Swipe(direction) => {
                handle_swipe(&mut self.app_state, direction, now);
            }
            KeyAction::Reset => self.reset(now),
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::Quit => return true,
        }
        false
    }

    /// Handle a single mouse event
    ///
    /// Left-button press and release bracket a drag; the displacement between them is
    /// classified as a swipe.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.app_state.help_visible {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                handle_drag_start(&mut self.app_state, mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                handle_drag_end(
                    &mut self.app_state,
                    mouse.column,
                    mouse.row,
                    self.min_swipe_distance,
                    now,
                );
            }
            _ => {}
        }
    }

    /// Advance any running animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        advance_animation(&mut self.app_state, now);
    }

    /// Render the current frame
    pub fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let animation = self.app_state.browse().frame(now);
        let state = &self.app_state;
        let styles = &self.styles;

        self.terminal.draw(|frame| {
            render_word_card(frame, state, animation, styles);
            if state.help_visible {
                render_help_overlay(frame);
            }
        })?;

        Ok(())
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self) -> Duration {
        if self.app_state.browse().is_animating() {
            ANIMATION_POLL_INTERVAL
        } else {
            IDLE_POLL_INTERVAL
        }
    }

    /// Current UI state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Word source backing the app.
    pub fn service(&self) -> &W {
        &self.service
    }

    /// Terminal, for buffer inspection.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Clear the cached word and acquire a new one.
    ///
    /// Failures are logged; the reload still runs.
    fn reset(&mut self, now: Instant) {
        info!("Reset requested");
        if let Err(e) = self.service.reset() {
            warn!(error = %e, "Failed to clear cached word");
        }
        if let Err(e) = self.load(now) {
            warn!(error = %e, "Failed to redraw during reload");
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run<W: WordOfDay>(
    service: W,
    settings: BrowseSettings,
    colors: ColorConfig,
) -> Result<(), TuiError> {
    let result = TuiApp::new(service, settings, colors).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
