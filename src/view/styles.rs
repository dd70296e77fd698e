//! Word card styling.
//!
//! A small fixed palette. Everything collapses to the terminal default when colors are off.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CardStyles =====

/// Styles for the parts of the word card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyles {
    /// The headword.
    pub word: Style,
    /// Phonetic spelling under the headword.
    pub phonetic: Style,
    /// Part-of-speech label.
    pub part_of_speech: Style,
    /// Definition text.
    pub definition: Style,
    /// Usage example.
    pub example: Style,
    /// Secondary text: position counters, synonyms, hints.
    pub muted: Style,
    /// Card border.
    pub border: Style,
}

impl CardStyles {
    /// Styles for the given color configuration.
    ///
    /// Modifiers (bold, italic) survive with colors off; only foreground colors are dropped.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let italic = Style::default().add_modifier(Modifier::ITALIC);

        if config.colors_enabled() {
            Self {
                word: bold.fg(Color::Yellow),
                phonetic: italic.fg(Color::Gray),
                part_of_speech: italic.fg(Color::Cyan),
                definition: Style::default().fg(Color::White),
                example: italic.fg(Color::Green),
                muted: Style::default().fg(Color::DarkGray),
                border: Style::default().fg(Color::Cyan),
            }
        } else {
            Self {
                word: bold,
                phonetic: italic,
                part_of_speech: italic,
                definition: Style::default(),
                example: italic,
                muted: Style::default(),
                border: Style::default(),
            }
        }
    }
}

impl Default for CardStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

/// Apply an animation opacity to a style.
///
/// Returns `None` when the content should not be drawn at all.
pub fn faded(style: Style, opacity: f32) -> Option<Style> {
    use super::constants::{DIM_OPACITY, HIDDEN_OPACITY};

    if opacity < HIDDEN_OPACITY {
        None
    } else if opacity < DIM_OPACITY {
        Some(style.add_modifier(Modifier::DIM))
    } else {
        Some(style)
    }
}

// ===== Tests =====
