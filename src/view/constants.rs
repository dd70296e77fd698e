//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout and timing values so they can be tuned in one place.

use std::time::Duration;

/// Height of the word header (word line + phonetic line).
pub const HEADER_HEIGHT: u16 = 2;

/// Height of the status bar in lines.
///
/// Single line for the entry origin and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Rows the meaning and definition blocks travel during a vertical swipe.
pub const VERTICAL_TRAVEL_ROWS: f32 = 2.0;

/// Below this opacity the animated content is not drawn at all.
pub const HIDDEN_OPACITY: f32 = 0.35;

/// Below this opacity the animated content is drawn dimmed.
pub const DIM_OPACITY: f32 = 0.75;

/// Event poll timeout while an animation is running (about 60 frames per second).
pub const ANIMATION_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Event poll timeout while idle.
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;
