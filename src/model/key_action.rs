//! Domain-level keyboard actions independent of key bindings.

use super::Direction;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Discrete swipe. Default: arrows and h/j/k/l
    Swipe(Direction),
    /// Clear the cached word and fetch a new one. Default: r
    Reset,
    /// Show or hide the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Esc/Ctrl+c
    Quit,
}
