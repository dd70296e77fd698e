//! Configuration module.
//!
//! Settings resolve in layers: built-in defaults, then the TOML config file, then
//! environment variables, then command-line flags.

pub mod keybindings;
mod loader;

pub use keybindings::KeyBindings;
pub use loader::*;
