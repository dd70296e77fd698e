//! Lexicon: word of the day in the terminal.
//!
//! Acquires a random word with a dictionary entry, caches it for the calendar day, and
//! lets the user swipe through its meanings and definitions.
//!
//! Pure core (`model`, `state`, `service`) with an impure shell (`provider`, `cache`,
//! `view`) around it.

pub mod cache;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod provider;
pub mod service;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
