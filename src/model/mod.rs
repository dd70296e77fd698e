//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod day;
pub mod direction;
pub mod entry;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use day::{DayKey, InvalidDayKey};
pub use direction::{Axis, Direction};
pub use entry::{Definition, Meaning, WordEntry, FALLBACK_WORD};
pub use error::{AppError, LookupError, StorageError};
pub use key_action::KeyAction;
