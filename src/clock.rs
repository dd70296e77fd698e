//! Source of "today" for cache freshness checks.

use crate::model::DayKey;
use chrono::Utc;

/// Produces the current calendar day.
pub trait Clock {
    /// Today's day key.
    fn today(&self) -> DayKey;
}

/// Wall clock. Days roll over at UTC midnight, so a cached word is shared by every
/// client on the same UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayKey {
        DayKey::new(Utc::now().date_naive())
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DayKey);

impl Clock for FixedClock {
    fn today(&self) -> DayKey {
        self.0
    }
}
