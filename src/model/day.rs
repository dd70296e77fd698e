//! Calendar day key used to validate cache freshness.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DAY_FORMAT: &str = "%Y-%m-%d";
const DAY_LEN: usize = "YYYY-MM-DD".len();

/// Calendar day a [`WordEntry`](super::WordEntry) was produced for.
///
/// Displayed and serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Wrap a date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Smart constructor: accepts only zero-padded `YYYY-MM-DD`.
    pub fn parse(raw: &str) -> Result<Self, InvalidDayKey> {
        if raw.len() != DAY_LEN {
            return Err(InvalidDayKey(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, DAY_FORMAT)
            .map(Self)
            .map_err(|_| InvalidDayKey(raw.to_string()))
    }

    /// Underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before this one, if representable.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Rejected day string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid day '{0}': expected YYYY-MM-DD")]
pub struct InvalidDayKey(pub String);
