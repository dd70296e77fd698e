//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. It owns the browse state
//! machine; nothing else mutates the browse position.

use crate::model::WordEntry;
use crate::service::LoadOutcome;
use crate::state::browse::BrowseStateMachine;

/// Where the displayed entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOrigin {
    /// Today's cached record.
    Cache,
    /// Freshly acquired.
    Network {
        /// Attempts it took.
        attempts: u32,
    },
    /// Attempts ran out (or policy substituted the fallback).
    Fallback,
    /// The word service failed; the fallback is displayed in place of nothing.
    Unavailable,
}

/// Load progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Acquisition in progress.
    Loading,
    /// Something renderable is available.
    Ready {
        /// Entry to display.
        entry: WordEntry,
        /// How it was obtained.
        origin: EntryOrigin,
    },
}

/// In-progress mouse drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    /// Column where the button went down.
    pub column: u16,
    /// Row where the button went down.
    pub row: u16,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    status: LoadStatus,
    browse: BrowseStateMachine,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Start of the current drag, if the left button is held.
    pub drag_start: Option<DragStart>,
}

impl AppState {
    /// Initial state: loading, browse machine as given.
    pub fn new(browse: BrowseStateMachine) -> Self {
        Self {
            status: LoadStatus::Loading,
            browse,
            help_visible: false,
            drag_start: None,
        }
    }

    /// Load progress.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Entry being displayed, if loaded.
    pub fn entry(&self) -> Option<&WordEntry> {
        match &self.status {
            LoadStatus::Ready { entry, .. } => Some(entry),
            LoadStatus::Loading => None,
        }
    }

    /// Origin of the displayed entry, if loaded.
    pub fn origin(&self) -> Option<EntryOrigin> {
        match &self.status {
            LoadStatus::Ready { origin, .. } => Some(*origin),
            LoadStatus::Loading => None,
        }
    }

    /// Browse machine (read-only).
    pub fn browse(&self) -> &BrowseStateMachine {
        &self.browse
    }

    /// Browse machine together with the entry it browses.
    ///
    /// `None` while loading.
    pub fn browse_mut(&mut self) -> Option<(&mut BrowseStateMachine, &WordEntry)> {
        match &self.status {
            LoadStatus::Ready { entry, .. } => Some((&mut self.browse, entry)),
            LoadStatus::Loading => None,
        }
    }

    /// Drop the current entry and go back to loading. Browse position returns to (0,0).
    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
        self.browse.reset();
        self.drag_start = None;
    }

    /// Install the result of a load. Browse position starts at (0,0).
    ///
    /// An unavailable outcome displays the fallback entry for that day.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        let (entry, origin) = match outcome {
            LoadOutcome::Cached(entry) => (entry, EntryOrigin::Cache),
            LoadOutcome::Fetched { entry, attempts } => (entry, EntryOrigin::Network { attempts }),
            LoadOutcome::Fallback { entry, .. } => (entry, EntryOrigin::Fallback),
            LoadOutcome::Unavailable { day, .. } => {
                (WordEntry::fallback(day), EntryOrigin::Unavailable)
            }
        };
        self.browse.reset();
        self.status = LoadStatus::Ready { entry, origin };
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}
