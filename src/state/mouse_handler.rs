//! Mouse event handler.
//!
//! A drag (left button down, move, up) is the terminal's pan gesture. Only the press
//! and release positions matter; intermediate drag samples are ignored.

use crate::state::app_state::DragStart;
use crate::state::browse::BeginOutcome;
use crate::state::gesture::classify_with_threshold;
use crate::state::swipe_handler::handle_swipe;
use crate::state::AppState;
use std::time::Instant;
use tracing::trace;

/// Record where a drag began.
pub fn handle_drag_start(state: &mut AppState, column: u16, row: u16) {
    state.drag_start = Some(DragStart { column, row });
}

/// Finish a drag at `(column, row)` and turn it into a swipe.
///
/// Returns `None` if no drag was in progress, the displacement was shorter than
/// `min_distance` cells, or nothing is loaded.
pub fn handle_drag_end(
    state: &mut AppState,
    column: u16,
    row: u16,
    min_distance: f32,
    now: Instant,
) -> Option<BeginOutcome> {
    let start = state.drag_start.take()?;
    let dx = f32::from(column) - f32::from(start.column);
    let dy = f32::from(row) - f32::from(start.row);

    let Some(direction) = classify_with_threshold(dx, dy, min_distance) else {
        trace!(dx, dy, "Drag too short; ignored");
        return None;
    };

    trace!(dx, dy, %direction, "Drag classified");
    handle_swipe(state, direction, now)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
